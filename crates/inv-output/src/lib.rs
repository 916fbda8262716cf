//! Inventory output generation.
//!
//! - **Clean table**: CSV with the fixed clean columns followed by passthrough columns
//! - **Anomaly log**: JSON payload wrapping the ordered anomaly entries

mod anomaly_json;
mod clean_csv;

pub use anomaly_json::{
    ANOMALY_LOG_FILE, ANOMALY_SCHEMA, ANOMALY_SCHEMA_VERSION, AnomalyLogPayload,
    build_anomaly_payload, write_anomaly_log_json,
};
pub use clean_csv::{CLEAN_TABLE_FILE, clean_headers, write_clean_csv};
