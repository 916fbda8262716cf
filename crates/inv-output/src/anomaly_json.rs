use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use inv_model::{AnomalyEntry, AnomalyLog, Severity};

pub const ANOMALY_LOG_FILE: &str = "anomalies.json";
pub const ANOMALY_SCHEMA: &str = "inv-clean.anomaly-log";
pub const ANOMALY_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct AnomalyLogPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub record_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub anomalies: &'a [AnomalyEntry],
}

pub fn build_anomaly_payload<'a>(
    source: &str,
    record_count: usize,
    log: &'a AnomalyLog,
) -> AnomalyLogPayload<'a> {
    AnomalyLogPayload {
        schema: ANOMALY_SCHEMA,
        schema_version: ANOMALY_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        record_count,
        error_count: log.count_by_severity(Severity::Error),
        warning_count: log.count_by_severity(Severity::Warning),
        info_count: log.count_by_severity(Severity::Info),
        anomalies: log.entries(),
    }
}

/// Write the anomaly log payload to `output_dir`.
pub fn write_anomaly_log_json(
    output_dir: &Path,
    source: &str,
    record_count: usize,
    log: &AnomalyLog,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let output_path = output_dir.join(ANOMALY_LOG_FILE);
    let payload = build_anomaly_payload(source, record_count, log);
    let json = serde_json::to_string_pretty(&payload).context("serialize anomaly log")?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write {}", output_path.display()))?;
    debug!(path = %output_path.display(), anomalies = log.len(), "wrote anomaly log");
    Ok(output_path)
}
