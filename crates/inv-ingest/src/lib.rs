//! Inventory ingestion: reads a raw CSV table into [`inv_model::RawRecord`]s.

pub mod csv_table;
pub mod error;

pub use csv_table::{InventoryTable, read_inventory_csv};
pub use error::{IngestError, Result};
