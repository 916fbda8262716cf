use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::debug;

use inv_model::{CLEAN_COLUMNS, CleanRecord};

pub const CLEAN_TABLE_FILE: &str = "inventory_clean.csv";

/// Output header: the clean columns, then passthrough columns in input order.
pub fn clean_headers(passthrough: &[String]) -> Vec<String> {
    CLEAN_COLUMNS
        .iter()
        .map(|column| (*column).to_string())
        .chain(passthrough.iter().cloned())
        .collect()
}

/// Write the clean table to `output_dir`, creating the directory if needed.
pub fn write_clean_csv(
    output_dir: &Path,
    records: &[CleanRecord],
    passthrough: &[String],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let output_path = output_dir.join(CLEAN_TABLE_FILE);
    let mut writer = WriterBuilder::new()
        .from_path(&output_path)
        .with_context(|| format!("create {}", output_path.display()))?;

    writer
        .write_record(clean_headers(passthrough))
        .with_context(|| format!("write header to {}", output_path.display()))?;
    for record in records {
        let mut row = record.values();
        row.extend(
            passthrough
                .iter()
                .map(|column| record.passthrough_value(column).to_string()),
        );
        writer
            .write_record(&row)
            .with_context(|| format!("write record {} to {}", record.record_id, output_path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;
    debug!(path = %output_path.display(), rows = records.len(), "wrote clean table");
    Ok(output_path)
}
