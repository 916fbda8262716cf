use std::collections::BTreeMap;
use std::path::PathBuf;

use inv_model::{AnomalyLog, CLEAN_COLUMNS, Severity};

/// Outcome of one `clean` run.
#[derive(Debug)]
pub struct CleanResult {
    pub source: PathBuf,
    pub records: usize,
    /// Recognized columns absent from the input header.
    pub missing_columns: Vec<&'static str>,
    pub passthrough_columns: Vec<String>,
    /// Records per classified device type.
    pub device_types: BTreeMap<String, usize>,
    pub anomalies: AnomalyLog,
    pub outputs: OutputPaths,
}

/// Files written by a run. Both stay `None` on a dry run.
#[derive(Debug, Default)]
pub struct OutputPaths {
    pub clean_table: Option<PathBuf>,
    pub anomaly_log: Option<PathBuf>,
}

/// Per-field anomaly counts for the summary table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCounts {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

impl FieldCounts {
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.info
    }
}

impl CleanResult {
    pub fn has_errors(&self) -> bool {
        self.anomalies.has_errors()
    }

    /// Anomaly counts per field, in output column order.
    pub fn field_counts(&self) -> Vec<(String, FieldCounts)> {
        let mut counts: Vec<(String, FieldCounts)> = Vec::new();
        for entry in &self.anomalies {
            let index = match counts.iter().position(|(field, _)| *field == entry.field) {
                Some(index) => index,
                None => {
                    counts.push((entry.field.clone(), FieldCounts::default()));
                    counts.len() - 1
                }
            };
            let slot = &mut counts[index].1;
            match entry.severity {
                Severity::Error => slot.errors += 1,
                Severity::Warning => slot.warnings += 1,
                Severity::Info => slot.info += 1,
            }
        }
        counts.sort_by_key(|(field, _)| {
            CLEAN_COLUMNS
                .iter()
                .position(|column| *column == field.as_str())
                .unwrap_or(usize::MAX)
        });
        counts
    }
}
