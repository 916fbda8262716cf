//! The `clean` pipeline: load tables, ingest, normalize, write outputs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use inv_ingest::read_inventory_csv;
use inv_normalize::{RecordProcessor, process_batch};
use inv_output::{write_anomaly_log_json, write_clean_csv};
use inv_tables::Tables;

use crate::types::{CleanResult, OutputPaths};

/// Inputs for one `clean` run.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub input: PathBuf,
    /// Defaults to the input file's directory.
    pub output_dir: Option<PathBuf>,
    /// TOML lookup table override; built-in tables when `None`.
    pub tables: Option<PathBuf>,
    pub dry_run: bool,
}

impl CleanOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            self.input
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        })
    }
}

pub fn run_clean(options: &CleanOptions) -> Result<CleanResult> {
    let source = options.input.display().to_string();
    let span = info_span!("clean", source = %source);
    let _guard = span.enter();

    let tables = Tables::load_or_default(options.tables.as_deref()).with_context(|| {
        match &options.tables {
            Some(path) => format!("load lookup tables {}", path.display()),
            None => "load built-in lookup tables".to_string(),
        }
    })?;

    let ingest_start = Instant::now();
    let table = read_inventory_csv(&options.input)
        .with_context(|| format!("read {}", options.input.display()))?;
    let missing_columns = table.missing_columns();
    if !missing_columns.is_empty() {
        warn!(
            columns = ?missing_columns,
            "recognized columns missing from input; treated as empty"
        );
    }
    let passthrough_columns = table.passthrough_columns();
    info!(
        rows = table.len(),
        columns = table.headers.len(),
        passthrough = passthrough_columns.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let processor = RecordProcessor::new(&tables);
    let outcome = process_batch(&processor, table.records);

    let mut device_types = BTreeMap::new();
    for record in &outcome.records {
        *device_types.entry(record.device_type.clone()).or_insert(0) += 1;
    }

    let mut outputs = OutputPaths::default();
    if options.dry_run {
        info!("dry run; no files written");
    } else {
        let output_dir = options.resolved_output_dir();
        let output_start = Instant::now();
        outputs.clean_table = Some(
            write_clean_csv(&output_dir, &outcome.records, &passthrough_columns)
                .context("write clean table")?,
        );
        outputs.anomaly_log = Some(
            write_anomaly_log_json(&output_dir, &source, outcome.records.len(), &outcome.anomalies)
                .context("write anomaly log")?,
        );
        info!(
            output_dir = %output_dir.display(),
            duration_ms = output_start.elapsed().as_millis(),
            "outputs written"
        );
    }

    Ok(CleanResult {
        source: options.input.clone(),
        records: outcome.records.len(),
        missing_columns,
        passthrough_columns,
        device_types,
        anomalies: outcome.anomalies,
        outputs,
    })
}
