//! Batch driver: runs the record processor over every row in input order.

use std::time::Instant;

use inv_model::{AnomalyLog, CleanRecord, RawRecord, Severity};
use tracing::{info, info_span};

use crate::processor::RecordProcessor;

/// Clean rows and the anomaly log for one run, both in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub records: Vec<CleanRecord>,
    pub anomalies: AnomalyLog,
}

impl BatchOutcome {
    pub fn has_errors(&self) -> bool {
        self.anomalies.has_errors()
    }
}

/// Process `records` sequentially with a shared anomaly log.
pub fn process_batch<I>(processor: &RecordProcessor, records: I) -> BatchOutcome
where
    I: IntoIterator<Item = RawRecord>,
{
    let span = info_span!("batch");
    let _guard = span.enter();
    let start = Instant::now();

    let mut outcome = BatchOutcome::default();
    for raw in records {
        let record = processor.process(&raw, &mut outcome.anomalies);
        outcome.records.push(record);
    }

    info!(
        records = outcome.records.len(),
        anomalies = outcome.anomalies.len(),
        errors = outcome.anomalies.count_by_severity(Severity::Error),
        warnings = outcome.anomalies.count_by_severity(Severity::Warning),
        duration_ms = start.elapsed().as_millis(),
        "batch complete"
    );
    outcome
}
