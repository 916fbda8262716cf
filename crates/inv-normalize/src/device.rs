//! Device-type classification.
//!
//! Classification runs an ordered list of [`ClassificationStrategy`] values
//! and stops at the first one that produces an answer. When every
//! deterministic strategy comes back empty the [`DeviceTypeOracle`] is
//! consulted, and if that has nothing either the device type defaults to
//! `"unknown"` with low confidence. Classification never fails.

use inv_model::{Classification, Confidence, Strategy, UNKNOWN_DEVICE_TYPE};
use inv_tables::DeviceTables;
use tracing::trace;

/// Optional external classifier consulted after the deterministic strategies.
pub trait DeviceTypeOracle: Send + Sync {
    /// Return a device type for the record, or `"unknown"` when undecided.
    fn classify(&self, hostname: &str, notes: &str) -> String;
}

/// Oracle that never decides. Keeps classification fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOracle;

impl DeviceTypeOracle for NoopOracle {
    fn classify(&self, _hostname: &str, _notes: &str) -> String {
        UNKNOWN_DEVICE_TYPE.to_string()
    }
}

/// Fields the classifier reads from a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceInput<'a> {
    pub device_type: &'a str,
    pub hostname: &'a str,
    pub notes: &'a str,
}

/// One deterministic classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationStrategy {
    /// Trust a non-empty `device_type` field, mapped through the alias table.
    ExplicitField,
    /// Scan hostname and notes for keyword substrings, in table order.
    KeywordHeuristic,
}

/// Strategy order used by [`DeviceClassifier::new`].
pub const DEFAULT_STRATEGIES: &[ClassificationStrategy] = &[
    ClassificationStrategy::ExplicitField,
    ClassificationStrategy::KeywordHeuristic,
];

impl ClassificationStrategy {
    /// Try this strategy; `None` means "no signal, try the next one".
    pub fn attempt(self, tables: &DeviceTables, input: &DeviceInput<'_>) -> Option<Classification> {
        match self {
            Self::ExplicitField => explicit_field(tables, input.device_type),
            Self::KeywordHeuristic => keyword_heuristic(tables, input.hostname, input.notes),
        }
    }
}

fn explicit_field(tables: &DeviceTables, device_type: &str) -> Option<Classification> {
    let trimmed = device_type.trim();
    if trimmed.is_empty() {
        return None;
    }
    let resolved = tables
        .resolve_alias(trimmed)
        .map(str::to_string)
        .unwrap_or_else(|| trimmed.to_lowercase());
    Some(Classification {
        device_type: resolved,
        confidence: Confidence::High,
        strategy: Strategy::ExplicitField,
    })
}

fn keyword_heuristic(tables: &DeviceTables, hostname: &str, notes: &str) -> Option<Classification> {
    let haystack = format!("{hostname} {notes}").to_lowercase();
    let rule = tables.keywords.iter().find(|rule| {
        rule.keywords
            .iter()
            .any(|keyword| haystack.contains(keyword.as_str()))
    })?;
    Some(Classification {
        device_type: rule.device_type.clone(),
        confidence: Confidence::Medium,
        strategy: Strategy::KeywordHeuristic,
    })
}

/// Classifier combining the strategy list, the oracle, and the default.
pub struct DeviceClassifier {
    tables: DeviceTables,
    strategies: Vec<ClassificationStrategy>,
    oracle: Box<dyn DeviceTypeOracle>,
}

impl DeviceClassifier {
    pub fn new(tables: DeviceTables) -> Self {
        Self {
            tables,
            strategies: DEFAULT_STRATEGIES.to_vec(),
            oracle: Box::new(NoopOracle),
        }
    }

    pub fn with_strategies(mut self, strategies: Vec<ClassificationStrategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_oracle(mut self, oracle: Box<dyn DeviceTypeOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn strategies(&self) -> &[ClassificationStrategy] {
        &self.strategies
    }

    pub fn classify(&self, input: &DeviceInput<'_>) -> Classification {
        for strategy in &self.strategies {
            if let Some(classification) = strategy.attempt(&self.tables, input) {
                trace!(
                    strategy = ?strategy,
                    device_type = %classification.device_type,
                    "device type classified"
                );
                return classification;
            }
        }

        let answer = self.oracle.classify(input.hostname, input.notes);
        let answer = answer.trim().to_lowercase();
        if !answer.is_empty() && answer != UNKNOWN_DEVICE_TYPE {
            trace!(device_type = %answer, "device type supplied by oracle");
            return Classification {
                device_type: answer,
                confidence: Confidence::Low,
                strategy: Strategy::Oracle,
            };
        }
        Classification::unknown()
    }
}

impl Default for DeviceClassifier {
    fn default() -> Self {
        Self::new(DeviceTables::default())
    }
}

impl std::fmt::Debug for DeviceClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceClassifier")
            .field("strategies", &self.strategies)
            .finish_non_exhaustive()
    }
}
