use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::Reason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A field failed validation.
    Error,
    /// A field is missing or inconsistent with another field.
    Warning,
    /// A notable automatic correction or a partial extraction.
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level event surfaced to a human reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyEntry {
    pub record_id: String,
    pub field: String,
    pub original_value: String,
    pub reason: Reason,
    pub severity: Severity,
    pub message: String,
}

impl AnomalyEntry {
    pub fn new(
        record_id: impl Into<String>,
        field: impl Into<String>,
        original_value: impl Into<String>,
        reason: Reason,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            field: field.into(),
            original_value: original_value.into(),
            reason,
            severity: reason.severity(),
            message: reason.description().to_string(),
        }
    }
}

/// Append-only, ordered anomaly sequence for a batch run.
///
/// Entries can be added and read but never modified or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnomalyLog {
    entries: Vec<AnomalyEntry>,
}

impl AnomalyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: AnomalyEntry) {
        self.entries.push(entry);
    }

    /// Append every entry of `other`, preserving its order.
    pub fn append(&mut self, other: AnomalyLog) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[AnomalyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnomalyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_record<'a>(&'a self, record_id: &'a str) -> impl Iterator<Item = &'a AnomalyEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.record_id == record_id)
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.severity == Severity::Error)
    }
}

impl<'a> IntoIterator for &'a AnomalyLog {
    type Item = &'a AnomalyEntry;
    type IntoIter = std::slice::Iter<'a, AnomalyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
