//! Input and output row types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classification::Confidence;

/// Columns the engine validates or normalizes. Any other input column is
/// passed through untouched.
pub const RECOGNIZED_COLUMNS: &[&str] = &[
    "ip",
    "hostname",
    "fqdn",
    "mac",
    "owner",
    "device_type",
    "notes",
    "site",
];

/// Optional input column whose value identifies the record in the anomaly log.
pub const SOURCE_ROW_ID_COLUMN: &str = "source_row_id";

/// Fixed column order of the clean table. Passthrough columns follow.
///
/// `record_id` carries the identifier used by anomaly log entries, so the two
/// outputs join on it.
pub const CLEAN_COLUMNS: &[&str] = &[
    "record_id",
    "ip",
    "ip_valid",
    "ip_type",
    "subnet_cidr",
    "ptr_record",
    "hostname",
    "hostname_valid",
    "fqdn",
    "fqdn_valid",
    "fqdn_consistent",
    "mac",
    "mac_valid",
    "owner",
    "owner_name",
    "owner_email",
    "owner_team",
    "device_type",
    "device_type_confidence",
    "notes",
    "site",
    "normalization_steps",
];

/// One raw input row. Absent columns read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub record_id: String,
    columns: Vec<(String, String)>,
}

impl RawRecord {
    /// Build a record from `(column, value)` pairs in input column order.
    pub fn new(record_id: impl Into<String>, columns: Vec<(String, String)>) -> Self {
        Self {
            record_id: record_id.into(),
            columns,
        }
    }

    pub fn from_pairs<I, K, V>(record_id: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            record_id,
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Value of `column` (matched case-insensitively), or `""` when absent.
    pub fn get(&self, column: &str) -> &str {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn columns(&self) -> &[(String, String)] {
        &self.columns
    }

    /// Columns the engine does not interpret, in input order.
    pub fn passthrough(&self) -> impl Iterator<Item = &(String, String)> {
        self.columns.iter().filter(|(name, _)| !is_recognized(name))
    }
}

/// Whether `column` is one of [`RECOGNIZED_COLUMNS`].
pub fn is_recognized(column: &str) -> bool {
    RECOGNIZED_COLUMNS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(column))
}

/// Address class of a valid IPv4 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpType {
    #[serde(rename = "loopback")]
    Loopback,
    #[serde(rename = "link-local")]
    LinkLocal,
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "public")]
    Public,
}

impl IpType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loopback => "loopback",
            Self::LinkLocal => "link-local",
            Self::Private => "private",
            Self::Public => "public",
        }
    }
}

impl fmt::Display for IpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cleaned output row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub record_id: String,
    pub ip: String,
    pub ip_valid: bool,
    pub ip_type: Option<IpType>,
    pub subnet_cidr: String,
    pub ptr_record: String,
    pub hostname: String,
    pub hostname_valid: bool,
    pub fqdn: String,
    pub fqdn_valid: bool,
    pub fqdn_consistent: bool,
    pub mac: String,
    pub mac_valid: bool,
    pub owner: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_team: String,
    pub device_type: String,
    pub device_type_confidence: Confidence,
    pub notes: String,
    pub site: String,
    pub normalization_steps: Vec<String>,
    pub passthrough: Vec<(String, String)>,
}

impl CleanRecord {
    /// Cell values in [`CLEAN_COLUMNS`] order.
    pub fn values(&self) -> Vec<String> {
        vec![
            self.record_id.clone(),
            self.ip.clone(),
            bool_cell(self.ip_valid),
            self.ip_type.map(|kind| kind.as_str().to_string()).unwrap_or_default(),
            self.subnet_cidr.clone(),
            self.ptr_record.clone(),
            self.hostname.clone(),
            bool_cell(self.hostname_valid),
            self.fqdn.clone(),
            bool_cell(self.fqdn_valid),
            bool_cell(self.fqdn_consistent),
            self.mac.clone(),
            bool_cell(self.mac_valid),
            self.owner.clone(),
            self.owner_name.clone(),
            self.owner_email.clone(),
            self.owner_team.clone(),
            self.device_type.clone(),
            self.device_type_confidence.as_str().to_string(),
            self.notes.clone(),
            self.site.clone(),
            self.normalization_steps.join("|"),
        ]
    }

    /// Value of a passthrough column, or `""` when the record lacks it.
    pub fn passthrough_value(&self, column: &str) -> &str {
        self.passthrough
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }
}

fn bool_cell(value: bool) -> String {
    value.to_string()
}
