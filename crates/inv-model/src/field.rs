//! Per-field validation outcomes.
//!
//! Every validator in the engine returns a [`FieldResult`]. Malformed input is
//! an expected outcome, so validators never fail: an absent value becomes
//! [`FieldResult::Missing`] and a malformed one becomes
//! [`FieldResult::Invalid`] carrying the offending text and a [`Reason`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::anomaly::Severity;

/// Machine-readable reason code attached to a field decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// The field passed validation.
    Ok,
    /// The field was empty or whitespace-only.
    Missing,
    /// Not four dot-separated decimal octets in 0..=255.
    InvalidIpv4Format,
    /// The address looks like IPv6, which is out of scope.
    Ipv6NotSupported,
    /// Leading zeros were removed from one or more octets.
    LeadingZerosStripped,
    /// A PTR record could not be generated because the IP is invalid.
    PtrUnavailable,
    /// The name exceeds 253 characters.
    TooLong,
    /// The name contains characters other than letters, digits, hyphen and dot.
    InvalidChars,
    /// Two consecutive dots, or a leading/trailing dot.
    EmptyLabel,
    /// A label exceeds 63 characters.
    LabelTooLong,
    /// A label starts or ends with a hyphen.
    InvalidLabelFormat,
    /// An FQDN with a single label.
    NotFqdn,
    /// The final FQDN label is not alphabetic or shorter than two characters.
    InvalidTld,
    /// The first FQDN label differs from the hostname.
    HostnameFqdnMismatch,
    /// Unsupported separator layout or non-hex characters.
    InvalidMacFormat,
    /// The owner field was present but held no email address.
    OwnerEmailMissing,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Missing => "missing",
            Self::InvalidIpv4Format => "invalid_ipv4_format",
            Self::Ipv6NotSupported => "ipv6_not_supported",
            Self::LeadingZerosStripped => "leading_zeros_stripped",
            Self::PtrUnavailable => "ptr_unavailable",
            Self::TooLong => "too_long",
            Self::InvalidChars => "invalid_chars",
            Self::EmptyLabel => "empty_label",
            Self::LabelTooLong => "label_too_long",
            Self::InvalidLabelFormat => "invalid_label_format",
            Self::NotFqdn => "not_fqdn",
            Self::InvalidTld => "invalid_tld",
            Self::HostnameFqdnMismatch => "hostname_fqdn_mismatch",
            Self::InvalidMacFormat => "invalid_mac_format",
            Self::OwnerEmailMissing => "owner_email_missing",
        }
    }

    /// Human-readable explanation written next to the code in the anomaly log.
    pub fn description(self) -> &'static str {
        match self {
            Self::Ok => "value is valid",
            Self::Missing => "value is missing",
            Self::InvalidIpv4Format => {
                "expected four dot-separated decimal octets in the range 0-255"
            }
            Self::Ipv6NotSupported => "IPv6 addresses are not supported",
            Self::LeadingZerosStripped => "leading zeros were stripped from one or more octets",
            Self::PtrUnavailable => "PTR record not generated because the IP address is invalid",
            Self::TooLong => "name exceeds 253 characters",
            Self::InvalidChars => "name may only contain letters, digits, hyphens and dots",
            Self::EmptyLabel => "name contains an empty label",
            Self::LabelTooLong => "a label exceeds 63 characters",
            Self::InvalidLabelFormat => "a label starts or ends with a hyphen",
            Self::NotFqdn => "FQDN must contain at least two labels",
            Self::InvalidTld => "top-level label must be alphabetic and at least two characters",
            Self::HostnameFqdnMismatch => "first FQDN label does not match the hostname",
            Self::InvalidMacFormat => {
                "expected 12 hex digits separated by colons, hyphens, or dots (xxxx.xxxx.xxxx)"
            }
            Self::OwnerEmailMissing => "owner field has no email address",
        }
    }

    /// Severity used when this reason is recorded as an anomaly.
    pub fn severity(self) -> Severity {
        match self {
            Self::Ok | Self::LeadingZerosStripped | Self::PtrUnavailable | Self::OwnerEmailMissing => {
                Severity::Info
            }
            Self::Missing | Self::HostnameFqdnMismatch => Severity::Warning,
            Self::InvalidIpv4Format
            | Self::Ipv6NotSupported
            | Self::TooLong
            | Self::InvalidChars
            | Self::EmptyLabel
            | Self::LabelTooLong
            | Self::InvalidLabelFormat
            | Self::NotFqdn
            | Self::InvalidTld
            | Self::InvalidMacFormat => Severity::Error,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating and normalizing a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FieldResult {
    /// The value is valid; `value` is its canonical form.
    Valid {
        value: String,
        /// Set when normalization rewrote the value in a way worth reporting.
        note: Option<Reason>,
    },
    /// The field was empty.
    Missing,
    /// The value is malformed; `value` is the trimmed input.
    Invalid { value: String, reason: Reason },
}

impl FieldResult {
    pub fn valid(value: impl Into<String>) -> Self {
        Self::Valid {
            value: value.into(),
            note: None,
        }
    }

    pub fn valid_with_note(value: impl Into<String>, note: Reason) -> Self {
        Self::Valid {
            value: value.into(),
            note: Some(note),
        }
    }

    pub fn invalid(value: impl Into<String>, reason: Reason) -> Self {
        Self::Invalid {
            value: value.into(),
            reason,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The value to write to the output table. Never absent: missing fields
    /// yield an empty string and invalid fields yield the trimmed input.
    pub fn normalized_value(&self) -> &str {
        match self {
            Self::Valid { value, .. } | Self::Invalid { value, .. } => value,
            Self::Missing => "",
        }
    }

    pub fn reason(&self) -> Reason {
        match self {
            Self::Valid { .. } => Reason::Ok,
            Self::Missing => Reason::Missing,
            Self::Invalid { reason, .. } => *reason,
        }
    }

    pub fn note(&self) -> Option<Reason> {
        match self {
            Self::Valid { note, .. } => *note,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_has_empty_value_and_reason() {
        let result = FieldResult::Missing;
        assert!(!result.is_valid());
        assert_eq!(result.normalized_value(), "");
        assert_eq!(result.reason().as_str(), "missing");
    }

    #[test]
    fn invalid_keeps_input() {
        let result = FieldResult::invalid("300.1.1.1", Reason::InvalidIpv4Format);
        assert_eq!(result.normalized_value(), "300.1.1.1");
        assert_eq!(result.reason(), Reason::InvalidIpv4Format);
        assert_eq!(result.note(), None);
    }

    #[test]
    fn reason_serializes_as_code() {
        let json = serde_json::to_string(&Reason::HostnameFqdnMismatch).expect("serialize");
        assert_eq!(json, "\"hostname_fqdn_mismatch\"");
        assert_eq!(Reason::Ipv6NotSupported.to_string(), "ipv6_not_supported");
    }

    #[test]
    fn scope_rejection_is_distinct_from_format_failure() {
        assert_ne!(
            Reason::Ipv6NotSupported.as_str(),
            Reason::InvalidIpv4Format.as_str()
        );
        assert_eq!(Reason::Ipv6NotSupported.severity(), Severity::Error);
    }
}
