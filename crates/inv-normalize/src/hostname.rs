//! Hostname and FQDN validation (RFC 1123 label rules) and their
//! record-level consistency check.

use inv_model::{FieldResult, Reason};

const MAX_NAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// Validate a hostname and lowercase it.
pub fn validate_hostname(raw: &str) -> FieldResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldResult::Missing;
    }
    match check_name(trimmed) {
        Ok(()) => FieldResult::valid(trimmed.to_ascii_lowercase()),
        Err(reason) => FieldResult::invalid(trimmed, reason),
    }
}

/// Validate a fully qualified domain name and lowercase it.
///
/// Hostname label rules apply, plus at least two labels and an alphabetic
/// top-level label of two or more characters. A single trailing root dot is
/// accepted and dropped.
pub fn validate_fqdn(raw: &str) -> FieldResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldResult::Missing;
    }
    let name = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if name.is_empty() {
        return FieldResult::invalid(trimmed, Reason::EmptyLabel);
    }
    if !name.contains('.') {
        return FieldResult::invalid(trimmed, Reason::NotFqdn);
    }
    if let Err(reason) = check_name(name) {
        return FieldResult::invalid(trimmed, reason);
    }
    let tld = name.rsplit('.').next().unwrap_or_default();
    if tld.len() < 2 || !tld.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return FieldResult::invalid(trimmed, Reason::InvalidTld);
    }
    FieldResult::valid(name.to_ascii_lowercase())
}

/// Check the length, character set, and label rules shared by hostnames and FQDNs.
fn check_name(name: &str) -> Result<(), Reason> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(Reason::TooLong);
    }
    if !name
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '.')
    {
        return Err(Reason::InvalidChars);
    }
    for label in name.split('.') {
        if label.is_empty() {
            return Err(Reason::EmptyLabel);
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(Reason::LabelTooLong);
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(Reason::InvalidLabelFormat);
        }
    }
    Ok(())
}

/// Outcome of comparing a hostname with the first label of its FQDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    /// Both fields are valid and the first FQDN label equals the hostname.
    Consistent,
    /// Both fields are valid but disagree.
    Mismatch,
    /// At least one field is missing or invalid, so nothing was compared.
    NotChecked,
}

impl Consistency {
    pub fn is_consistent(self) -> bool {
        self == Self::Consistent
    }
}

/// Compare independently validated hostname and FQDN results.
///
/// A mismatch never invalidates either field on its own.
pub fn check_consistency(hostname: &FieldResult, fqdn: &FieldResult) -> Consistency {
    if !hostname.is_valid() || !fqdn.is_valid() {
        return Consistency::NotChecked;
    }
    let first_label = fqdn
        .normalized_value()
        .split('.')
        .next()
        .unwrap_or_default();
    if first_label == hostname.normalized_value() {
        Consistency::Consistent
    } else {
        Consistency::Mismatch
    }
}
