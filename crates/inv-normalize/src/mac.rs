//! MAC address validation and normalization.

use std::sync::LazyLock;

use inv_model::{FieldResult, Reason};
use regex::Regex;

/// Accepted layouts: `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff`,
/// `aabb.ccdd.eeff`, and bare `aabbccddeeff`.
static MAC_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[0-9A-Fa-f]{2}(?::[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{2}(?:-[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{4}(?:\.[0-9A-Fa-f]{4}){2}|[0-9A-Fa-f]{12})$",
    )
    .expect("Invalid MAC regex")
});

const HEX_DIGITS: usize = 12;

/// Validate a MAC address and rewrite it as lowercase `xx:xx:xx:xx:xx:xx`.
pub fn validate_mac(raw: &str) -> FieldResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldResult::Missing;
    }
    if !MAC_SHAPE.is_match(trimmed) {
        return FieldResult::invalid(trimmed, Reason::InvalidMacFormat);
    }
    let digits: Vec<char> = trimmed
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|ch| ch.to_ascii_lowercase())
        .collect();
    if digits.len() != HEX_DIGITS {
        return FieldResult::invalid(trimmed, Reason::InvalidMacFormat);
    }
    let canonical = digits
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(":");
    FieldResult::valid(canonical)
}
