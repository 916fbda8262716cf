//! IPv4 validation, normalization, and address classification.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use inv_model::{FieldResult, IpType, Reason};
use regex::Regex;

/// Four dot-separated groups of one to three ASCII digits.
static IPV4_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").expect("Invalid IPv4 regex")
});

/// Validate an IPv4 address and rewrite it in canonical dotted-decimal form.
///
/// Leading zeros are stripped from each octet (`"010"` becomes `"10"`); when
/// that changes the text the result carries a
/// [`Reason::LeadingZerosStripped`] note. Any value containing `':'` is
/// rejected as [`Reason::Ipv6NotSupported`].
pub fn validate_ipv4(raw: &str) -> FieldResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldResult::Missing;
    }
    if trimmed.contains(':') {
        return FieldResult::invalid(trimmed, Reason::Ipv6NotSupported);
    }
    if !IPV4_SHAPE.is_match(trimmed) {
        return FieldResult::invalid(trimmed, Reason::InvalidIpv4Format);
    }

    let mut octets = Vec::with_capacity(4);
    for group in trimmed.split('.') {
        match group.parse::<u16>() {
            Ok(value) if value <= 255 => octets.push(value.to_string()),
            _ => return FieldResult::invalid(trimmed, Reason::InvalidIpv4Format),
        }
    }
    let canonical = octets.join(".");
    if canonical == trimmed {
        FieldResult::valid(canonical)
    } else {
        FieldResult::valid_with_note(canonical, Reason::LeadingZerosStripped)
    }
}

/// Classify a canonical IPv4 address. Returns `None` for unparsable input.
pub fn classify_ipv4(address: &str) -> Option<IpType> {
    let parsed: Ipv4Addr = address.parse().ok()?;
    let kind = if parsed.is_loopback() {
        IpType::Loopback
    } else if parsed.is_link_local() {
        IpType::LinkLocal
    } else if parsed.is_private() {
        IpType::Private
    } else {
        IpType::Public
    };
    Some(kind)
}

/// Approximate `/24` subnet for a private address.
///
/// This is a fixed heuristic (first three octets), not topology data.
/// Non-private addresses have no subnet.
pub fn private_subnet(address: &str) -> Option<String> {
    if classify_ipv4(address)? != IpType::Private {
        return None;
    }
    let (network, _host) = address.rsplit_once('.')?;
    Some(format!("{network}.0/24"))
}
