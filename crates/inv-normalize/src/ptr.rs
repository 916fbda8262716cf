//! Reverse-DNS pointer names for IPv4 addresses.

use inv_model::FieldResult;

use crate::ipv4::validate_ipv4;

const REVERSE_SUFFIX: &str = ".in-addr.arpa";

/// PTR name for an already validated IPv4 result.
///
/// Returns `None` unless `ip` is valid; generation never runs on
/// unvalidated input.
pub fn ptr_record(ip: &FieldResult) -> Option<String> {
    if !ip.is_valid() {
        return None;
    }
    let mut octets: Vec<&str> = ip.normalized_value().split('.').collect();
    octets.reverse();
    Some(format!("{}{REVERSE_SUFFIX}", octets.join(".")))
}

/// Validate `raw` and build its PTR name.
pub fn ptr(raw: &str) -> Option<String> {
    ptr_record(&validate_ipv4(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_octets() {
        assert_eq!(ptr("192.168.1.1").as_deref(), Some("1.1.168.192.in-addr.arpa"));
        assert_eq!(ptr("10.20.30.40").as_deref(), Some("40.30.20.10.in-addr.arpa"));
    }

    #[test]
    fn uses_canonical_octets() {
        assert_eq!(ptr("010.000.001.002").as_deref(), Some("2.1.0.10.in-addr.arpa"));
    }

    #[test]
    fn none_for_invalid_input() {
        assert_eq!(ptr(""), None);
        assert_eq!(ptr("999.1.1.1"), None);
        assert_eq!(ptr("fe80::1"), None);
    }
}
