use inv_model::{FieldResult, Reason};
use inv_normalize::{normalize_site, validate_fqdn, validate_hostname, validate_ipv4, validate_mac};
use inv_tables::SiteTables;
use proptest::prelude::*;

type Validator = fn(&str) -> FieldResult;

const VALIDATORS: &[(&str, Validator)] = &[
    ("ip", validate_ipv4),
    ("hostname", validate_hostname),
    ("fqdn", validate_fqdn),
    ("mac", validate_mac),
];

proptest! {
    #[test]
    fn blank_input_is_missing(blank in "[ \t\r\n]{0,8}") {
        for (name, validator) in VALIDATORS {
            let result = validator(&blank);
            prop_assert!(!result.is_valid(), "{name}");
            prop_assert_eq!(result.reason(), Reason::Missing);
            prop_assert_eq!(result.normalized_value(), "");
        }
    }

    #[test]
    fn validators_are_total(input in any::<String>()) {
        for (_, validator) in VALIDATORS {
            let result = validator(&input);
            if !result.is_valid() {
                prop_assert_ne!(result.reason(), Reason::Ok);
            }
        }
        let _ = normalize_site(&input, &SiteTables::default());
    }

    #[test]
    fn ipv4_normalization_is_idempotent(octets in prop::array::uniform4(0u16..1000), pad in 0usize..3) {
        let raw = octets
            .iter()
            .map(|octet| format!("{octet:0>width$}", width = pad + 1))
            .collect::<Vec<_>>()
            .join(".");
        let first = validate_ipv4(&raw);
        if first.is_valid() {
            let again = validate_ipv4(first.normalized_value());
            prop_assert_eq!(again, FieldResult::valid(first.normalized_value()));
        } else {
            prop_assert!(octets.iter().any(|octet| *octet > 255) || raw.split('.').any(|group| group.len() > 3));
        }
    }

    #[test]
    fn hostname_normalization_is_idempotent(raw in "[A-Za-z0-9]([A-Za-z0-9-]{0,10}[A-Za-z0-9])?(\\.[A-Za-z0-9]{1,8}){0,3}") {
        let first = validate_hostname(&raw);
        prop_assert!(first.is_valid());
        let again = validate_hostname(first.normalized_value());
        prop_assert_eq!(again.normalized_value(), first.normalized_value());
    }

    #[test]
    fn mac_shapes_agree(digits in "[0-9A-Fa-f]{12}") {
        let pairs: Vec<&str> = (0..6).map(|i| &digits[i * 2..i * 2 + 2]).collect();
        let groups: Vec<&str> = (0..3).map(|i| &digits[i * 4..i * 4 + 4]).collect();
        let canonical = validate_mac(&pairs.join(":"));
        prop_assert!(canonical.is_valid());
        prop_assert_eq!(&validate_mac(&pairs.join("-")), &canonical);
        prop_assert_eq!(&validate_mac(&groups.join(".")), &canonical);
        prop_assert_eq!(&validate_mac(&digits), &canonical);
        prop_assert_eq!(&validate_mac(canonical.normalized_value()), &canonical);
    }

    #[test]
    fn site_normalization_is_idempotent(raw in "[A-Za-z0-9 _ßﬁÉéÅåØøÑñÖöǅΣσςДдЖж日本\\-]{0,24}") {
        let tables = SiteTables::default();
        let first = normalize_site(&raw, &tables);
        prop_assert_eq!(normalize_site(&first, &tables), first);
    }
}

#[test]
fn ipv6_is_distinguished_from_bad_format() {
    assert_eq!(validate_ipv4("fe80::1").reason(), Reason::Ipv6NotSupported);
    assert_eq!(validate_ipv4("::ffff:10.0.0.1").reason(), Reason::Ipv6NotSupported);
    assert_eq!(validate_ipv4("10.0.0").reason(), Reason::InvalidIpv4Format);
}
