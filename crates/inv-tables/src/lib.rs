//! Lookup tables used by the inventory normalization engine.
//!
//! The tables are data, not logic: the engine only relies on their shape.
//! [`Tables::default`] provides the built-in set, and a TOML file can replace
//! any section. Sections omitted from the file keep their built-in contents.
//!
//! ```toml
//! [device]
//! aliases = { srv = "server", sw = "switch" }
//!
//! [[device.keywords]]
//! device_type = "server"
//! keywords = ["server", "srv"]
//!
//! [team]
//! keywords = ["platform", "ops"]
//!
//! [site]
//! abbreviations = { bldg = "Building", hq = "HQ" }
//! null_markers = ["n/a"]
//! ```

#![deny(unsafe_code)]

pub mod builtin;
pub mod error;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::{Result, TablesError};

/// The complete table set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tables {
    pub device: DeviceTables,
    pub team: TeamTables,
    pub site: SiteTables,
}

/// Device-type vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceTables {
    /// Explicit field spelling (lowercase) to vocabulary term.
    pub aliases: BTreeMap<String, String>,
    /// Keyword groups scanned in order; the first matching group wins.
    pub keywords: Vec<KeywordRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordRule {
    pub device_type: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TeamTables {
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteTables {
    /// Token (lowercase) to canonical spelling.
    pub abbreviations: BTreeMap<String, String>,
    pub null_markers: Vec<String>,
}

impl Default for DeviceTables {
    fn default() -> Self {
        Self {
            aliases: builtin::DEVICE_ALIASES
                .iter()
                .map(|(alias, term)| ((*alias).to_string(), (*term).to_string()))
                .collect(),
            keywords: builtin::DEVICE_KEYWORDS
                .iter()
                .map(|(device_type, keywords)| KeywordRule {
                    device_type: (*device_type).to_string(),
                    keywords: keywords.iter().map(|kw| (*kw).to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl Default for TeamTables {
    fn default() -> Self {
        Self {
            keywords: builtin::TEAM_KEYWORDS
                .iter()
                .map(|kw| (*kw).to_string())
                .collect(),
        }
    }
}

impl Default for SiteTables {
    fn default() -> Self {
        Self {
            abbreviations: builtin::SITE_ABBREVIATIONS
                .iter()
                .map(|(token, canonical)| ((*token).to_string(), (*canonical).to_string()))
                .collect(),
            null_markers: builtin::SITE_NULL_MARKERS
                .iter()
                .map(|marker| (*marker).to_string())
                .collect(),
        }
    }
}

impl Tables {
    /// Load tables from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| TablesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::parse(&text, &path.display().to_string())?;
        debug!(
            path = %path.display(),
            aliases = tables.device.aliases.len(),
            keyword_rules = tables.device.keywords.len(),
            team_keywords = tables.team.keywords.len(),
            site_abbreviations = tables.site.abbreviations.len(),
            "loaded lookup tables"
        );
        Ok(tables)
    }

    /// Parse tables from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, "<inline>")
    }

    /// Load `path` when given, otherwise use the built-in tables.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn parse(text: &str, origin: &str) -> Result<Self> {
        let tables: Tables = toml::from_str(text).map_err(|source| TablesError::Toml {
            origin: origin.to_string(),
            source,
        })?;
        let tables = tables.normalized();
        tables.validate()?;
        Ok(tables)
    }

    /// Lowercase and trim every lookup key so matching can be case-insensitive.
    fn normalized(self) -> Self {
        let lower = |value: &str| value.trim().to_lowercase();
        Self {
            device: DeviceTables {
                aliases: self
                    .device
                    .aliases
                    .iter()
                    .map(|(alias, term)| (lower(alias), lower(term)))
                    .collect(),
                keywords: self
                    .device
                    .keywords
                    .iter()
                    .map(|rule| KeywordRule {
                        device_type: lower(&rule.device_type),
                        keywords: rule.keywords.iter().map(|kw| lower(kw)).collect(),
                    })
                    .collect(),
            },
            team: TeamTables {
                keywords: self.team.keywords.iter().map(|kw| lower(kw)).collect(),
            },
            site: SiteTables {
                abbreviations: self
                    .site
                    .abbreviations
                    .iter()
                    .map(|(token, canonical)| (lower(token), canonical.trim().to_string()))
                    .collect(),
                null_markers: self
                    .site
                    .null_markers
                    .iter()
                    .map(|marker| lower(marker))
                    .collect(),
            },
        }
    }

    /// Reject entries the engine cannot use.
    pub fn validate(&self) -> Result<()> {
        for (alias, term) in &self.device.aliases {
            if alias.is_empty() || term.is_empty() {
                return Err(TablesError::invalid(
                    "device.aliases",
                    format!("empty alias or device type in entry '{alias}' = '{term}'"),
                ));
            }
        }
        for (index, rule) in self.device.keywords.iter().enumerate() {
            if rule.device_type.is_empty() {
                return Err(TablesError::invalid(
                    "device.keywords",
                    format!("rule {index} has an empty device_type"),
                ));
            }
            if rule.keywords.is_empty() || rule.keywords.iter().any(String::is_empty) {
                return Err(TablesError::invalid(
                    "device.keywords",
                    format!("rule '{}' needs at least one non-empty keyword", rule.device_type),
                ));
            }
        }
        if self.team.keywords.iter().any(String::is_empty) {
            return Err(TablesError::invalid("team.keywords", "empty keyword"));
        }
        for (token, canonical) in &self.site.abbreviations {
            if token.is_empty() || canonical.is_empty() {
                return Err(TablesError::invalid(
                    "site.abbreviations",
                    format!("empty token or replacement in entry '{token}' = '{canonical}'"),
                ));
            }
            if token.chars().any(|ch| ch.is_whitespace() || ch == '-' || ch == '_') {
                return Err(TablesError::invalid(
                    "site.abbreviations",
                    format!("token '{token}' contains a separator"),
                ));
            }
        }
        Ok(())
    }
}

impl DeviceTables {
    /// Map an explicit device type spelling to its vocabulary term.
    pub fn resolve_alias(&self, value: &str) -> Option<&str> {
        self.aliases
            .get(&value.trim().to_lowercase())
            .map(String::as_str)
    }
}

impl SiteTables {
    /// Canonical spelling for a site token, matched case-insensitively.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.abbreviations
            .get(&token.to_lowercase())
            .map(String::as_str)
    }

    pub fn is_null_marker(&self, value: &str) -> bool {
        let lowered = value.trim().to_lowercase();
        self.null_markers.iter().any(|marker| *marker == lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_aliases_resolve_case_insensitively() {
        let tables = Tables::default();
        assert_eq!(tables.device.resolve_alias("SRV"), Some("server"));
        assert_eq!(tables.device.resolve_alias(" gw "), Some("router"));
        assert_eq!(tables.device.resolve_alias("toaster"), None);
    }

    #[test]
    fn builtin_keywords_keep_priority_order() {
        let tables = Tables::default();
        let order: Vec<&str> = tables
            .device
            .keywords
            .iter()
            .map(|rule| rule.device_type.as_str())
            .collect();
        assert_eq!(
            order,
            vec!["server", "switch", "router", "printer", "iot", "dns", "firewall"]
        );
    }

    #[test]
    fn partial_override_keeps_other_sections() {
        let tables = Tables::from_toml_str(
            r#"
            [team]
            keywords = ["Payments", "SRE"]
            "#,
        )
        .expect("parse tables");
        assert_eq!(tables.team.keywords, vec!["payments", "sre"]);
        assert_eq!(tables.device, DeviceTables::default());
        assert_eq!(tables.site, SiteTables::default());
    }

    #[test]
    fn override_keys_are_lowercased() {
        let tables = Tables::from_toml_str(
            r#"
            [site]
            abbreviations = { NYC = "NYC", Ste = "Suite" }
            "#,
        )
        .expect("parse tables");
        assert_eq!(tables.site.lookup("nyc"), Some("NYC"));
        assert_eq!(tables.site.lookup("STE"), Some("Suite"));
        assert_eq!(tables.site.lookup("bldg"), None);
        assert_eq!(tables.site.null_markers, SiteTables::default().null_markers);
    }

    #[test]
    fn rejects_rule_without_keywords() {
        let error = Tables::from_toml_str(
            r#"
            [[device.keywords]]
            device_type = "server"
            keywords = []
            "#,
        )
        .expect_err("empty keyword list should fail");
        assert!(matches!(error, TablesError::Invalid { table: "device.keywords", .. }));
    }

    #[test]
    fn rejects_unknown_section() {
        let error = Tables::from_toml_str("[vendors]\nlist = []\n").expect_err("unknown section");
        assert!(matches!(error, TablesError::Toml { .. }));
    }

    #[test]
    fn null_markers_match_case_insensitively() {
        let tables = Tables::default();
        assert!(tables.site.is_null_marker("N/A"));
        assert!(tables.site.is_null_marker(" None "));
        assert!(!tables.site.is_null_marker("HQ"));
    }
}
