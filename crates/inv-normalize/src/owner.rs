//! Best-effort extraction of name, email, and team from free-form owner text.

use std::sync::LazyLock;

use inv_tables::TeamTables;
use regex::{Regex, RegexBuilder};
use tracing::warn;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("Invalid email regex")
});

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("Invalid parenthesis regex"));

static EMPTY_BRACKETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*\)|<\s*>|\[\s*\]").expect("Invalid empty bracket regex")
});

/// Characters trimmed from either end of the residual owner name.
const NAME_TRIM: &[char] = &[',', ';', ':', '|', '/', '-', '<', '>', '[', ']', '(', ')', '"', '\''];

/// Parts extracted from an owner field. Each defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerFields {
    pub name: String,
    pub email: String,
    pub team: String,
}

impl OwnerFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.team.is_empty()
    }
}

/// Owner parser configured with a team keyword table.
#[derive(Debug, Clone)]
pub struct OwnerParser {
    team_keywords: Option<Regex>,
}

impl OwnerParser {
    pub fn new(tables: &TeamTables) -> Self {
        Self {
            team_keywords: build_keyword_pattern(&tables.keywords),
        }
    }

    /// Extract email, team, and name, in that order.
    ///
    /// The email is the first address-shaped token, lowercased. The team is
    /// the first parenthesized text, or failing that the leftmost team
    /// keyword. The name is whatever text remains once both are removed.
    pub fn parse(&self, raw: &str) -> OwnerFields {
        let mut remaining = raw.trim().to_string();
        if remaining.is_empty() {
            return OwnerFields::default();
        }

        let mut email = String::new();
        if let Some(found) = EMAIL_PATTERN.find(&remaining) {
            email = found.as_str().to_lowercase();
            let range = found.range();
            remaining.replace_range(range, " ");
        }

        let mut team = String::new();
        let parenthesized = PARENTHESIZED.captures_iter(&remaining).find_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?.as_str().trim();
            if inner.is_empty() {
                None
            } else {
                Some((whole.range(), inner.to_string()))
            }
        });
        if let Some((range, inner)) = parenthesized {
            team = inner;
            remaining.replace_range(range, " ");
        } else if let Some(pattern) = &self.team_keywords
            && let Some(found) = pattern.find(&remaining)
        {
            team = found.as_str().to_string();
            let range = found.range();
            remaining.replace_range(range, " ");
        }

        OwnerFields {
            name: clean_name(&remaining),
            email,
            team,
        }
    }
}

impl Default for OwnerParser {
    fn default() -> Self {
        Self::new(&TeamTables::default())
    }
}

fn build_keyword_pattern(keywords: &[String]) -> Option<Regex> {
    if keywords.is_empty() {
        return None;
    }
    let alternation = keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    match RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(error) => {
            warn!(%error, "team keyword table could not be compiled; keyword matching disabled");
            None
        }
    }
}

/// Drop bracket pairs left empty by extraction, collapse whitespace, and
/// trim residual punctuation.
fn clean_name(text: &str) -> String {
    let without_empty_pairs = EMPTY_BRACKETS.replace_all(text, " ");
    let collapsed = without_empty_pairs
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    collapsed
        .trim_matches(|ch: char| ch.is_whitespace() || NAME_TRIM.contains(&ch))
        .to_string()
}
