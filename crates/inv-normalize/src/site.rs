//! Site name normalization. Advisory only: never rejects a value.

use inv_tables::SiteTables;

/// Canonicalize a site name.
///
/// The value is split on whitespace, hyphens, and underscores. Tokens found
/// in the abbreviation table are replaced by their canonical spelling
/// (acronyms such as `HQ` stay uppercase); every other token is title-cased.
/// Tokens are rejoined with single spaces. Null markers such as `n/a` become
/// the empty string.
pub fn normalize_site(raw: &str, tables: &SiteTables) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || tables.is_null_marker(trimmed) {
        return String::new();
    }
    let tokens: Vec<&str> = trimmed
        .split(|ch: char| ch.is_whitespace() || ch == '-' || ch == '_')
        .filter(|token| !token.is_empty())
        .collect();
    if tables.is_null_marker(&tokens.join(" ")) {
        return String::new();
    }
    tokens
        .into_iter()
        .map(|token| match tables.lookup(token) {
            Some(canonical) => canonical.to_string(),
            None => title_case(token),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character and lowercase the rest. A first character
/// whose uppercase form is several characters (`ß`, `ﬁ`) is kept as-is so a
/// second pass yields the same text.
fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(head)
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}
