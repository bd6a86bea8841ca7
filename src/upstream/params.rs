//! Query-string construction for upstream catalog requests
//!
//! The upstream API expects free-text filters as lowercased,
//! underscore-separated words (`beer_name=punk_ipa`). This module owns that
//! formatting contract and the renaming of GraphQL argument names to their
//! upstream parameter names.

/// Argument names whose upstream parameter name differs.
///
/// Extend this table when exposing further filters; call sites go through
/// [`QueryParams::to_query_string`] and pick up new entries automatically.
const PARAM_KEY_RENAMES: &[(&str, &str)] = &[("name", "beer_name")];

/// A single filter value, formatted according to its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Free text: spaces become underscores, then the whole value is lowercased.
    Text(String),
    /// Passed through unchanged.
    Raw(String),
}

impl ParamValue {
    pub fn text(value: impl Into<String>) -> Self {
        ParamValue::Text(value.into())
    }

    fn format(&self) -> String {
        match self {
            ParamValue::Text(s) => s.replace(' ', "_").to_lowercase(),
            ParamValue::Raw(s) => s.clone(),
        }
    }
}

/// Ordered filter parameters for a catalog search.
///
/// Entries are emitted in insertion order. No URL-encoding is applied beyond
/// the space-to-underscore substitution; the upstream filter vocabulary is
/// plain words.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(&'static str, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: ParamValue) {
        self.entries.push((key, value));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the parameters as `key=value` pairs joined with `&`.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}={}", upstream_key(key), value.format()))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Translate an argument name to its upstream parameter name.
fn upstream_key(key: &str) -> &str {
    PARAM_KEY_RENAMES
        .iter()
        .find(|&&(from, _)| from == key)
        .map(|&(_, to)| to)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_value_lowercased_and_underscored() {
        let mut params = QueryParams::new();
        params.push("yeast", ParamValue::text("Wyeast 1056 - American Ale"));
        assert_eq!(
            params.to_query_string(),
            "yeast=wyeast_1056_-_american_ale"
        );
    }

    #[test]
    fn test_name_key_renamed_to_beer_name() {
        let mut params = QueryParams::new();
        params.push("name", ParamValue::text("Punk IPA"));
        assert_eq!(params.to_query_string(), "beer_name=punk_ipa");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut params = QueryParams::new();
        params.push("name", ParamValue::text("Punk IPA"));
        params.push("yeast", ParamValue::text("Wyeast"));
        params.push("hops", ParamValue::text("Ahtanum"));
        assert_eq!(
            params.to_query_string(),
            "beer_name=punk_ipa&yeast=wyeast&hops=ahtanum"
        );
    }

    #[test]
    fn test_raw_value_passed_through() {
        let mut params = QueryParams::new();
        params.push("abv_gt", ParamValue::Raw("5.5".to_string()));
        assert_eq!(params.to_query_string(), "abv_gt=5.5");
    }

    #[test]
    fn test_empty_params() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }
}
