//! Saved-search storage and expansion
//!
//! Saved-search notifications keep the original request parameters of a
//! stored query (q, fq, sort, and an optional bigquery attachment). This
//! module sanitizes those parameters down to the search-relevant ones for
//! storage and expands them into an executable windowed query at run time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::config::MyadsConfig;
use crate::error::ConfigError;
use crate::notification::Frequency;
use crate::query_builder::QueryPair;
use crate::schedule::DateWindow;

/// Multi-valued search parameters, keyed like a query string.
///
/// The ordered map makes the serialized storage form deterministic.
pub type QueryParams = BTreeMap<String, Vec<String>>;

/// A sanitized saved search ready for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredQuery {
    /// Canonical urlencoded form of the kept parameters, sorted by key
    pub query: String,
    /// Raw bigquery content stream, empty when unused
    pub bigquery: String,
}

/// Parse an application/x-www-form-urlencoded string into parameters.
pub fn parse_query_string(raw: &str) -> QueryParams {
    let mut params = QueryParams::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}

/// Serialize parameters in sorted key order, urlencoded.
pub fn serialize_params(params: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in params {
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

/// Keep only the search-relevant parameters and check bigquery wiring.
///
/// Everything except `q*`, `fq*` and `sort*` parameters is dropped. When
/// bigquery data is attached, some kept fq parameter must reference
/// `{!bitset}`, otherwise the search engine would never consume the
/// attachment.
pub fn sanitize_stored_query(
    params: &QueryParams,
    bigquery: &str,
) -> Result<StoredQuery, ConfigError> {
    let mut kept = QueryParams::new();
    for (key, values) in params {
        if key.starts_with('q') || key.starts_with("fq") || key.starts_with("sort") {
            kept.insert(key.clone(), values.clone());
        }
    }

    if !bigquery.is_empty() {
        let references_bitset = kept
            .iter()
            .filter(|(key, _)| key.contains("fq"))
            .flat_map(|(_, values)| values)
            .any(|value| value.contains("!bitset"));
        if !references_bitset {
            return Err(ConfigError::BigqueryWithoutBitset);
        }
    }

    Ok(StoredQuery {
        query: serialize_params(&kept),
        bigquery: bigquery.to_string(),
    })
}

/// Flatten single-element value lists to scalars, keeping true
/// multi-values as lists. This is the shape stored queries are exported
/// in.
pub fn flatten_params(params: &QueryParams) -> serde_json::Map<String, serde_json::Value> {
    let mut flat = serde_json::Map::new();
    for (key, values) in params {
        let value = if values.len() == 1 {
            serde_json::Value::String(values[0].clone())
        } else {
            serde_json::Value::Array(
                values
                    .iter()
                    .cloned()
                    .map(serde_json::Value::String)
                    .collect(),
            )
        };
        flat.insert(key.clone(), value);
    }
    flat
}

/// Expand a saved search into its executable windowed query.
///
/// The stored q picks up the entdate/pubdate filter for the notification
/// window; the stored sort is kept, defaulting to `date desc`.
pub fn build_stored_query(
    params: &QueryParams,
    frequency: Frequency,
    resume: Option<NaiveDate>,
    now: NaiveDate,
    config: &MyadsConfig,
) -> Result<Vec<QueryPair>, ConfigError> {
    let flat = flatten_params(params);
    let q = match flat.get("q") {
        Some(serde_json::Value::String(q)) => q,
        _ => return Err(ConfigError::MissingQueryField),
    };
    let sort = match flat.get("sort") {
        Some(serde_json::Value::String(sort)) => sort.as_str(),
        _ => "date desc",
    };

    let window = DateWindow::for_frequency(frequency, resume, now, config);
    Ok(vec![QueryPair::new(
        format!("{} {}", q, window.filter()),
        sort,
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        let mut params = QueryParams::new();
        for (key, value) in pairs {
            params
                .entry(key.to_string())
                .or_default()
                .push(value.to_string());
        }
        params
    }

    #[test]
    fn test_parse_query_string() {
        let parsed = parse_query_string("q=foo&fq=boo&fq=baz");
        assert_eq!(parsed["q"], vec!["foo"]);
        assert_eq!(parsed["fq"], vec!["boo", "baz"]);
    }

    #[test]
    fn test_sanitize_drops_foreign_parameters() {
        let input = parse_query_string("q=foo&fq=boo&foo=bar&boo=bar");
        let stored = sanitize_stored_query(&input, "").unwrap();
        assert_eq!(stored.query, "fq=boo&q=foo");
        assert_eq!(stored.bigquery, "");
    }

    #[test]
    fn test_sanitize_keeps_sort_and_q_variants() {
        let input = params(&[
            ("q", "foo"),
            ("q.op", "AND"),
            ("sort", "date desc"),
            ("sort_extra", "x"),
            ("rows", "20"),
        ]);
        let stored = sanitize_stored_query(&input, "").unwrap();
        assert_eq!(stored.query, "q=foo&q.op=AND&sort=date+desc&sort_extra=x");
    }

    #[test]
    fn test_bigquery_without_bitset_is_rejected() {
        let input = params(&[("q", "foo"), ("fq", "boo")]);
        let err = sanitize_stored_query(&input, "foo\nbar").unwrap_err();
        assert!(matches!(err, ConfigError::BigqueryWithoutBitset));
    }

    #[test]
    fn test_bigquery_with_bitset_is_kept_and_encoded() {
        let input = params(&[("q", "foo"), ("fq", "{!bitset}"), ("foo", "bar")]);
        let stored = sanitize_stored_query(&input, "foo\nbar").unwrap();
        assert_eq!(stored.query, "fq=%7B%21bitset%7D&q=foo");
        assert_eq!(stored.bigquery, "foo\nbar");
    }

    #[test]
    fn test_flatten_single_values() {
        let input = params(&[("q", "foo"), ("fq", "a"), ("fq", "b")]);
        let flat = flatten_params(&input);
        assert_eq!(flat["q"], serde_json::json!("foo"));
        assert_eq!(flat["fq"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_build_stored_query_appends_window() {
        // 2026-08-19 is a Wednesday
        let now = NaiveDate::from_ymd_opt(2026, 8, 19).unwrap();
        let input = params(&[("q", "star"), ("sort", "citation_count desc")]);
        let queries =
            build_stored_query(&input, Frequency::Weekly, None, now, &MyadsConfig::default())
                .unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0].q,
            "star entdate:[\"2026-07-25Z00:00\" TO \"2026-08-19Z23:59\"] pubdate:[2026-00 TO *]"
        );
        assert_eq!(queries[0].sort, "citation_count desc");
    }

    #[test]
    fn test_build_stored_query_default_sort() {
        let now = NaiveDate::from_ymd_opt(2026, 8, 19).unwrap();
        let input = params(&[("q", "star")]);
        let queries =
            build_stored_query(&input, Frequency::Daily, None, now, &MyadsConfig::default())
                .unwrap();
        assert_eq!(queries[0].sort, "date desc");
    }

    #[test]
    fn test_build_stored_query_requires_q() {
        let now = NaiveDate::from_ymd_opt(2026, 8, 19).unwrap();
        let input = params(&[("fq", "boo")]);
        let err = build_stored_query(&input, Frequency::Daily, None, now, &MyadsConfig::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingQueryField));
    }
}
