//! Display names for notifications
//!
//! Notification lists show a short name derived from the query data: the
//! leading word or quoted phrase, truncated, with ", etc." marking that the
//! query holds more. Template kinds wrap that summary in a fixed pattern,
//! and the same patterns are used to recognize names the user never edited
//! so they can follow data changes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::notification::TemplateKind;

lazy_static! {
    // First bare word or quoted phrase, ignoring any wrapping parentheses
    static ref FIRST_WORD_OR_PHRASE: Regex =
        Regex::new(r#"^[(]*("([^"()]*)"|[^ ()"]+)[)]*"#).unwrap();
}

/// Collections that can qualify a query name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Physics,
    Astronomy,
    Arxiv,
}

impl Collection {
    pub fn suffix(&self) -> &'static str {
        match self {
            Collection::Physics => " (physics collection)",
            Collection::Astronomy => " (astronomy collection)",
            Collection::Arxiv => " (arXiv e-prints collection)",
        }
    }

    /// Parse a stored collection tag. Unknown tags are dropped with a
    /// warning rather than an error, matching how legacy profiles behave.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "physics" => Some(Collection::Physics),
            "astronomy" => Some(Collection::Astronomy),
            "arxiv" => Some(Collection::Arxiv),
            _ => {
                tracing::warn!("Unrecognized collection tag: {}", tag);
                None
            }
        }
    }
}

/// Derive a short display name from a keyword query.
///
/// Takes the leading word or quoted phrase, truncates it to 100 characters,
/// and appends ", etc." when the query holds more than the name shows. A
/// query that yields nothing at all names itself "-".
///
/// # Examples
///
/// ```
/// use myads_core::name::summarize_query_name;
///
/// assert_eq!(summarize_query_name("exoplanet", None), "exoplanet");
/// assert_eq!(summarize_query_name("keyword1 OR keyword2", None), "keyword1, etc.");
/// ```
pub fn summarize_query_name(query: &str, collection: Option<Collection>) -> String {
    let trimmed = query.trim();

    let mut first = FIRST_WORD_OR_PHRASE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    if first.chars().count() <= 2 {
        // Bad leading data such as '"star', or a match too small to be a
        // name, such as '+(' from '+(star OR planets)': grab at least
        // something
        first = trimmed
            .split(' ')
            .next()
            .unwrap_or("")
            .trim_matches('(')
            .trim_matches(')')
            .to_string();
    }

    if first.chars().count() > 100 {
        first = first.chars().take(100).collect();
    }

    if first != trimmed && !first.is_empty() {
        first.push_str(", etc.");
    }

    if first.is_empty() {
        first = "-".to_string();
    }

    if let Some(collection) = collection {
        first.push_str(collection.suffix());
    }

    first.trim_matches('+').to_string()
}

/// The name a template notification gets when the user supplies none.
pub fn default_template_name(template: TemplateKind, data: Option<&str>) -> String {
    match template {
        TemplateKind::Keyword => summarize_query_name(data.unwrap_or(""), None),
        TemplateKind::Arxiv => match data {
            Some(data) => format!("{} - Recent Papers", summarize_query_name(data, None)),
            None => "arXiv - Recent Papers".to_string(),
        },
        TemplateKind::Citations => format!("{} - Citations", data.unwrap_or("")),
        TemplateKind::Authors => "Favorite Authors - Recent Papers".to_string(),
    }
}

/// Whether a name matches the auto-generated pattern for the given data.
///
/// Auto-generated names track their data when it changes; anything else is
/// treated as user-chosen and left alone.
pub fn is_autogenerated_name(name: &str, template: TemplateKind, data: Option<&str>) -> bool {
    name == default_template_name(template, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_is_its_own_name() {
        assert_eq!(summarize_query_name("exoplanet", None), "exoplanet");
    }

    #[test]
    fn test_multiple_keywords_append_etc() {
        assert_eq!(summarize_query_name("keyword1 OR keyword2", None), "keyword1, etc.");
        assert_eq!(
            summarize_query_name("photosphere OR chromosphere", None),
            "photosphere, etc."
        );
    }

    #[test]
    fn test_quoted_phrase_keeps_quotes() {
        assert_eq!(
            summarize_query_name("\"climate change\" OR \"global warming\"", None),
            "\"climate change\", etc."
        );
    }

    #[test]
    fn test_wrapping_parens_are_ignored() {
        assert_eq!(summarize_query_name("(star OR planet)", None), "star, etc.");
    }

    #[test]
    fn test_short_match_falls_back_to_first_token() {
        // the regex only captures '+(' here, so the fallback takes over
        assert_eq!(
            summarize_query_name("+(star OR planets)", None),
            "(star, etc."
        );
    }

    #[test]
    fn test_leading_marker_is_stripped() {
        assert_eq!(
            summarize_query_name("+EUV coronal waves", None),
            "EUV, etc."
        );
    }

    #[test]
    fn test_empty_input_names_itself_dash() {
        assert_eq!(summarize_query_name("", None), "-");
        assert_eq!(summarize_query_name("(())", None), "-");
    }

    #[test]
    fn test_long_names_are_truncated() {
        let long_word = format!("{}bccc", "a".repeat(99));
        let query = format!("{} OR star", long_word);
        let expected = format!("{}b, etc.", "a".repeat(99));
        assert_eq!(summarize_query_name(&query, None), expected);
    }

    #[test]
    fn test_collection_suffixes() {
        assert_eq!(
            summarize_query_name("star", Some(Collection::Physics)),
            "star (physics collection)"
        );
        assert_eq!(
            summarize_query_name("star", Some(Collection::Astronomy)),
            "star (astronomy collection)"
        );
        assert_eq!(
            summarize_query_name("star", Some(Collection::Arxiv)),
            "star (arXiv e-prints collection)"
        );
    }

    #[test]
    fn test_unknown_collection_tag_is_dropped() {
        assert_eq!(Collection::parse("astronomy"), Some(Collection::Astronomy));
        assert_eq!(Collection::parse("biology"), None);
    }

    #[test]
    fn test_default_names_per_template() {
        assert_eq!(
            default_template_name(TemplateKind::Keyword, Some("keyword1 OR keyword2")),
            "keyword1, etc."
        );
        assert_eq!(
            default_template_name(TemplateKind::Arxiv, Some("keyword1 OR keyword2")),
            "keyword1, etc. - Recent Papers"
        );
        assert_eq!(
            default_template_name(TemplateKind::Arxiv, None),
            "arXiv - Recent Papers"
        );
        assert_eq!(
            default_template_name(TemplateKind::Citations, Some("author:\"Kurtz, Michael\"")),
            "author:\"Kurtz, Michael\" - Citations"
        );
        assert_eq!(
            default_template_name(TemplateKind::Authors, Some("author:\"x\"")),
            "Favorite Authors - Recent Papers"
        );
    }

    #[test]
    fn test_autogenerated_name_detection() {
        assert!(is_autogenerated_name(
            "keyword1, etc. - Recent Papers",
            TemplateKind::Arxiv,
            Some("keyword1 OR keyword2")
        ));
        assert!(!is_autogenerated_name(
            "test query",
            TemplateKind::Arxiv,
            Some("keyword1 OR keyword2")
        ));
        assert!(is_autogenerated_name(
            "author:\"Kurtz, Michael\" - Citations",
            TemplateKind::Citations,
            Some("author:\"Kurtz, Michael\"")
        ));
    }
}
