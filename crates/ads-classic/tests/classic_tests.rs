//! Integration tests for Classic keyword compilation
//!
//! The real-world inputs here are drawn from Classic myADS profile exports:
//! line-oriented keyword lists, comma-separated phrase lists, and already
//! boolean queries that must round-trip unchanged.

use ads_classic::{compile_classic_keywords, parse, ClassicError, ParseError};
use proptest::prelude::*;

fn compiled(input: &str) -> String {
    compile_classic_keywords(input).unwrap()
}

// === Implicit OR and Clause Elision ===

#[test]
fn test_single_word_passes_through() {
    assert_eq!(compiled("one"), "one");
    assert_eq!(compiled("exoplanet"), "exoplanet");
}

#[test]
fn test_adjacent_words_union() {
    assert_eq!(compiled("one two"), "(one OR two)");
}

#[test]
fn test_parenthesized_run_keeps_one_level_of_parens() {
    assert_eq!(compiled("(one)"), "one");
    assert_eq!(compiled("(one two)"), "(one OR two)");
    assert_eq!(compiled("((one two))"), "(one OR two)");
    assert_eq!(compiled("(((one two)))"), "(one OR two)");
}

#[test]
fn test_group_adjacent_to_word() {
    assert_eq!(compiled("(one two) three"), "((one OR two) OR three)");
}

#[test]
fn test_nested_groups() {
    assert_eq!(compiled("(one (two three))"), "(one OR (two OR three))");
    assert_eq!(compiled("(one (two or three))"), "(one OR (two OR three))");
    assert_eq!(
        compiled("(one (two or three and four))"),
        "(one OR (two OR three AND four))"
    );
}

// === Explicit Operators ===

#[test]
fn test_operators_normalize_to_uppercase() {
    assert_eq!(compiled("one or two"), "one OR two");
    assert_eq!(compiled("one not three"), "one NOT three");
    assert_eq!(compiled("one and not three"), "one AND NOT three");
}

#[test]
fn test_mixed_explicit_and_implicit() {
    assert_eq!(
        compiled("((foo and bar) or (baz) or a or b or c)"),
        "((foo AND bar) OR baz OR a OR b OR c)"
    );
}

#[test]
fn test_canonical_query_round_trips() {
    let canonical = "\"shell galaxies\" OR \"shell galaxy\" OR ((ripple OR ripples OR shells OR (tidal AND structure) OR (tidal AND structures) OR (tidal AND feature) OR (tidal AND features)) AND (galaxy OR galaxies))";
    assert_eq!(compiled(canonical), canonical);
}

// === Phrases and Prefix Markers ===

#[test]
fn test_phrases_and_markers_kept_verbatim() {
    assert_eq!(
        compiled("LISA +\"gravitational wave\" AND \"gravity wave\""),
        "(LISA OR +\"gravitational wave\") AND \"gravity wave\""
    );
}

#[test]
fn test_comma_separated_phrase_list() {
    let input = "\"lattice green's function\",\"kepler's equation\",\"lattice green function\",\"kepler equation\",\"loop quantum gravity\",\"loop quantum cosmology\",\"random walk\",EJTP";
    assert_eq!(
        compiled(input),
        "\"lattice green's function\" OR \"kepler's equation\" OR \"lattice green function\" OR \"kepler equation\" OR \"loop quantum gravity\" OR \"loop quantum cosmology\" OR \"random walk\" OR EJTP"
    );
}

#[test]
fn test_spaced_marker_fuses_forward() {
    assert_eq!(compiled("+ EUV waves"), "(+EUV OR waves)");
    assert_eq!(compiled("- remnant"), "-remnant");
}

// === Line-Oriented Keyword Lists ===

#[test]
fn test_crlf_entries_join_with_or() {
    assert_eq!(
        compiled("photosphere\r\nchromosphere\r\n"),
        "photosphere OR chromosphere"
    );
    assert_eq!(
        compiled("\"climate change\"\r\n\"global warming\"\r\n\"solar variation\""),
        "\"climate change\" OR \"global warming\" OR \"solar variation\""
    );
}

#[test]
fn test_multiword_entries_drop_implicit_or() {
    assert_eq!(
        compiled("+EUV coronal waves \r\n +Dimmings\r\nDimming Mass Evacuation\r\n+Eruption prominence"),
        "(+EUV coronal waves) OR +Dimmings OR (Dimming Mass Evacuation) OR (+Eruption prominence)"
    );
}

// === Errors ===

#[test]
fn test_unbalanced_parens_are_rejected() {
    assert!(matches!(
        compile_classic_keywords("(one two"),
        Err(ClassicError::Syntax(ParseError::UnbalancedParens))
    ));
    assert!(matches!(
        compile_classic_keywords("one) two"),
        Err(ClassicError::Syntax(ParseError::UnbalancedParens))
    ));
}

#[test]
fn test_unterminated_phrase_is_rejected() {
    assert!(matches!(
        compile_classic_keywords("\"dangling"),
        Err(ClassicError::Syntax(ParseError::UnterminatedPhrase(_)))
    ));
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(matches!(
        compile_classic_keywords(""),
        Err(ClassicError::Syntax(ParseError::EmptyQuery))
    ));
    assert!(matches!(
        compile_classic_keywords(" \r\n "),
        Err(ClassicError::Syntax(ParseError::EmptyQuery))
    ));
}

// === Property-Based Tests ===

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,8}".prop_filter("operator keywords are not plain words", |w| {
        !matches!(w.as_str(), "and" | "or" | "not")
    })
}

proptest! {
    #[test]
    fn test_phrases_survive_compilation(
        phrase in "[a-z]{1,12}( [a-z]{1,12}){0,2}",
        before in word_strategy(),
        after in word_strategy(),
    ) {
        let input = format!("{} \"{}\" {}", before, phrase, after);
        let output = compile_classic_keywords(&input).unwrap();
        prop_assert!(
            output.contains(&format!("\"{}\"", phrase)),
            "phrase should survive verbatim in {}",
            output
        );
    }

    #[test]
    fn test_compiled_output_reparses(
        words in proptest::collection::vec(word_strategy(), 1..6),
        seps in proptest::collection::vec(0usize..4, 5),
    ) {
        let mut input = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                input.push_str(match seps[i - 1] {
                    0 => " ",
                    1 => "\r\n",
                    2 => " OR ",
                    _ => " AND ",
                });
            }
            input.push_str(word);
        }
        let output = compile_classic_keywords(&input).unwrap();
        prop_assert!(parse(&output).is_ok(), "compiled output should reparse: {}", output);
    }

    #[test]
    fn test_compilation_is_deterministic(words in proptest::collection::vec(word_strategy(), 1..5)) {
        let input = words.join(" ");
        prop_assert_eq!(compile_classic_keywords(&input).unwrap(), compile_classic_keywords(&input).unwrap());
    }
}
