use proptest::prelude::*;

use super::{annotate, annotate_opt, annotate_tag, distance, join, matches, matches_opt};

fn marked<'a>(text: &'a str, query: &str) -> Vec<&'a str> {
    annotate(text, query)
        .into_iter()
        .filter(|s| s.matched)
        .map(|s| s.text)
        .collect()
}

// --- Decision ---

#[test]
fn test_empty_query_matches_everything() {
    assert!(matches("", "anything"));
    assert!(matches("", ""));
    assert!(matches_opt("", None));
}

#[test]
fn test_empty_text_never_matches() {
    assert!(!matches("x", ""));
    assert!(!matches_opt("x", None));
}

#[test]
fn test_substring_path() {
    assert!(matches("cat", "The cat sat"));
    assert!(matches("CAT", "the cat sat"));
    assert!(matches("e ca", "The cat sat"));
}

#[test]
fn test_concatenated_words() {
    assert!(matches("reacthooks", "React Hooks"));
    assert!(matches("react hooks", "ReactHooks are neat"));
}

#[test]
fn test_typo_within_threshold() {
    assert!(matches("react hoks", "React Hooks"));
    assert!(!matches("raect", "React Hooks"));
    assert!(matches("reakt hooks", "React Hooks"));
    assert!(matches("documantation", "The official documentation"));
}

#[test]
fn test_joined_query_with_typo_is_one_long_word() {
    // "reacthoks" is neither a substring of "reacthooks" nor within two edits
    // of either text word, so the typo is not absorbed
    assert!(!matches("reacthoks", "React Hooks"));
    assert!(matches("reacthooks", "React Hooks"));
}

#[test]
fn test_short_words_are_exact() {
    // three letters allow no edits
    assert!(!matches("cst", "cat"));
    // four letters allow one
    assert!(matches("rost", "rust lang"));
}

#[test]
fn test_no_match() {
    assert!(!matches("xyz123", "React Hooks"));
    assert!(!matches("python", "React Hooks"));
}

#[test]
fn test_whitespace_only_query() {
    assert!(matches("   ", "React Hooks"));
    assert!(!matches("   ", ""));
}

#[test]
fn test_length_pruning_does_not_reject_valid_matches() {
    // "hooks" vs "hook": one deletion, length difference one
    assert!(matches("hooks", "a hook"));
}

// --- AND across query words vs OR across query words ---

#[test]
fn test_two_words_one_present_does_not_match() {
    assert!(!matches("react angular", "React Hooks"));
}

#[test]
fn test_two_words_one_present_still_highlights_it() {
    assert_eq!(marked("React Hooks", "react angular"), vec!["React"]);
}

// --- Highlighting ---

#[test]
fn test_annotate_marks_fuzzy_words() {
    assert_eq!(marked("React Hooks, explained.", "hoks"), vec!["Hooks"]);
}

#[test]
fn test_annotate_punctuation_is_never_marked() {
    let spans = annotate("Hello, world!", "hello world");
    let marks: Vec<_> = spans.iter().filter(|s| s.matched).map(|s| s.text).collect();
    assert_eq!(marks, vec!["Hello", "world"]);
    assert!(spans.iter().any(|s| s.text == "," && !s.matched));
    assert!(spans.iter().any(|s| s.text == "!" && !s.matched));
}

#[test]
fn test_annotate_empty_query_is_single_plain_span() {
    let spans = annotate("The cat sat", "");
    assert_eq!(spans.len(), 1);
    assert!(!spans[0].matched);
    assert_eq!(spans[0].text, "The cat sat");
}

#[test]
fn test_annotate_missing_text() {
    assert!(annotate_opt(None, "cat").is_empty());
    assert!(annotate("", "cat").is_empty());
}

#[test]
fn test_annotate_tag_prefixes_query() {
    let spans = annotate_tag("#react", "react");
    assert_eq!(spans.len(), 1);
    assert!(spans[0].matched);

    let spans = annotate_tag("#react", "#react");
    assert!(spans[0].matched);

    let spans = annotate_tag("#react", "");
    assert!(!spans[0].matched);
}

#[test]
fn test_annotate_lossless_examples() {
    for (text, query) in [
        ("  leading and trailing  ", "and"),
        ("\"Quoted\" (parens); semi: colon?", "quoted"),
        ("tabs\tand\nnewlines", "tabs"),
        ("naïve café", "cafe"),
    ] {
        assert_eq!(join(&annotate(text, query)), text);
    }
}

#[test]
fn test_matcher_is_pure() {
    let first = matches("reacthoks", "React Hooks");
    let second = matches("reacthoks", "React Hooks");
    assert_eq!(first, second);
}

// --- Properties ---

proptest! {
    #[test]
    fn distance_to_self_is_zero(s in "\\PC{0,16}") {
        prop_assert_eq!(distance(&s, &s), 0);
    }

    #[test]
    fn distance_is_symmetric(a in "[a-e ]{0,10}", b in "[a-e ]{0,10}") {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn distance_from_empty_is_length(s in "\\PC{0,16}") {
        prop_assert_eq!(distance("", &s), s.chars().count());
        prop_assert_eq!(distance(&s, ""), s.chars().count());
    }

    #[test]
    fn distance_triangle_inequality(a in "[a-d]{0,8}", b in "[a-d]{0,8}", c in "[a-d]{0,8}") {
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }

    #[test]
    fn annotate_reconstructs_text(text in "\\PC{0,40}", query in "\\PC{0,12}") {
        prop_assert_eq!(join(&annotate(&text, &query)), text);
    }

    #[test]
    fn matches_is_deterministic(query in "[a-z ]{0,12}", text in "[a-z .,]{0,30}") {
        prop_assert_eq!(matches(&query, &text), matches(&query, &text));
    }
}
