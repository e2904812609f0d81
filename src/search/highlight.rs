use once_cell::sync::Lazy;
use regex::Regex;

use super::distance::{distance, threshold_for, within_length_bound};
use super::matcher::words;

/// Whitespace runs and runs of `. , ! ? ; : ( ) "` split the target into tokens.
static SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s+|[.,!?;:()"]+"#).expect("separator regex is valid"));

/// A slice of the target text and whether it should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Span<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }
}

/// Splits `text` into spans covering it losslessly and marks every word token
/// that is a near match for at least one query word.
pub fn annotate<'a>(text: &'a str, query: &str) -> Vec<Span<'a>> {
    if text.is_empty() {
        return vec![];
    }
    if query.is_empty() {
        return vec![Span::plain(text)];
    }

    let query = query.to_lowercase();
    let query_words = words(&query);

    tokenize(text)
        .into_iter()
        .map(|token| match token {
            Token::Separator(s) => Span::plain(s),
            Token::Word(w) => Span {
                text: w,
                matched: is_near_match(w, &query_words),
            },
        })
        .collect()
}

pub fn annotate_opt<'a>(text: Option<&'a str>, query: &str) -> Vec<Span<'a>> {
    text.map(|t| annotate(t, query)).unwrap_or_default()
}

/// Annotates an already `#`-prefixed tag label. The query gets the same
/// prefix so `rust` still lights up `#rust`.
pub fn annotate_tag<'a>(label: &'a str, query: &str) -> Vec<Span<'a>> {
    if query.trim().is_empty() {
        return annotate(label, "");
    }
    if query.starts_with('#') {
        annotate(label, query)
    } else {
        annotate(label, &format!("#{query}"))
    }
}

/// Concatenates span texts back into the original string.
pub fn join(spans: &[Span<'_>]) -> String {
    spans.iter().map(|s| s.text).collect()
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Separator(&'a str),
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = vec![];
    let mut last = 0;

    for m in SEPARATOR_REGEX.find_iter(text) {
        if m.start() > last {
            tokens.push(Token::Word(&text[last..m.start()]));
        }
        tokens.push(Token::Separator(m.as_str()));
        last = m.end();
    }

    if last < text.len() {
        tokens.push(Token::Word(&text[last..]));
    }

    tokens
}

/// Per-token test used only for marking. Unlike the item-level decision it is
/// satisfied by any single query word.
fn is_near_match(token: &str, query_words: &[&str]) -> bool {
    let token = token.to_lowercase();

    query_words.iter().any(|qw| {
        let threshold = threshold_for(qw);
        if !within_length_bound(qw, &token, threshold)
            && !token.contains(qw)
            && !qw.contains(token.as_str())
        {
            return false;
        }
        distance(qw, &token) <= threshold
    })
}
