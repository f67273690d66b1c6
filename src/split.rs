//! Last-word isolation for compound identifiers.
//!
//! Inflection only touches the last morphological word of an identifier;
//! everything before it, including the separator, is passed through
//! unchanged. camelCase compounds split at the last uppercase letter and
//! get their tail recapitalized after inflection.

use std::sync::LazyLock;

use regex::Regex;

/// How an identifier splits around the word to inflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitResult<'a> {
    /// Text before the last word, passed through unchanged.
    pub prefix: &'a str,
    /// Separator between prefix and tail; empty on a camelCase boundary.
    pub separator: &'a str,
    /// The word-fragment to inflect.
    pub tail: &'a str,
}

/// Lowercase/digit runs, each inner run ending in exactly one capital.
/// A plain lowercase word counts too; it simply has nothing to split.
static CAMEL_CASED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^([a-z0-9]+[A-Z])*[a-z0-9]+$").unwrap());

/// Greedy prefix puts the boundary at the last uppercase letter.
static CAMEL_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new("^(.*)([A-Z].*)$").unwrap());

/// Greedy prefix puts the boundary at the last separator character.
static SEPARATOR_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)([_\s-])([^_\s-]+)$").unwrap());

/// Whether the whole input follows the camelCase convention.
pub fn is_camel_cased(input: &str) -> bool {
    CAMEL_CASED.is_match(input)
}

/// Isolate the last word of `input`. `camel` must be the result of
/// [`is_camel_cased`] on the whole string.
pub fn split_last_word(input: &str, camel: bool) -> SplitResult<'_> {
    if camel {
        if let Some(caps) = CAMEL_SPLIT.captures(input) {
            return SplitResult {
                prefix: caps.get(1).map_or("", |m| m.as_str()),
                separator: "",
                tail: caps.get(2).map_or("", |m| m.as_str()),
            };
        }
    }

    if let Some(caps) = SEPARATOR_SPLIT.captures(input) {
        return SplitResult {
            prefix: caps.get(1).map_or("", |m| m.as_str()),
            separator: caps.get(2).map_or("", |m| m.as_str()),
            tail: caps.get(3).map_or("", |m| m.as_str()),
        };
    }

    SplitResult {
        prefix: "",
        separator: "",
        tail: input,
    }
}

/// Uppercase the first letter, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
