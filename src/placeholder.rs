//! Placeholder classes for ending patterns.
//!
//! Rule patterns are authored with symbolic tokens (`C`, `V`, `V!I`, `DSV`,
//! `DSC`) standing in for character classes. [`expand`] rewrites a pattern
//! into a concrete regular expression by substituting whole tokens with
//! their fragments.

/// Any consonant.
pub const CONSONANT: &str = "[bcdfghjklmnpqrstvwxyz]";

/// Any vowel.
pub const VOWEL: &str = "[aeiou]";

/// Any vowel except `i`, which never doubles into a long vowel.
pub const VOWEL_EXCEPT_I: &str = "[aeou]";

/// A doubled long vowel, as in `raaf` or `been`.
pub const DOUBLE_SAME_VOWEL: &str = "aa|ee|oo|uu";

/// A doubled consonant after a short vowel, as in `ballen` or `vissen`.
pub const DOUBLE_SAME_CONSONANT: &str = "bb|dd|ff|gg|kk|ll|mm|nn|pp|rr|ss|tt";

/// Token substitutions, applied in this order. `DSC` and `DSV` embed `C`
/// and `V` as substrings and `V!I` embeds `V`, so the longer tokens must
/// be substituted first; reordering this table corrupts expansion.
const TOKENS: [(&str, &str); 5] = [
    ("DSC", DOUBLE_SAME_CONSONANT),
    ("DSV", DOUBLE_SAME_VOWEL),
    ("V!I", VOWEL_EXCEPT_I),
    ("C", CONSONANT),
    ("V", VOWEL),
];

/// Expand every placeholder token in `pattern` into its regex fragment.
///
/// Pure literal substitution; a pattern without tokens passes through
/// unchanged.
pub fn expand(pattern: &str) -> String {
    let mut expanded = pattern.to_string();
    for (token, fragment) in TOKENS {
        expanded = expanded.replace(token, fragment);
    }
    expanded
}
