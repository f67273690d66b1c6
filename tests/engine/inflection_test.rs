//! Regression suite for single-word inflection in both directions.
//!
//! Every pair is checked four ways: pluralizing the singular, pluralizing
//! the plural (a no-op), singularizing the plural, and singularizing the
//! singular (a no-op).

use dutch_inflect::{pluralize, singularize};

static WORDS: &[(&str, &str)] = &[
    ("fiets", "fietsen"),
    ("bedrag", "bedragen"),
    ("fles", "flessen"),
    ("raaf", "raven"),
    ("hoef", "hoeven"),
    ("museum", "musea"),
    ("kanon", "kanonnen"),
    ("bal", "ballen"),
    ("bof", "boffen"),
    ("lijst", "lijsten"),
    ("baard", "baarden"),
    ("computer", "computers"),
    ("lepel", "lepels"),
    ("pdf", "pdfs"),
    ("raad", "raden"),
    ("stank", "stanken"),
    // exception-table entries
    ("ei", "eieren"),
    ("kalf", "kalveren"),
    ("paragraaf", "paragrafen"),
    ("pardon", "pardons"),
    ("auteur", "auteurs"),
    ("coureur", "coureurs"),
];

#[test]
fn test_pluralize_singular_forms() {
    for (singular, plural) in WORDS {
        assert_eq!(pluralize(singular), *plural, "plural form for '{singular}'");
    }
}

#[test]
fn test_pluralize_is_noop_on_plural_forms() {
    for (_, plural) in WORDS {
        assert_eq!(pluralize(plural), *plural, "re-pluralizing '{plural}'");
    }
}

#[test]
fn test_singularize_plural_forms() {
    for (singular, plural) in WORDS {
        assert_eq!(
            singularize(plural),
            *singular,
            "singular form for '{plural}'"
        );
    }
}

#[test]
fn test_singularize_is_noop_on_singular_forms() {
    for (singular, _) in WORDS {
        assert_eq!(
            singularize(singular),
            *singular,
            "re-singularizing '{singular}'"
        );
    }
}

#[test]
fn test_roundtrip_stabilizes() {
    for (singular, _) in WORDS {
        let plural = pluralize(singular);
        assert_eq!(singularize(&plural), *singular, "roundtrip for '{singular}'");
        assert_eq!(pluralize(&plural), plural, "plural of '{singular}' is stable");
    }
}

#[test]
fn test_doubled_vowel_resolution() {
    assert_eq!(pluralize("raaf"), "raven");
    assert_eq!(singularize("raven"), "raaf");
    assert_eq!(pluralize("oog"), "ogen");
    assert_eq!(singularize("ogen"), "oog");
}

#[test]
fn test_doubled_consonant_resolution() {
    assert_eq!(pluralize("vis"), "vissen");
    assert_eq!(singularize("vissen"), "vis");
    assert_eq!(singularize("ballen"), "bal");
    assert_eq!(singularize("kanonnen"), "kanon");
}

#[test]
fn test_fallback_appends_default_suffix() {
    assert_eq!(pluralize("baard"), "baarden");
    assert_eq!(pluralize("stank"), "stanken");
}

#[test]
fn test_fallback_leaves_unmatched_singular_unchanged() {
    assert_eq!(singularize("baard"), "baard");
    assert_eq!(singularize("stank"), "stank");
}

#[test]
fn test_empty_input_flows_through_the_fallback() {
    assert_eq!(pluralize(""), "en");
    assert_eq!(singularize(""), "");
}
