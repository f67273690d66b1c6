//! Compound identifiers: only the last word is inflected, while prefix,
//! separator, and casing convention survive unchanged.

use dutch_inflect::{pluralize, singularize};

static COMPOUNDS: &[(&str, &str)] = &[
    ("zeer lange fiets", "zeer lange fietsen"),
    ("geluksbedrag", "geluksbedragen"),
    ("lucht-fles", "lucht-flessen"),
    ("bonte_raaf", "bonte_raven"),
    ("kaartSpel", "kaartSpellen"),
    ("kippen ei", "kippen eieren"),
    ("kippen-oog", "kippen-ogen"),
];

#[test]
fn test_pluralize_compounds() {
    for (singular, plural) in COMPOUNDS {
        assert_eq!(pluralize(singular), *plural, "plural form for '{singular}'");
    }
}

#[test]
fn test_pluralize_is_noop_on_plural_compounds() {
    for (_, plural) in COMPOUNDS {
        assert_eq!(pluralize(plural), *plural, "re-pluralizing '{plural}'");
    }
}

#[test]
fn test_singularize_compounds() {
    for (singular, plural) in COMPOUNDS {
        assert_eq!(
            singularize(plural),
            *singular,
            "singular form for '{plural}'"
        );
    }
}

#[test]
fn test_singularize_is_noop_on_singular_compounds() {
    for (singular, _) in COMPOUNDS {
        assert_eq!(
            singularize(singular),
            *singular,
            "re-singularizing '{singular}'"
        );
    }
}

#[test]
fn test_separator_survives_byte_for_byte() {
    assert_eq!(pluralize("lucht-fles"), "lucht-flessen");
    assert_eq!(pluralize("bonte_raaf"), "bonte_raven");
    assert_eq!(pluralize("zeer lange fiets"), "zeer lange fietsen");
}

#[test]
fn test_camel_case_tail_is_recapitalized() {
    assert_eq!(pluralize("kaartSpel"), "kaartSpellen");
    assert_eq!(singularize("kaartSpellen"), "kaartSpel");
}

#[test]
fn test_camel_case_prefix_survives_the_fallback() {
    // No rule matches `stank`, so the default suffix lands on the whole
    // compound without touching the prefix.
    assert_eq!(pluralize("kaartStank"), "kaartStanken");
}

#[test]
fn test_plural_looking_prefix_is_left_alone() {
    // Only the tail is inflected; `kippen` stays plural.
    assert_eq!(singularize("kippen eieren"), "kippen ei");
    assert_eq!(singularize("kippen-ogen"), "kippen-oog");
}
