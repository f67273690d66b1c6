//! Authoring invariants of the built-in rule table.
//!
//! The table is first-match-wins, so its authored order is part of the
//! observable behavior. These tests pin the order-sensitive entries and
//! run the same validation a custom table goes through.

use dutch_inflect::{pluralize, validation, DoubleClass, RULES};

#[test]
fn test_builtin_table_validates() {
    validation::validate(RULES).expect("built-in rule table");
}

#[test]
fn test_table_size_and_head() {
    assert_eq!(RULES.len(), 74);
    assert_eq!(RULES[0].ending, "ei(eren)?");
}

fn position(ending: &str) -> usize {
    RULES
        .iter()
        .position(|rule| rule.ending == ending)
        .unwrap_or_else(|| panic!("rule '{ending}' missing from the table"))
}

#[test]
fn test_exceptions_precede_the_rules_that_would_shadow_them() {
    // pardon -> pardons, not pardonnen
    assert!(position("(pardon|coupon)s?") < position("(V)([bdfklmnprst])([aoui])n"));
    // auteur -> auteurs, not auteuren
    assert!(position("auteurs?") < position("(oe|eu|ie|ij|ou)(C)(en)?"));
    // paragraaf -> paragrafen, not paragraven
    assert!(position("paragra(af|fen)") < position("(DSV)f"));
    // flessen -> fles via the doubled-consonant rule, not the -en catch-all
    assert!(position("(V)(DSC)en") < position("(C)en"));
    // museum -> musea before the broad vowel-pair rule
    assert!(position("se(a|um)") < position("([aeo]{2})s?"));
}

#[test]
fn test_exception_precedence_is_observable() {
    assert_eq!(pluralize("ei"), "eieren");
    assert_eq!(pluralize("pardon"), "pardons");
    assert_eq!(pluralize("auteur"), "auteurs");
    assert_eq!(pluralize("artikel"), "artikelen");
    assert_eq!(pluralize("museum"), "musea");
}

#[test]
fn test_double_tags_agree_with_tokens() {
    for rule in RULES {
        let expected = if rule.ending.contains("DSC") {
            Some(DoubleClass::Consonant)
        } else if rule.ending.contains("DSV") {
            Some(DoubleClass::Vowel)
        } else {
            None
        };
        assert_eq!(rule.double, expected, "tag for '{}'", rule.ending);
    }
}

#[test]
fn test_catch_alls_sit_at_the_bottom() {
    let last = &RULES[RULES.len() - 1];
    assert_eq!(last.ending, "([aeo])s?");
    assert!(position("(C)en") > position("(V)(DSC)en"));
    assert!(position("([bcdfghjklmnpqrtvwxyz]{3})s?") > position("(C)en"));
}
