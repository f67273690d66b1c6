//! Authoring checks for rule tables.
//!
//! A malformed rule is a data defect, not a runtime condition: the two
//! public operations are total, and recovering from a broken rule at call
//! time would silently mask the defect. These checks run when a custom
//! table is installed and from the rule-table test suite.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::engine;
use crate::rules::{DoubleClass, InflectionRule, SINGLE_MARKER};

/// A defect in an authored rule.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("ending pattern '{ending}' does not compile: {source}")]
    BadPattern {
        ending: String,
        #[source]
        source: regex::Error,
    },

    #[error(
        "template '{template}' for ending '{ending}' references group {index}, \
         but the pattern captures only {available}"
    )]
    GroupOutOfRange {
        ending: String,
        template: String,
        index: usize,
        available: usize,
    },

    #[error(
        "template '{template}' for ending '{ending}' uses the single-letter marker, \
         but the rule carries no doubled-letter class"
    )]
    UntaggedSingleMarker { ending: String, template: String },

    #[error("ending pattern '{ending}' is tagged {tag:?} but does not use the matching token")]
    DoubleTagMismatch { ending: String, tag: DoubleClass },

    #[error("ending pattern '{ending}' uses a doubled-letter token but carries no class tag")]
    MissingDoubleTag { ending: String },
}

/// `${n}` and `$n` group references inside a replacement template.
static GROUP_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{?(\d+)\}?").unwrap());

/// Check a rule table without building an engine from it.
pub fn validate(table: &[InflectionRule]) -> Result<(), RuleError> {
    engine::compile_rules(table).map(|_| ())
}

/// The doubled-letter tag must agree with the tokens the pattern uses.
pub(crate) fn check_double_tag(rule: &InflectionRule) -> Result<(), RuleError> {
    let from_tokens = if rule.ending.contains("DSC") {
        Some(DoubleClass::Consonant)
    } else if rule.ending.contains("DSV") {
        Some(DoubleClass::Vowel)
    } else {
        None
    };

    match (from_tokens, rule.double) {
        (Some(token_class), Some(tag)) if token_class == tag => Ok(()),
        (None, None) => Ok(()),
        (Some(_), None) => Err(RuleError::MissingDoubleTag {
            ending: rule.ending.to_string(),
        }),
        (_, Some(tag)) => Err(RuleError::DoubleTagMismatch {
            ending: rule.ending.to_string(),
            tag,
        }),
    }
}

/// Group references must stay within the pattern's capture count, and the
/// single-letter marker is only meaningful on tagged rules.
pub(crate) fn check_template(
    rule: &InflectionRule,
    template: &str,
    available: usize,
) -> Result<(), RuleError> {
    for caps in GROUP_REF.captures_iter(template) {
        let index: usize = caps[1].parse().unwrap_or(usize::MAX);
        if index > available {
            return Err(RuleError::GroupOutOfRange {
                ending: rule.ending.to_string(),
                template: template.to_string(),
                index,
                available,
            });
        }
    }

    if template.contains(SINGLE_MARKER) && rule.double.is_none() {
        return Err(RuleError::UntaggedSingleMarker {
            ending: rule.ending.to_string(),
            template: template.to_string(),
        });
    }

    Ok(())
}
