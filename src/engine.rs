//! First-match scan of the rule table and template substitution.
//!
//! A rule matches when its expanded ending pattern, anchored at the end of
//! the isolated last word, succeeds case-insensitively. The first hit in
//! table order produces both the singular and the plural form at once;
//! rules tagged with a doubled-letter class go through a second pass that
//! extracts the single representative letter from the matched pair.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::placeholder;
use crate::rules::{self, DoubleClass, InflectionRule, SINGLE_MARKER};
use crate::split;
use crate::validation::{self, RuleError};

/// Both inflected forms produced by a single rule match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub singular: String,
    pub plural: String,
}

/// A rule with its two patterns compiled: the full match against a tail
/// (`^(.*)<ending>$`) and the end-anchored replacement pattern
/// (`<ending>$`), both case-insensitive.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    full: Regex,
    replace: Regex,
    singular: &'static str,
    plural: &'static str,
    double: Option<DoubleClass>,
}

static BUILTIN: LazyLock<Vec<CompiledRule>> =
    LazyLock::new(|| compile_rules(rules::RULES).expect("built-in rule table is valid"));

/// The default plural suffix used when no rule matches.
static ENDS_IN_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new("(?i)en$").unwrap());
static STRIP_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new("(?i)^(.*)en$").unwrap());

pub(crate) fn compile_rules(table: &[InflectionRule]) -> Result<Vec<CompiledRule>, RuleError> {
    table.iter().map(compile_rule).collect()
}

fn compile_rule(rule: &InflectionRule) -> Result<CompiledRule, RuleError> {
    validation::check_double_tag(rule)?;

    let expanded = placeholder::expand(rule.ending);
    let bad_pattern = |source| RuleError::BadPattern {
        ending: rule.ending.to_string(),
        source,
    };
    let full = Regex::new(&format!("(?i)^(.*){expanded}$")).map_err(&bad_pattern)?;
    let replace = Regex::new(&format!("(?i){expanded}$")).map_err(&bad_pattern)?;

    let available = replace.captures_len() - 1;
    validation::check_template(rule, rule.singular, available)?;
    validation::check_template(rule, rule.plural, available)?;

    Ok(CompiledRule {
        full,
        replace,
        singular: rule.singular,
        plural: rule.plural,
        double: rule.double,
    })
}

fn class_matcher(class: DoubleClass) -> &'static Regex {
    static VOWEL_PAIR: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(&format!("(?i)(?:{})", DoubleClass::Vowel.pattern())).unwrap());
    static CONSONANT_PAIR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(&format!("(?i)(?:{})", DoubleClass::Consonant.pattern())).unwrap()
    });
    match class {
        DoubleClass::Vowel => &VOWEL_PAIR,
        DoubleClass::Consonant => &CONSONANT_PAIR,
    }
}

/// Scan captured groups from the last to the first and take the first
/// character of the first group holding a doubled pair of `class`. Later
/// groups sit closer to the word ending, so they win when several qualify;
/// no qualifying group yields the empty string.
fn representative_letter(caps: &Captures<'_>, class: DoubleClass) -> String {
    let matcher = class_matcher(class);
    for index in (1..caps.len()).rev() {
        let Some(group) = caps.get(index) else { continue };
        if matcher.is_match(group.as_str()) {
            return group.as_str().chars().take(1).collect();
        }
    }
    String::new()
}

/// Converts identifier-like Dutch nouns between singular and plural.
///
/// The default value runs the built-in rule table and is cheap to
/// construct; the compiled table is shared process-wide.
pub struct Inflector {
    table: Cow<'static, [CompiledRule]>,
    trace: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

impl Default for Inflector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflector {
    /// An inflector over the built-in rule table.
    pub fn new() -> Self {
        Inflector {
            table: Cow::Borrowed(BUILTIN.as_slice()),
            trace: None,
        }
    }

    /// An inflector over a custom rule table, validated up front.
    pub fn with_rules(table: &[InflectionRule]) -> Result<Self, RuleError> {
        Ok(Inflector {
            table: Cow::Owned(compile_rules(table)?),
            trace: None,
        })
    }

    /// Install a diagnostic callback invoked with each attempted rule's
    /// concrete expanded pattern. Purely observational.
    pub fn with_trace(mut self, trace: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.trace = Some(Box::new(trace));
        self
    }

    /// The plural form of `input`. Falls back to appending `en` when no
    /// rule matches, unless the input already ends in it.
    pub fn pluralize(&self, input: &str) -> String {
        if let Some(outcome) = self.find_ending_match(input) {
            return outcome.plural;
        }

        if ENDS_IN_SUFFIX.is_match(input) {
            input.to_string()
        } else {
            format!("{input}en")
        }
    }

    /// The singular form of `input`. Falls back to stripping a trailing
    /// `en` when no rule matches, or returns the input unchanged.
    pub fn singularize(&self, input: &str) -> String {
        if let Some(outcome) = self.find_ending_match(input) {
            return outcome.singular;
        }

        match STRIP_SUFFIX.captures(input) {
            Some(caps) => caps[1].to_string(),
            None => input.to_string(),
        }
    }

    /// Try every rule in table order against the last word of `input` and
    /// build both inflected forms from the first hit.
    pub fn find_ending_match(&self, input: &str) -> Option<MatchOutcome> {
        let camel = split::is_camel_cased(input);
        let parts = split::split_last_word(input, camel);

        for rule in self.table.iter() {
            if let Some(trace) = &self.trace {
                trace(rule.full.as_str());
            }

            let Some(caps) = rule.full.captures(parts.tail) else {
                continue;
            };

            let mut singular_tail = rule.replace.replace(parts.tail, rule.singular).into_owned();
            let mut plural_tail = rule.replace.replace(parts.tail, rule.plural).into_owned();

            if camel && !parts.prefix.is_empty() {
                singular_tail = split::capitalize_first(&singular_tail);
                plural_tail = split::capitalize_first(&plural_tail);
            }

            let mut singular = format!("{}{}{}", parts.prefix, parts.separator, singular_tail);
            let mut plural = format!("{}{}{}", parts.prefix, parts.separator, plural_tail);

            if let Some(class) = rule.double {
                let single = representative_letter(&caps, class);
                singular = singular.replace(SINGLE_MARKER, &single);
                plural = plural.replace(SINGLE_MARKER, &single);
            }

            return Some(MatchOutcome { singular, plural });
        }

        None
    }
}

/// Pluralize with the built-in rule table.
pub fn pluralize(input: &str) -> String {
    Inflector::new().pluralize(input)
}

/// Singularize with the built-in rule table.
pub fn singularize(input: &str) -> String {
    Inflector::new().singularize(input)
}
