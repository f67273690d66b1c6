//! # dutch-inflect
//!
//! Ending-driven pluralization and singularization for Dutch identifier
//! names (table, column, and field names).
//!
//! Dutch plural formation is irregular and keyed on word endings, so a
//! generic suffix rule gets common schema vocabulary wrong. This crate
//! walks a curated, ordered table of ending patterns instead:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        input identifier ("lucht-fles", "kaartSpel")      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [split]
//! ┌─────────────────────────────────────────────────────────┐
//! │       prefix + separator + last word of the input        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [engine + rules]
//! ┌─────────────────────────────────────────────────────────┐
//! │   first matching ending pattern, in authored table order │
//! │   → singular and plural built from the same match        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │    prefix + separator + inflected (recapitalized) tail   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Both forms are always computed from the same rule match, which keeps
//! `pluralize` and `singularize` mutually consistent:
//!
//! ```
//! use dutch_inflect::{pluralize, singularize};
//!
//! assert_eq!(pluralize("fiets"), "fietsen");
//! assert_eq!(singularize("fietsen"), "fiets");
//! assert_eq!(pluralize("raaf"), "raven");
//! assert_eq!(pluralize("lucht-fles"), "lucht-flessen");
//! assert_eq!(pluralize("kaartSpel"), "kaartSpellen");
//! ```
//!
//! This is a best-effort heuristic for identifier naming, not a
//! dictionary-backed morphological analyzer: there is no part-of-speech
//! awareness and no word list, only ending patterns.

pub mod engine;
pub mod placeholder;
pub mod rules;
pub mod split;
pub mod validation;

pub use engine::{pluralize, singularize, Inflector, MatchOutcome};
pub use rules::{DoubleClass, InflectionRule, RULES};
pub use validation::RuleError;
