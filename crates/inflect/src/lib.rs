#![forbid(unsafe_code)]

//! English noun inflection: plural and singular forms under a configurable
//! classical policy, with user-overridable irregular nouns.
//!
//! # Role
//! `inflect` is a text-generation primitive. Callers ask for the plural or
//! singular of a word; everything else (counts, articles, joins) builds on
//! those two reads and the classical getters.
//!
//! # Primary pieces
//! - [`Engine`]: thread-safe state container (noun table, overrides,
//!   classical policy) behind one reader/writer lock.
//! - [`ClassicalFlags`] / [`ClassicalMode`]: the classical policy.
//! - [`NounTable`]: built-in irregular nouns merged with user overrides.
//! - [`SuffixCascade`]: ordered suffix rules for regular forms.
//! - [`match_case`] / [`match_suffix`]: case projection.
//! - Free functions ([`plural`], [`singular`], [`def_noun`], ...) backed by a
//!   process-wide default engine.
//!
//! ```
//! assert_eq!(inflect::plural("Knife"), "Knives");
//! assert_eq!(inflect::singular("CITIES"), "CITY");
//! ```

pub mod case;
pub mod classical;
pub mod engine;
pub mod error;
pub mod global;
pub mod registry;
pub mod rules;
pub mod tables;

pub use case::{CasePattern, match_case, match_suffix};
pub use classical::{ClassicalFlags, ClassicalMode};
pub use engine::{Engine, NounComparison, PluralStep, SingularStep};
pub use error::{InflectError, Result};
pub use global::{
    classical_all, classical_ancient, classical_herd, classical_latin, classical_names,
    classical_persons, classical_zero, compare_nouns, def_noun, default_engine, is_classical_all,
    is_classical_ancient, is_classical_herd, is_classical_latin, is_classical_names,
    is_classical_persons, is_classical_zero, plural, plural_for_count, reset, singular, undef_noun,
};
pub use registry::NounTable;
pub use rules::{PluralRule, SingularRule, SuffixCascade};
pub use tables::IrregularTable;
