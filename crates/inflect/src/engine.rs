#![forbid(unsafe_code)]

//! Thread-safe inflection engine.
//!
//! An [`Engine`] owns a private copy of the irregular-noun table merged with
//! user overrides, plus the classical policy. Everything sits behind one
//! reader/writer lock per instance.
//!
//! # Precedence
//!
//! [`Engine::plural`] resolves a word by the first matching step:
//!
//! 1. classical names: capitalized word ending in `s` stays as is
//! 2. classical ancient: Latin/Greek lookup
//! 3. classical persons: `person -> persons`
//! 4. irregular table and user overrides
//! 5. unchanged nouns
//! 6. herd animals (unchanged only in herd mode, else fall through)
//! 7. `-ese`/`-ois` nationality invariants
//! 8. the plural suffix cascade
//!
//! [`Engine::singular`] mirrors this: reverse table lookup, reverse
//! Latin/Greek lookup in ancient mode, classical names, unchanged and herd
//! nouns, nationality invariants, then the singular suffix cascade. Words no
//! step matches come back unchanged.
//!
//! # Invariants
//!
//! 1. **Totality**: every operation accepts any string; the empty string maps
//!    to itself.
//! 2. **Linearizable**: readers take the shared lock, mutators the exclusive
//!    one. A reader sees either all of a mutation or none of it.
//! 3. **Isolation**: a clone shares no mutable state with its source; only the
//!    compiled [`SuffixCascade`] is shared.
//!
//! # Example
//!
//! ```
//! use inflect::Engine;
//!
//! let engine = Engine::new();
//! assert_eq!(engine.plural("child"), "children");
//! assert_eq!(engine.singular("Boxes"), "Box");
//!
//! engine.classical_ancient(true);
//! assert_eq!(engine.plural("formula"), "formulae");
//!
//! engine.def_noun("child", "childs");
//! assert_eq!(engine.plural("child"), "childs");
//! assert!(!engine.undef_noun("child"));
//! engine.reset();
//! assert_eq!(engine.plural("child"), "children");
//! ```

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::case::{CasePattern, match_suffix};
use crate::classical::{ClassicalFlags, ClassicalMode};
use crate::error::{InflectError, Result};
use crate::registry::NounTable;
use crate::rules::{PluralRule, SingularRule, SuffixCascade};
use crate::tables::{IrregularTable, is_herd, is_nationality, is_unchanged};

/// Which precedence step answered a plural lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralStep {
    ClassicalNames,
    ClassicalAncient,
    ClassicalPersons,
    NounTable,
    Unchanged,
    Herd,
    Nationality,
    Suffix(PluralRule),
}

impl fmt::Display for PluralStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassicalNames => f.write_str("classical-names"),
            Self::ClassicalAncient => f.write_str("classical-ancient"),
            Self::ClassicalPersons => f.write_str("classical-persons"),
            Self::NounTable => f.write_str("noun-table"),
            Self::Unchanged => f.write_str("unchanged"),
            Self::Herd => f.write_str("herd"),
            Self::Nationality => f.write_str("nationality"),
            Self::Suffix(rule) => write!(f, "suffix:{rule}"),
        }
    }
}

/// Which precedence step answered a singular lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingularStep {
    ClassicalNames,
    NounTable,
    ClassicalAncient,
    Unchanged,
    Herd,
    Nationality,
    Suffix(SingularRule),
    /// No step matched; the word is returned as given.
    Fallthrough,
}

impl fmt::Display for SingularStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassicalNames => f.write_str("classical-names"),
            Self::NounTable => f.write_str("noun-table"),
            Self::ClassicalAncient => f.write_str("classical-ancient"),
            Self::Unchanged => f.write_str("unchanged"),
            Self::Herd => f.write_str("herd"),
            Self::Nationality => f.write_str("nationality"),
            Self::Suffix(rule) => write!(f, "suffix:{rule}"),
            Self::Fallthrough => f.write_str("fallthrough"),
        }
    }
}

/// How two nouns relate, as reported by [`Engine::compare_nouns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NounComparison {
    /// Same word, ignoring case.
    Equal,
    /// The second word is the plural of the first.
    SingularToPlural,
    /// The first word is the plural of the second.
    PluralToSingular,
    /// Both are plurals of the same singular.
    PluralToPlural,
}

/// Mutable state guarded by the engine lock.
#[derive(Debug, Clone, Default)]
struct EngineState {
    nouns: NounTable,
    classical: ClassicalFlags,
}

/// Noun inflection engine with its own overrides and classical policy.
#[derive(Debug)]
pub struct Engine {
    state: RwLock<EngineState>,
    rules: Arc<SuffixCascade>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Engine {
    fn clone(&self) -> Self {
        let state = self.read().clone();
        tracing::debug!(overrides = state.nouns.override_count(), "engine cloned");
        Self {
            state: RwLock::new(state),
            rules: Arc::clone(&self.rules),
        }
    }
}

impl Engine {
    /// Fresh engine: built-in table, no overrides, every classical mode off.
    #[must_use]
    pub fn new() -> Self {
        Self::with_classical(ClassicalFlags::new())
    }

    /// Fresh engine with the given classical policy.
    #[must_use]
    pub fn with_classical(classical: ClassicalFlags) -> Self {
        Self {
            state: RwLock::new(EngineState {
                nouns: NounTable::new(),
                classical,
            }),
            rules: SuffixCascade::shared(),
        }
    }

    /// Fresh engine configured from `INFLECT_CLASSICAL` via a custom lookup.
    pub fn from_env_with<F>(get_env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let classical = ClassicalFlags::from_env_with(get_env)?;
        tracing::debug!(?classical, "engine configured from environment");
        Ok(Self::with_classical(classical))
    }

    /// Fresh engine configured from the process environment.
    pub fn from_env() -> Result<Self> {
        let classical = ClassicalFlags::from_env()?;
        tracing::debug!(?classical, "engine configured from environment");
        Ok(Self::with_classical(classical))
    }

    fn read(&self) -> RwLockReadGuard<'_, EngineState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EngineState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -----------------------------------------------------------------
    // Inflection
    // -----------------------------------------------------------------

    /// Plural form of `word` with its case pattern reapplied.
    ///
    /// Multi-word input is inflected on its trailing characters.
    #[must_use]
    pub fn plural(&self, word: &str) -> String {
        let (step, plural) = self.resolve_plural(word);
        tracing::trace!(word, %step, "plural resolved");
        plural
    }

    /// Plural of `word` with the step that produced it.
    #[must_use]
    pub fn resolve_plural(&self, word: &str) -> (PluralStep, String) {
        self.resolve_plural_in(&self.read(), word)
    }

    fn resolve_plural_in(&self, state: &EngineState, word: &str) -> (PluralStep, String) {
        if word.is_empty() {
            return (PluralStep::Unchanged, String::new());
        }
        let flags = state.classical;
        let pattern = CasePattern::of(word);
        let lower = word.to_lowercase();

        if flags.get(ClassicalMode::Names) && pattern.is_proper_name() && lower.ends_with('s') {
            return (PluralStep::ClassicalNames, word.to_string());
        }
        if flags.ancient_active()
            && let Some(plural) = IrregularTable::classical().plural_of(&lower)
        {
            return (PluralStep::ClassicalAncient, pattern.apply(plural));
        }
        if flags.get(ClassicalMode::Persons) && lower == "person" {
            return (
                PluralStep::ClassicalPersons,
                format!("{word}{}", match_suffix(word, "s")),
            );
        }
        if let Some(plural) = state.nouns.plural_of(&lower) {
            return (PluralStep::NounTable, pattern.apply(plural));
        }

        if is_unchanged(&lower) {
            return (PluralStep::Unchanged, word.to_string());
        }
        if flags.get(ClassicalMode::Herd) && is_herd(&lower) {
            return (PluralStep::Herd, word.to_string());
        }
        if is_nationality(&lower) {
            return (PluralStep::Nationality, word.to_string());
        }
        let (rule, plural) = self.rules.pluralize(word);
        (PluralStep::Suffix(rule), plural)
    }

    /// Best-effort singular form of `word` with its case pattern reapplied.
    ///
    /// Not a guaranteed inverse of [`plural`](Self::plural).
    #[must_use]
    pub fn singular(&self, word: &str) -> String {
        let (step, singular) = self.resolve_singular(word);
        tracing::trace!(word, %step, "singular resolved");
        singular
    }

    /// Singular of `word` with the step that produced it.
    #[must_use]
    pub fn resolve_singular(&self, word: &str) -> (SingularStep, String) {
        if word.is_empty() {
            return (SingularStep::Fallthrough, String::new());
        }
        let state = self.read();
        let flags = state.classical;
        let pattern = CasePattern::of(word);
        let lower = word.to_lowercase();

        if let Some(singular) = state.nouns.singular_of(&lower) {
            return (SingularStep::NounTable, pattern.apply(singular));
        }
        drop(state);

        if flags.ancient_active()
            && let Some(singular) = IrregularTable::classical().singular_of(&lower)
        {
            return (SingularStep::ClassicalAncient, pattern.apply(singular));
        }
        // Names only pin words no table knows as a plural.
        if flags.get(ClassicalMode::Names) && pattern.is_proper_name() && lower.ends_with('s') {
            return (SingularStep::ClassicalNames, word.to_string());
        }
        if is_unchanged(&lower) {
            return (SingularStep::Unchanged, word.to_string());
        }
        if is_herd(&lower) {
            return (SingularStep::Herd, word.to_string());
        }
        if is_nationality(&lower) {
            return (SingularStep::Nationality, word.to_string());
        }
        match self.rules.singularize(word) {
            Some((rule, singular)) => (SingularStep::Suffix(rule), singular),
            None => (SingularStep::Fallthrough, word.to_string()),
        }
    }

    /// Noun form for a count: unchanged for one, plural otherwise.
    ///
    /// A zero count keeps the singular when classical zero mode is on.
    #[must_use]
    pub fn plural_for_count(&self, word: &str, count: i64) -> String {
        let state = self.read();
        let keep_singular = match count {
            1 | -1 => true,
            0 => state.classical.get(ClassicalMode::Zero),
            _ => false,
        };
        if keep_singular {
            return word.to_string();
        }
        let (step, plural) = self.resolve_plural_in(&state, word);
        tracing::trace!(word, count, %step, "plural resolved");
        plural
    }

    /// Relate two nouns, ignoring case.
    ///
    /// Checks in order: equal, `b` is the plural of `a`, `a` is the plural of
    /// `b`, both are plurals of one singular.
    #[must_use]
    pub fn compare_nouns(&self, a: &str, b: &str) -> Option<NounComparison> {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        if a == b {
            return Some(NounComparison::Equal);
        }
        if self.plural(&a) == b {
            return Some(NounComparison::SingularToPlural);
        }
        if self.plural(&b) == a {
            return Some(NounComparison::PluralToSingular);
        }
        let singular_a = self.singular(&a);
        if singular_a != a && singular_a == self.singular(&b) {
            return Some(NounComparison::PluralToPlural);
        }
        None
    }

    // -----------------------------------------------------------------
    // Classical policy
    // -----------------------------------------------------------------

    /// Write one classical mode.
    pub fn set_classical(&self, mode: ClassicalMode, enabled: bool) {
        self.write().classical.set(mode, enabled);
        tracing::debug!(%mode, enabled, "classical mode set");
    }

    /// Snapshot of the classical policy.
    #[must_use]
    pub fn classical_flags(&self) -> ClassicalFlags {
        self.read().classical
    }

    /// Read one classical mode. `All` is the derived aggregate.
    #[must_use]
    pub fn is_classical(&self, mode: ClassicalMode) -> bool {
        self.read().classical.get(mode)
    }

    /// Enable or disable every classical mode at once.
    pub fn classical_all(&self, enabled: bool) {
        self.set_classical(ClassicalMode::All, enabled);
    }

    /// Zero counts take the singular.
    pub fn classical_zero(&self, enabled: bool) {
        self.set_classical(ClassicalMode::Zero, enabled);
    }

    /// Herd animals keep an unchanged plural.
    pub fn classical_herd(&self, enabled: bool) {
        self.set_classical(ClassicalMode::Herd, enabled);
    }

    /// Proper names ending in `s` keep an unchanged plural.
    pub fn classical_names(&self, enabled: bool) {
        self.set_classical(ClassicalMode::Names, enabled);
    }

    /// Latin/Greek plurals.
    pub fn classical_ancient(&self, enabled: bool) {
        self.set_classical(ClassicalMode::Ancient, enabled);
    }

    /// Legacy alias of [`classical_ancient`](Self::classical_ancient).
    pub fn classical_latin(&self, enabled: bool) {
        self.classical_ancient(enabled);
    }

    /// `person` pluralizes to "persons".
    pub fn classical_persons(&self, enabled: bool) {
        self.set_classical(ClassicalMode::Persons, enabled);
    }

    /// Stored aggregate AND every sub-flag.
    #[must_use]
    pub fn is_classical_all(&self) -> bool {
        self.is_classical(ClassicalMode::All)
    }

    #[must_use]
    pub fn is_classical_zero(&self) -> bool {
        self.is_classical(ClassicalMode::Zero)
    }

    #[must_use]
    pub fn is_classical_herd(&self) -> bool {
        self.is_classical(ClassicalMode::Herd)
    }

    #[must_use]
    pub fn is_classical_names(&self) -> bool {
        self.is_classical(ClassicalMode::Names)
    }

    #[must_use]
    pub fn is_classical_ancient(&self) -> bool {
        self.is_classical(ClassicalMode::Ancient)
    }

    /// Legacy alias of [`is_classical_ancient`](Self::is_classical_ancient).
    #[must_use]
    pub fn is_classical_latin(&self) -> bool {
        self.read().classical.legacy()
    }

    #[must_use]
    pub fn is_classical_persons(&self) -> bool {
        self.is_classical(ClassicalMode::Persons)
    }

    // -----------------------------------------------------------------
    // Overrides
    // -----------------------------------------------------------------

    /// Register a noun, shadowing any built-in with the same singular.
    pub fn def_noun(&self, singular: &str, plural: &str) {
        let shadows_builtin = self.write().nouns.define(singular, plural);
        tracing::debug!(singular, plural, shadows_builtin, "noun override registered");
    }

    /// [`def_noun`](Self::def_noun) that rejects empty words.
    pub fn try_def_noun(&self, singular: &str, plural: &str) -> Result<()> {
        if singular.trim().is_empty() || plural.trim().is_empty() {
            return Err(InflectError::EmptyNoun);
        }
        self.def_noun(singular, plural);
        Ok(())
    }

    /// Remove a user-added noun. Returns `false` for unknown and built-in
    /// singulars, which stay in effect.
    pub fn undef_noun(&self, singular: &str) -> bool {
        let removed = self.write().nouns.undefine(singular);
        tracing::debug!(singular, removed, "noun override removed");
        removed
    }

    /// Whether `singular` currently carries a user override.
    #[must_use]
    pub fn is_user_defined(&self, singular: &str) -> bool {
        self.read().nouns.is_user_defined(singular)
    }

    /// Number of user overrides in effect.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.read().nouns.override_count()
    }

    /// Discard every override and restore the built-in table.
    ///
    /// The classical policy is left as is.
    pub fn reset(&self) {
        self.write().nouns.reset();
        tracing::debug!("noun table reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn empty_in_empty_out() {
        let engine = Engine::new();
        assert_eq!(engine.plural(""), "");
        assert_eq!(engine.singular(""), "");
    }

    #[test]
    fn end_to_end_basics() {
        let engine = Engine::new();
        assert_eq!(engine.plural("cat"), "cats");
        assert_eq!(engine.plural("box"), "boxes");
        assert_eq!(engine.plural("child"), "children");
        assert_eq!(engine.singular("children"), "child");
    }

    #[test]
    fn table_lookup_projects_case() {
        let engine = Engine::new();
        assert_eq!(engine.plural("Child"), "Children");
        assert_eq!(engine.plural("CHILD"), "CHILDREN");
        assert_eq!(engine.singular("PEOPLE"), "PERSON");
    }

    #[test]
    fn classical_names() {
        let engine = Engine::new();
        assert_eq!(engine.plural("Jones"), "Joneses");
        engine.classical_names(true);
        assert_eq!(engine.plural("Jones"), "Jones");
        assert_eq!(engine.singular("Jones"), "Jones");
        // All-uppercase is not a proper name.
        assert_eq!(engine.plural("JONES"), "JONESES");
        engine.classical_names(false);
        assert_eq!(engine.plural("Jones"), "Joneses");
    }

    #[test]
    fn names_mode_keeps_table_plurals_invertible() {
        let engine = Engine::new();
        engine.classical_names(true);
        engine.def_noun("kiddo", "kiddos");
        assert_eq!(engine.singular("Axes"), "Axis");
        assert_eq!(engine.singular("Quizzes"), "Quiz");
        assert_eq!(engine.singular("Analyses"), "Analysis");
        assert_eq!(engine.singular("Kiddos"), "Kiddo");
        assert_eq!(engine.resolve_singular("Kiddos").0, SingularStep::NounTable);
        assert_eq!(engine.resolve_singular("Jones").0, SingularStep::ClassicalNames);
    }

    #[test]
    fn classical_ancient() {
        let engine = Engine::new();
        assert_eq!(engine.plural("formula"), "formulas");
        engine.classical_ancient(true);
        assert_eq!(engine.plural("formula"), "formulae");
        assert_eq!(engine.plural("Index"), "Indices");
        assert_eq!(engine.singular("formulae"), "formula");
        assert_eq!(
            engine.resolve_plural("formula").0,
            PluralStep::ClassicalAncient
        );
    }

    #[test]
    fn classical_latin_alias() {
        let engine = Engine::new();
        engine.classical_latin(true);
        assert!(engine.is_classical_ancient());
        assert!(engine.is_classical_latin());
        assert_eq!(engine.plural("cactus"), "cacti");
        engine.classical_ancient(false);
        assert!(!engine.is_classical_latin());
    }

    #[test]
    fn ancient_does_not_imply_persons() {
        let engine = Engine::new();
        engine.classical_ancient(true);
        assert_eq!(engine.plural("person"), "people");
        engine.classical_persons(true);
        assert_eq!(engine.plural("person"), "persons");
        assert_eq!(engine.plural("Person"), "Persons");
        assert_eq!(engine.singular("persons"), "person");
    }

    #[test]
    fn herd_mode() {
        let engine = Engine::new();
        assert_eq!(engine.plural("buffalo"), "buffaloes");
        assert_eq!(engine.plural("wildebeest"), "wildebeests");
        engine.classical_herd(true);
        assert_eq!(engine.plural("buffalo"), "buffalo");
        assert_eq!(engine.resolve_plural("elk").0, PluralStep::Herd);
    }

    #[test]
    fn unchanged_and_nationality() {
        let engine = Engine::new();
        assert_eq!(engine.plural("sheep"), "sheep");
        assert_eq!(engine.plural("Series"), "Series");
        assert_eq!(engine.singular("news"), "news");
        assert_eq!(engine.plural("Chinese"), "Chinese");
        assert_eq!(engine.plural("Iroquois"), "Iroquois");
        assert_eq!(engine.plural("cheese"), "cheeses");
    }

    #[test]
    fn classical_all_then_single_toggle() {
        let engine = Engine::new();
        engine.classical_all(true);
        assert!(engine.is_classical_all());
        engine.classical_ancient(false);
        assert!(engine.is_classical_zero());
        assert!(engine.is_classical_herd());
        assert!(engine.is_classical_names());
        assert!(engine.is_classical_persons());
        assert!(!engine.is_classical_ancient());
        assert!(!engine.is_classical_all());
        assert!(engine.classical_flags().stored_all());
    }

    #[test]
    fn override_lifecycle() {
        let engine = Engine::new();
        engine.def_noun("child", "childs");
        assert_eq!(engine.plural("child"), "childs");
        assert_eq!(engine.singular("childs"), "child");
        assert!(!engine.undef_noun("child"));
        assert_eq!(engine.plural("child"), "childs");
        engine.reset();
        assert_eq!(engine.plural("child"), "children");
        assert_eq!(engine.singular("children"), "child");
    }

    #[test]
    fn override_beats_unchanged_set() {
        let engine = Engine::new();
        engine.def_noun("sheep", "sheeps");
        assert_eq!(engine.plural("Sheep"), "Sheeps");
        assert!(engine.is_user_defined("sheep"));
        assert!(engine.undef_noun("sheep"));
        assert_eq!(engine.plural("sheep"), "sheep");
    }

    #[test]
    fn reset_keeps_classical_policy() {
        let engine = Engine::new();
        engine.classical_herd(true);
        engine.def_noun("kiddo", "kiddos");
        engine.reset();
        assert!(engine.is_classical_herd());
        assert_eq!(engine.override_count(), 0);
    }

    #[test]
    fn try_def_noun_rejects_empty() {
        let engine = Engine::new();
        assert_eq!(engine.try_def_noun("", "x"), Err(InflectError::EmptyNoun));
        assert_eq!(engine.try_def_noun("x", "  "), Err(InflectError::EmptyNoun));
        assert_eq!(engine.override_count(), 0);
        assert_eq!(engine.try_def_noun("kiddo", "kiddos"), Ok(()));
        assert_eq!(engine.plural("kiddo"), "kiddos");
    }

    #[test]
    fn clone_is_independent() {
        let engine = Engine::new();
        engine.def_noun("kiddo", "kiddos");
        engine.classical_names(true);

        let copy = engine.clone();
        assert_eq!(copy.plural("kiddo"), "kiddos");
        assert!(copy.is_classical_names());

        copy.def_noun("kiddo", "kiddoes");
        copy.classical_names(false);
        engine.def_noun("pal", "pals");

        assert_eq!(engine.plural("kiddo"), "kiddos");
        assert!(engine.is_classical_names());
        assert_eq!(copy.plural("kiddo"), "kiddoes");
        assert!(!copy.is_user_defined("pal"));
        assert!(Arc::ptr_eq(&engine.rules, &copy.rules));
    }

    #[test]
    fn plural_for_count() {
        let engine = Engine::new();
        assert_eq!(engine.plural_for_count("error", 1), "error");
        assert_eq!(engine.plural_for_count("error", -1), "error");
        assert_eq!(engine.plural_for_count("error", 2), "errors");
        assert_eq!(engine.plural_for_count("error", 0), "errors");
        engine.classical_zero(true);
        assert_eq!(engine.plural_for_count("error", 0), "error");
    }

    #[test]
    fn compare_nouns() {
        let engine = Engine::new();
        assert_eq!(engine.compare_nouns("cat", "CAT"), Some(NounComparison::Equal));
        assert_eq!(
            engine.compare_nouns("child", "children"),
            Some(NounComparison::SingularToPlural)
        );
        assert_eq!(
            engine.compare_nouns("Boxes", "box"),
            Some(NounComparison::PluralToSingular)
        );
        assert_eq!(
            engine.compare_nouns("cities", "CITIES"),
            Some(NounComparison::Equal)
        );
        assert_eq!(
            engine.compare_nouns("policemen", "policemans"),
            Some(NounComparison::PluralToPlural)
        );
        assert_eq!(engine.compare_nouns("cat", "dog"), None);
    }

    #[test]
    fn resolve_reports_steps() {
        let engine = Engine::new();
        assert_eq!(engine.resolve_plural("child").0, PluralStep::NounTable);
        assert_eq!(
            engine.resolve_plural("box").0,
            PluralStep::Suffix(PluralRule::Sibilant)
        );
        assert_eq!(
            engine.resolve_singular("boxes").0,
            SingularStep::Suffix(SingularRule::StripEs)
        );
        assert_eq!(engine.resolve_singular("cat").0, SingularStep::Fallthrough);
        assert_eq!(PluralStep::Suffix(PluralRule::AppendS).to_string(), "suffix:append-s");
    }

    #[test]
    fn env_configuration() {
        let engine = Engine::from_env_with(|key| {
            (key == crate::classical::CLASSICAL_ENV).then(|| "herd,names".to_string())
        })
        .unwrap();
        assert!(engine.is_classical_herd());
        assert!(engine.is_classical_names());
        assert!(!engine.is_classical_all());

        let err = Engine::from_env_with(|_| Some("nope".into())).unwrap_err();
        assert_eq!(err, InflectError::UnknownClassicalMode("nope".into()));
    }

    #[test]
    fn from_env_reads_the_process_environment() {
        let expected = ClassicalFlags::from_env_with(|key| std::env::var(key).ok());
        match (Engine::from_env(), expected) {
            (Ok(engine), Ok(flags)) => assert_eq!(engine.classical_flags(), flags),
            (Err(err), Err(expected)) => assert_eq!(err, expected),
            (engine, flags) => panic!("from_env diverged: {engine:?} vs {flags:?}"),
        }
    }

    #[traced_test]
    #[test]
    fn mutations_are_logged() {
        let engine = Engine::new();
        engine.def_noun("child", "childs");
        engine.undef_noun("kiddo");
        engine.classical_herd(true);
        engine.reset();
        assert!(logs_contain("noun override registered"));
        assert!(logs_contain("shadows_builtin=true"));
        assert!(logs_contain("noun override removed"));
        assert!(logs_contain("classical mode set"));
        assert!(logs_contain("noun table reset"));
    }

    #[traced_test]
    #[test]
    fn resolution_is_traced() {
        let engine = Engine::new();
        let _ = engine.plural("box");
        assert!(logs_contain("plural resolved"));
        assert!(logs_contain("suffix:sibilant"));
    }
}
