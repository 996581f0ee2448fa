#![forbid(unsafe_code)]

//! Process-wide default engine and free-function API.
//!
//! The default [`Engine`] is created on first use with [`Engine::new`] state
//! and lives for the rest of the process. Every function here delegates to it
//! with exactly the semantics of the same method on a user-built engine.
//!
//! Mutations are global: a test that flips a classical mode or defines a noun
//! here affects every other caller until it undoes the change.

use std::sync::LazyLock;

use crate::engine::{Engine, NounComparison};

static DEFAULT_ENGINE: LazyLock<Engine> = LazyLock::new(Engine::new);

/// The process-wide engine behind the free functions.
#[must_use]
pub fn default_engine() -> &'static Engine {
    &DEFAULT_ENGINE
}

/// See [`Engine::plural`].
#[must_use]
pub fn plural(word: &str) -> String {
    DEFAULT_ENGINE.plural(word)
}

/// See [`Engine::singular`].
#[must_use]
pub fn singular(word: &str) -> String {
    DEFAULT_ENGINE.singular(word)
}

/// See [`Engine::plural_for_count`].
#[must_use]
pub fn plural_for_count(word: &str, count: i64) -> String {
    DEFAULT_ENGINE.plural_for_count(word, count)
}

/// See [`Engine::compare_nouns`].
#[must_use]
pub fn compare_nouns(a: &str, b: &str) -> Option<NounComparison> {
    DEFAULT_ENGINE.compare_nouns(a, b)
}

pub fn classical_all(enabled: bool) {
    DEFAULT_ENGINE.classical_all(enabled);
}

pub fn classical_zero(enabled: bool) {
    DEFAULT_ENGINE.classical_zero(enabled);
}

pub fn classical_herd(enabled: bool) {
    DEFAULT_ENGINE.classical_herd(enabled);
}

pub fn classical_names(enabled: bool) {
    DEFAULT_ENGINE.classical_names(enabled);
}

pub fn classical_ancient(enabled: bool) {
    DEFAULT_ENGINE.classical_ancient(enabled);
}

/// Legacy alias of [`classical_ancient`].
pub fn classical_latin(enabled: bool) {
    DEFAULT_ENGINE.classical_latin(enabled);
}

pub fn classical_persons(enabled: bool) {
    DEFAULT_ENGINE.classical_persons(enabled);
}

#[must_use]
pub fn is_classical_all() -> bool {
    DEFAULT_ENGINE.is_classical_all()
}

#[must_use]
pub fn is_classical_zero() -> bool {
    DEFAULT_ENGINE.is_classical_zero()
}

#[must_use]
pub fn is_classical_herd() -> bool {
    DEFAULT_ENGINE.is_classical_herd()
}

#[must_use]
pub fn is_classical_names() -> bool {
    DEFAULT_ENGINE.is_classical_names()
}

#[must_use]
pub fn is_classical_ancient() -> bool {
    DEFAULT_ENGINE.is_classical_ancient()
}

/// Legacy alias of [`is_classical_ancient`].
#[must_use]
pub fn is_classical_latin() -> bool {
    DEFAULT_ENGINE.is_classical_latin()
}

#[must_use]
pub fn is_classical_persons() -> bool {
    DEFAULT_ENGINE.is_classical_persons()
}

/// See [`Engine::def_noun`].
pub fn def_noun(singular: &str, plural: &str) {
    DEFAULT_ENGINE.def_noun(singular, plural);
}

/// See [`Engine::undef_noun`].
pub fn undef_noun(singular: &str) -> bool {
    DEFAULT_ENGINE.undef_noun(singular)
}

/// See [`Engine::reset`].
pub fn reset() {
    DEFAULT_ENGINE.reset();
}
