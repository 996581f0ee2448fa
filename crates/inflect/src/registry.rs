#![forbid(unsafe_code)]

//! User noun overrides layered over the built-in irregular table.
//!
//! # Invariants
//!
//! 1. **Shadowing, not deletion**: an override whose singular matches a
//!    built-in entry hides the built-in for both directions of lookup. The
//!    built-in is restored only by [`NounTable::reset`].
//! 2. **Removal is user-only**: [`NounTable::undefine`] refuses any singular
//!    the built-in baseline knows, even when it is currently shadowed.
//! 3. **Reset is exact**: after `reset` the merged table equals the baseline.
//!
//! # Failure Modes
//!
//! | Call | Condition | Behavior |
//! |------|-----------|----------|
//! | `undefine` | singular is built-in | returns `false`, table untouched |
//! | `undefine` | singular unknown | returns `false` |
//! | `define` | plural already claimed by another singular | reverse lookup moves to the new singular |
//! | `define`/`undefine` | override released a shared plural | reverse lookup falls back to the latest remaining owner |

use rustc_hash::FxHashSet;

use crate::tables::IrregularTable;

/// Merged view of the built-in irregular nouns and user overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounTable {
    merged: IrregularTable,
    user: FxHashSet<String>,
}

impl Default for NounTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NounTable {
    /// A fresh copy of the built-in baseline with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            merged: IrregularTable::builtin().clone(),
            user: FxHashSet::default(),
        }
    }

    /// Plural for a lowercase singular, overrides first.
    #[must_use]
    pub fn plural_of(&self, singular: &str) -> Option<&str> {
        self.merged.plural_of(singular)
    }

    /// Singular for a lowercase plural, overrides first.
    #[must_use]
    pub fn singular_of(&self, plural: &str) -> Option<&str> {
        self.merged.singular_of(plural)
    }

    /// Whether the built-in baseline defines `singular` (lowercase).
    #[must_use]
    pub fn is_builtin(singular: &str) -> bool {
        IrregularTable::builtin().contains(singular)
    }

    /// Whether `singular` (any case) currently carries a user override.
    #[must_use]
    pub fn is_user_defined(&self, singular: &str) -> bool {
        self.user.contains(&singular.to_lowercase())
    }

    /// Number of user overrides in effect.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.user.len()
    }

    /// Register `singular -> plural`, shadowing any built-in entry.
    ///
    /// Returns `true` when a built-in mapping became shadowed.
    pub fn define(&mut self, singular: &str, plural: &str) -> bool {
        let singular = singular.to_lowercase();
        let shadows_builtin = Self::is_builtin(&singular);
        self.merged.insert(&singular, plural);
        self.user.insert(singular);
        shadows_builtin
    }

    /// Remove a user-added override. Built-in singulars are never removed.
    pub fn undefine(&mut self, singular: &str) -> bool {
        let singular = singular.to_lowercase();
        if Self::is_builtin(&singular) || !self.user.remove(&singular) {
            return false;
        }
        self.merged.remove(&singular);
        true
    }

    /// Drop every override and rebuild both maps from the baseline.
    pub fn reset(&mut self) {
        self.merged = IrregularTable::builtin().clone();
        self.user.clear();
    }
}
