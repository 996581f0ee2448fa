#![forbid(unsafe_code)]

//! Classical-mode policy flags.
//!
//! Six independently toggleable modes select Latin/Greek-influenced
//! conventions over modern English ones. A seventh, legacy bit mirrors
//! `ancient` and is kept in lockstep with it.
//!
//! # Invariants
//!
//! 1. **Aggregate cascade**: `set(All, v)` writes `v` to all six flags and the
//!    legacy bit in one step.
//! 2. **Stored aggregate does not re-derive**: toggling a single mode after
//!    `set(All, true)` leaves the stored `all` bit as it was.
//!    [`ClassicalFlags::is_all`] reads the conjunction of the stored bit and
//!    the five sub-flags, so it still reports `false` after any sub-flag is
//!    cleared, and reports `false` when the sub-flags were all enabled one
//!    by one without going through `All`.
//! 3. **Legacy lockstep**: every write to `ancient` writes the legacy bit too.
//!
//! # Configuration
//!
//! [`ClassicalFlags::from_env_with`] reads `INFLECT_CLASSICAL`, a
//! comma-separated list of mode names applied left to right. A leading `-` or
//! `!` disables the named mode:
//!
//! ```
//! use inflect::classical::{ClassicalFlags, ClassicalMode};
//!
//! let flags = ClassicalFlags::from_env_with(|key| {
//!     (key == "INFLECT_CLASSICAL").then(|| "all, -herd".to_string())
//! })
//! .unwrap();
//! assert!(flags.get(ClassicalMode::Ancient));
//! assert!(!flags.get(ClassicalMode::Herd));
//! assert!(!flags.is_all());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{InflectError, Result};

/// Environment variable consulted by [`ClassicalFlags::from_env_with`].
pub const CLASSICAL_ENV: &str = "INFLECT_CLASSICAL";

/// One classical-mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassicalMode {
    /// Aggregate: sets or clears every other mode.
    All,
    /// Zero counts take the singular ("no error" rather than "no errors").
    Zero,
    /// Herd animals keep an unchanged plural ("two buffalo").
    Herd,
    /// Proper names ending in `s` keep an unchanged plural ("the Jones").
    Names,
    /// Latin/Greek plurals ("formulae", "indices").
    Ancient,
    /// `person` pluralizes to "persons" rather than "people".
    Persons,
}

impl ClassicalMode {
    /// Every mode, aggregate first.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Zero,
        Self::Herd,
        Self::Names,
        Self::Ancient,
        Self::Persons,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Zero => "zero",
            Self::Herd => "herd",
            Self::Names => "names",
            Self::Ancient => "ancient",
            Self::Persons => "persons",
        }
    }
}

impl fmt::Display for ClassicalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClassicalMode {
    type Err = InflectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "classical" => Ok(Self::All),
            "zero" => Ok(Self::Zero),
            "herd" => Ok(Self::Herd),
            "names" => Ok(Self::Names),
            "ancient" | "latin" => Ok(Self::Ancient),
            "persons" => Ok(Self::Persons),
            _ => Err(InflectError::UnknownClassicalMode(s.trim().to_string())),
        }
    }
}

/// Snapshot of the classical policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicalFlags {
    all: bool,
    zero: bool,
    herd: bool,
    names: bool,
    ancient: bool,
    persons: bool,
    legacy: bool,
}

impl ClassicalFlags {
    /// Every mode off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            all: false,
            zero: false,
            herd: false,
            names: false,
            ancient: false,
            persons: false,
            legacy: false,
        }
    }

    /// Every mode on, as after `set(All, true)`.
    #[must_use]
    pub const fn classical() -> Self {
        Self {
            all: true,
            zero: true,
            herd: true,
            names: true,
            ancient: true,
            persons: true,
            legacy: true,
        }
    }

    /// Write one mode. `All` cascades to every other mode.
    pub fn set(&mut self, mode: ClassicalMode, enabled: bool) {
        match mode {
            ClassicalMode::All => {
                *self = if enabled {
                    Self::classical()
                } else {
                    Self::new()
                };
            }
            ClassicalMode::Zero => self.zero = enabled,
            ClassicalMode::Herd => self.herd = enabled,
            ClassicalMode::Names => self.names = enabled,
            ClassicalMode::Ancient => {
                self.ancient = enabled;
                self.legacy = enabled;
            }
            ClassicalMode::Persons => self.persons = enabled,
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, mode: ClassicalMode, enabled: bool) -> Self {
        self.set(mode, enabled);
        self
    }

    /// Read one mode. `All` reads the derived aggregate, see [`is_all`](Self::is_all).
    #[must_use]
    pub const fn get(&self, mode: ClassicalMode) -> bool {
        match mode {
            ClassicalMode::All => self.is_all(),
            ClassicalMode::Zero => self.zero,
            ClassicalMode::Herd => self.herd,
            ClassicalMode::Names => self.names,
            ClassicalMode::Ancient => self.ancient,
            ClassicalMode::Persons => self.persons,
        }
    }

    /// Conjunction of the stored aggregate bit and all five sub-flags.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        self.all && self.zero && self.herd && self.names && self.ancient && self.persons
    }

    /// The stored aggregate bit, which may disagree with the sub-flags.
    #[must_use]
    pub const fn stored_all(&self) -> bool {
        self.all
    }

    /// Whether Latin/Greek lookups apply (`ancient` or its legacy alias).
    #[inline]
    #[must_use]
    pub const fn ancient_active(&self) -> bool {
        self.ancient || self.legacy
    }

    /// The legacy alias of `ancient`.
    #[must_use]
    pub const fn legacy(&self) -> bool {
        self.legacy
    }

    /// Parse a comma-separated mode list on top of `self`.
    ///
    /// Empty items are skipped; `-name` or `!name` disables a mode.
    pub fn apply_list(&mut self, list: &str) -> Result<()> {
        for item in list.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let (enabled, name) = match item.strip_prefix(['-', '!']) {
                Some(rest) => (false, rest),
                None => (true, item),
            };
            self.set(name.parse()?, enabled);
        }
        Ok(())
    }

    /// Build flags from [`CLASSICAL_ENV`] using a custom environment lookup.
    ///
    /// An unset variable yields every mode off.
    pub fn from_env_with<F>(get_env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut flags = Self::new();
        if let Some(list) = get_env(CLASSICAL_ENV) {
            flags.apply_list(&list)?;
        }
        Ok(flags)
    }

    /// Build flags from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }
}
