#![forbid(unsafe_code)]

//! Case projection for inflected words.
//!
//! Matching always happens on a lowercase channel; the caller's original
//! capitalization is tracked separately as a [`CasePattern`] and reapplied to
//! the computed result.
//!
//! Two operations are kept apart on purpose:
//!
//! - [`match_case`] projects the whole-word pattern onto a replacement word
//!   (used for table substitutions such as `Child -> Children`).
//! - [`match_suffix`] only decides the case of an appended suffix, leaving the
//!   caller's stem untouched (used where the result is `stem + suffix`).
//!
//! They differ on mixed-morpheme results: a stem kept as typed next to a suffix
//! that follows the whole-word uppercase rule.

use std::borrow::Cow;

/// Capitalization pattern of an input word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// Exactly one character.
    SingleLetter {
        /// Whether that character is uppercase.
        upper: bool,
    },
    /// Two or more characters, at least one uppercase and none lowercase.
    AllUpper,
    /// Starts with an uppercase character but is not all-uppercase.
    Capitalized,
    /// Anything else, including the empty string.
    Other,
}

impl CasePattern {
    /// Classify `word`.
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return Self::Other;
        };
        if chars.as_str().is_empty() {
            return Self::SingleLetter {
                upper: first.is_uppercase(),
            };
        }
        if word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase) {
            Self::AllUpper
        } else if first.is_uppercase() {
            Self::Capitalized
        } else {
            Self::Other
        }
    }

    /// Reapply this pattern to a whole replacement word.
    #[must_use]
    pub fn apply(self, replacement: &str) -> String {
        match self {
            Self::SingleLetter { upper: true } | Self::Capitalized => capitalize_first(replacement),
            Self::AllUpper => replacement.to_uppercase(),
            Self::SingleLetter { upper: false } | Self::Other => replacement.to_string(),
        }
    }

    /// Whether a word with this pattern reads as a proper name
    /// (capitalized, not all-uppercase).
    #[inline]
    #[must_use]
    pub const fn is_proper_name(self) -> bool {
        matches!(self, Self::Capitalized | Self::SingleLetter { upper: true })
    }
}

/// Project `original`'s capitalization onto `replacement`.
///
/// | `original`            | result                                    |
/// |-----------------------|-------------------------------------------|
/// | single letter         | first letter upper-cased iff original was |
/// | all-uppercase (2+)    | `replacement` fully upper-cased           |
/// | starts uppercase      | first character upper-cased               |
/// | otherwise             | `replacement` unchanged                   |
#[must_use]
pub fn match_case(original: &str, replacement: &str) -> String {
    CasePattern::of(original).apply(replacement)
}

/// Case an appended `suffix` to fit `original`.
///
/// Only an all-uppercase `original` changes the suffix; the stem the caller
/// concatenates it with is never touched.
#[must_use]
pub fn match_suffix<'a>(original: &str, suffix: &'a str) -> Cow<'a, str> {
    if CasePattern::of(original) == CasePattern::AllUpper {
        Cow::Owned(suffix.to_uppercase())
    } else {
        Cow::Borrowed(suffix)
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
