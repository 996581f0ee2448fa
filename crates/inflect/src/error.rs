#![forbid(unsafe_code)]

//! Errors for the optional validating layer.
//!
//! The inflection core is total: `plural`, `singular`, and every policy or
//! override mutator accept any input. These errors only surface from the
//! wrappers that parse configuration or validate user-supplied nouns.

/// Errors from inflection configuration and validated registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InflectError {
    /// A classical mode name was not recognized.
    UnknownClassicalMode(String),
    /// A noun override was given an empty singular or plural.
    EmptyNoun,
}

impl std::fmt::Display for InflectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownClassicalMode(name) => write!(f, "unknown classical mode: {name}"),
            Self::EmptyNoun => write!(f, "noun override requires a non-empty singular and plural"),
        }
    }
}

impl std::error::Error for InflectError {}

/// Result alias for the validating layer.
pub type Result<T> = std::result::Result<T, InflectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_bad_mode() {
        let err = InflectError::UnknownClassicalMode("latinish".into());
        assert_eq!(err.to_string(), "unknown classical mode: latinish");
    }

    #[test]
    fn display_empty_noun() {
        assert!(InflectError::EmptyNoun.to_string().contains("non-empty"));
    }
}
