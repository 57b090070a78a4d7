// License: MIT

use std::fmt;

/// A wire line from the host could not be turned into an event.
///
/// Examples:
/// - `bgin solution build` (unknown kind)
/// - `begin solutoin build` (unknown scope)
/// - `begin solution` (missing field)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// First token is neither `begin` nor `done`.
    UnknownKind(String),

    /// Scope token not in the known set.
    UnknownScope(String),

    /// Action token not in the known set.
    UnknownAction(String),

    /// Line ended before the named field.
    MissingField(&'static str),
}

// ---------------- Display ----------------

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownKind(s) =>
                write!(f, "unknown event kind '{s}'"),
            ParseError::UnknownScope(s) =>
                write!(f, "unknown build scope '{s}'"),
            ParseError::UnknownAction(s) =>
                write!(f, "unknown build action '{s}'"),
            ParseError::MissingField(name) =>
                write!(f, "missing {name}"),
        }
    }
}

impl std::error::Error for ParseError {}
