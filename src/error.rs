//! Errors raised when an adapter hands the picker something it does not
//! recognize.

/// Errors for structural misuse at the adapter boundary.
///
/// User input never produces an error; malformed values are normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A field tag that names none of the picker's inputs.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A class name that marks none of the picker's hit targets.
    #[error("unknown target class '{0}'")]
    UnknownClass(String),
}

/// Result type used by the adapter-facing parsers.
pub type Result<T> = std::result::Result<T, Error>;
