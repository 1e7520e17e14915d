//! Error types shared by every generator.

use thiserror::Error;

/// Convenience alias used throughout the generator crates.
pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;

/// Errors raised when a generator rejects its input.
///
/// Each variant is a distinct failure kind so callers (and tests) can tell
/// them apart without inspecting messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// A size-dependent generator was invoked without a length.
    #[error("Length not provided: {0}")]
    LengthNotProvided(String),

    /// A provided length is out of bounds.
    #[error("Invalid length: {0}")]
    LengthInvalid(String),

    /// The requested logical type has no mapped generator.
    #[error("Unknown data type: {0}")]
    TypeUnknown(String),

    /// A date or time component is outside its valid range.
    #[error("Invalid date: {0}")]
    DateFieldInvalid(String),

    /// UUID version outside {1, 3, 4, 5}.
    #[error("Invalid UUID version {0}: expected 1, 3, 4 or 5")]
    UuidVersionInvalid(u8),

    /// Name-based UUID requested without a namespace name.
    #[error("Namespace name is required for UUID version {0}")]
    UuidNamespaceMissing(u8),

    /// Generic invalid argument (counts, lengths too short, protocols).
    #[error("Invalid value: {0}")]
    ValueInvalid(String),
}

/// Payload-free tag for a [`GeneratorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    LengthNotProvided,
    LengthInvalid,
    TypeUnknown,
    DateFieldInvalid,
    UuidVersionInvalid,
    UuidNamespaceMissing,
    ValueInvalid,
}

impl GeneratorError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthNotProvided(_) => ErrorKind::LengthNotProvided,
            Self::LengthInvalid(_) => ErrorKind::LengthInvalid,
            Self::TypeUnknown(_) => ErrorKind::TypeUnknown,
            Self::DateFieldInvalid(_) => ErrorKind::DateFieldInvalid,
            Self::UuidVersionInvalid(_) => ErrorKind::UuidVersionInvalid,
            Self::UuidNamespaceMissing(_) => ErrorKind::UuidNamespaceMissing,
            Self::ValueInvalid(_) => ErrorKind::ValueInvalid,
        }
    }

    pub(crate) fn value(msg: impl Into<String>) -> Self {
        Self::ValueInvalid(msg.into())
    }
}
