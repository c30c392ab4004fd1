//! Error types for compound argument handling.

use thiserror::Error;

use crate::descriptor::{ArgKind, CompoundType};

/// A specialized Result type for compound argument operations.
pub type CompoundResult<T> = Result<T, CompoundError>;

/// Errors raised while building, reading, or dispatching compound values.
///
/// Every error is raised at the point of detection and propagated to the
/// direct caller; nothing is retried or defaulted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompoundError {
    /// A required argument was not supplied when building a compound value.
    #[error("Invalid argument bundle for '{key}': missing required argument '{name}' of type {expected}")]
    RequiredArgumentMissing {
        /// Key of the descriptor being built against.
        key: String,
        /// Name of the missing argument.
        name: String,
        /// The declared argument type.
        expected: ArgKind,
    },

    /// A supplied value's type does not match the declared argument type.
    #[error("Invalid argument '{name}' for '{key}': declared {expected}, supplied {actual}")]
    ArgumentTypeMismatch {
        /// Key of the descriptor being built against.
        key: String,
        /// Name of the offending argument.
        name: String,
        /// The declared argument type.
        expected: ArgKind,
        /// The type of the supplied value.
        actual: ArgKind,
    },

    /// A value was supplied for a name the descriptor does not declare.
    #[error("Unknown argument '{name}' is not declared on '{key}'")]
    UnknownArgument {
        /// Key of the descriptor being built against.
        key: String,
        /// The undeclared name.
        name: String,
    },

    /// A getter was called for a name absent from the value.
    #[error("Missing argument '{name}'")]
    MissingArgument {
        /// The absent name.
        name: String,
    },

    /// A getter was called with a type incompatible with the stored value.
    #[error("Type mismatch for argument '{name}': requested {requested}, stored {stored}")]
    TypeMismatch {
        /// Name of the argument.
        name: String,
        /// The requested type.
        requested: ArgKind,
        /// The type of the stored value.
        stored: ArgKind,
    },

    /// A function received a value built against a different descriptor.
    #[error("Invalid input type: required {expected}, but was {actual}")]
    InvalidInputType {
        /// The descriptor the function requires.
        expected: Box<CompoundType>,
        /// The descriptor the value was built against.
        actual: Box<CompoundType>,
    },
}

impl CompoundError {
    /// Creates a missing required argument error.
    #[must_use]
    pub fn required_argument_missing(
        key: impl Into<String>,
        name: impl Into<String>,
        expected: ArgKind,
    ) -> Self {
        Self::RequiredArgumentMissing {
            key: key.into(),
            name: name.into(),
            expected,
        }
    }

    /// Creates an argument type mismatch error.
    #[must_use]
    pub fn argument_type_mismatch(
        key: impl Into<String>,
        name: impl Into<String>,
        expected: ArgKind,
        actual: ArgKind,
    ) -> Self {
        Self::ArgumentTypeMismatch {
            key: key.into(),
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Creates an unknown argument error.
    #[must_use]
    pub fn unknown_argument(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownArgument {
            key: key.into(),
            name: name.into(),
        }
    }

    /// Creates a missing argument error.
    #[must_use]
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(name: impl Into<String>, requested: ArgKind, stored: ArgKind) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            requested,
            stored,
        }
    }

    /// Creates an invalid input type error carrying both descriptors.
    #[must_use]
    pub fn invalid_input_type(expected: &CompoundType, actual: &CompoundType) -> Self {
        Self::InvalidInputType {
            expected: Box::new(expected.clone()),
            actual: Box::new(actual.clone()),
        }
    }
}
