use serde::Serialize;

/// Errors that can occur during interpolation operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub enum InterpolationError {
    /// An argument failed validation
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// The name of the offending argument
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// An entry index was outside the bounds of a composite
    #[error("Index {index} is out of range for {len} entries")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The number of entries
        len: usize,
    },
}

impl InterpolationError {
    /// Create a new invalid argument error
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// The name of the rejected argument, if this is a validation error
    pub fn argument_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { name, .. } => Some(name),
            _ => None,
        }
    }
}
