//! Errors raised while building or erasing nodes.

use std::fmt;

/// Why a factory rejected its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstructionError {
    /// A type parameter with neither a class bound nor interface bounds.
    EmptyBounds { parameter: String },
    /// A class or simple name that is empty or contains a delimiter.
    InvalidName { name: String, reason: &'static str },
    /// An array dimension outside `1..=255`.
    InvalidDimension { dimension: usize },
    /// `void` used where only a value type is allowed.
    VoidNotAllowed { context: &'static str },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::EmptyBounds { parameter } => {
                write!(f, "type parameter `{parameter}` has no bounds")
            }
            ConstructionError::InvalidName { name, reason } => {
                write!(f, "invalid name `{name}`: {reason}")
            }
            ConstructionError::InvalidDimension { dimension } => {
                write!(f, "array dimension {dimension} is outside 1..=255")
            }
            ConstructionError::VoidNotAllowed { context } => {
                write!(f, "void is not allowed as {context}")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Error from a factory, an erasure, or a binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeError {
    InvalidConstruction(ConstructionError),
    /// A type variable with no binding in scope.
    UnresolvedPlaceholder { name: String },
}

impl TypeError {
    pub(crate) fn unresolved(name: &str) -> Self {
        TypeError::UnresolvedPlaceholder {
            name: name.to_owned(),
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::InvalidConstruction(err) => write!(f, "invalid construction: {err}"),
            TypeError::UnresolvedPlaceholder { name } => {
                write!(f, "unresolved type variable `{name}`")
            }
        }
    }
}

impl std::error::Error for TypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TypeError::InvalidConstruction(err) => Some(err),
            TypeError::UnresolvedPlaceholder { .. } => None,
        }
    }
}

impl From<ConstructionError> for TypeError {
    fn from(err: ConstructionError) -> Self {
        TypeError::InvalidConstruction(err)
    }
}
