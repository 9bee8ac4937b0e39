//! Error taxonomy for vector construction and arithmetic.
//!
//! Every failure is a caller contract violation reported at the call that
//! triggers it. Nothing here is retried and no operation partially mutates
//! its operands before failing.

use std::fmt;

/// Message carried by every zero-vector normalization failure.
pub(crate) const ZERO_VECTOR_MSG: &str = "cannot normalize a zero vector";

/// Message carried by every unsupported multiply.
pub(crate) const MULTIPLY_OPERAND_MSG: &str =
    "can only multiply by float or int (or another vector, component-wise)";

/// Category of a [`VectorError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorErrorKind {
    /// Malformed or wrong-kind constructor or scale input.
    ArgumentError,
    /// Operator applied to an unsupported operand kind.
    TypeError,
    /// Normalization of a zero-magnitude vector.
    DivisionByZero,
}

impl fmt::Display for VectorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VectorErrorKind::ArgumentError => "ArgumentError",
            VectorErrorKind::TypeError => "TypeError",
            VectorErrorKind::DivisionByZero => "DivisionByZero",
        };
        f.write_str(name)
    }
}

/// Errors returned by fallible vector operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Input could not be interpreted as the required number kind
    Argument(String),
    /// Operand kinds do not support the requested operation
    Type(String),
    /// Attempted to divide by a zero magnitude
    DivisionByZero(String),
}

impl VectorError {
    /// Create an argument error with a custom message.
    pub fn argument(message: impl Into<String>) -> Self {
        VectorError::Argument(message.into())
    }

    /// Create a type error with a custom message.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        VectorError::Type(message.into())
    }

    /// The error raised by `normalize` and `get_normalized` on a zero vector.
    pub fn zero_vector() -> Self {
        VectorError::DivisionByZero(ZERO_VECTOR_MSG.to_string())
    }

    /// Category of this error.
    pub fn kind(&self) -> VectorErrorKind {
        match self {
            VectorError::Argument(_) => VectorErrorKind::ArgumentError,
            VectorError::Type(_) => VectorErrorKind::TypeError,
            VectorError::DivisionByZero(_) => VectorErrorKind::DivisionByZero,
        }
    }

    /// Human-readable message without the kind prefix.
    pub fn msg(&self) -> &str {
        match self {
            VectorError::Argument(msg)
            | VectorError::Type(msg)
            | VectorError::DivisionByZero(msg) => msg,
        }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.msg())
    }
}

impl std::error::Error for VectorError {}
