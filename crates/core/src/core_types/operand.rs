//! Runtime-tagged operands for loosely typed callers.
//!
//! Callers that hold values of unknown kind (script bindings, parsed input,
//! the demo CLI) go through [`Operand`] instead of the compile-time operator
//! overloads on [`Vector3`]. Every entry point here checks operand kinds with an
//! exhaustive match and reports `ArgumentError` or `TypeError` instead of
//! panicking.

use super::ops;
use super::vec3::Vector3;
use crate::error::{VectorError, MULTIPLY_OPERAND_MSG};
use std::fmt;
use tracing::debug;

/// A value that may or may not be usable in vector arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Floating-point scalar
    Float(f64),
    /// Integer scalar
    Int(i64),
    /// A vector
    Vector(Vector3),
    /// Anything else, kept as its text form for diagnostics
    Text(String),
}

impl Operand {
    /// Short kind name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operand::Float(_) => "float",
            Operand::Int(_) => "int",
            Operand::Vector(_) => "vector",
            Operand::Text(_) => "str",
        }
    }

    /// Numeric value of a scalar operand.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Operand::Float(v) => Some(*v),
            Operand::Int(v) => Some(*v as f64),
            Operand::Vector(_) | Operand::Text(_) => None,
        }
    }

    /// The vector held by a `Vector` operand.
    pub fn as_vector(&self) -> Option<&Vector3> {
        match self {
            Operand::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Negate a vector operand in place and return it.
    ///
    /// # Errors
    /// Returns a type error if the operand is not a vector.
    pub fn negate(&mut self) -> Result<&mut Self, VectorError> {
        let Operand::Vector(v) = self else {
            return Err(type_error(format!(
                "bad operand type for unary -: '{}'",
                self.kind_name()
            )));
        };
        v.negate_in_place();
        Ok(self)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Float(v) => write!(f, "{v}"),
            Operand::Int(v) => write!(f, "{v}"),
            Operand::Vector(v) => write!(f, "{v}"),
            Operand::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Float(v)
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Int(v)
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Int(i64::from(v))
    }
}

impl From<Vector3> for Operand {
    fn from(v: Vector3) -> Self {
        Operand::Vector(v)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

fn type_error(message: String) -> VectorError {
    debug!(%message, "operand type mismatch");
    VectorError::type_mismatch(message)
}

fn expect_vectors(
    op: &str,
    lhs: &Operand,
    rhs: &Operand,
) -> Result<(Vector3, Vector3), VectorError> {
    match (lhs, rhs) {
        (Operand::Vector(a), Operand::Vector(b)) => Ok((*a, *b)),
        _ => Err(type_error(format!(
            "{op} requires two vectors, got '{}' and '{}'",
            lhs.kind_name(),
            rhs.kind_name()
        ))),
    }
}

impl Vector3 {
    /// Build a vector from three scalar operands.
    ///
    /// # Errors
    /// Returns an argument error if any component is not a float or int.
    pub fn from_operands(x: &Operand, y: &Operand, z: &Operand) -> Result<Self, VectorError> {
        let mut components = [0.0_f64; 3];
        for ((slot, operand), axis) in components.iter_mut().zip([x, y, z]).zip(["x", "y", "z"]) {
            *slot = operand.as_number().ok_or_else(|| {
                VectorError::argument(format!(
                    "{axis} must be a real number, not '{}'",
                    operand.kind_name()
                ))
            })?;
        }
        let [x, y, z] = components;
        Ok(Vector3::new(x, y, z))
    }

    /// [`Vector3::to_ppm_color`] with a scale factor of unknown kind.
    ///
    /// # Errors
    /// Returns an argument error if `max_color_value` is not an int or does
    /// not fit in 32 bits.
    pub fn to_ppm_color_operand(&self, max_color_value: &Operand) -> Result<String, VectorError> {
        match max_color_value {
            Operand::Int(n) => {
                let n = i32::try_from(*n).map_err(|_| {
                    VectorError::argument(format!("max color value {n} does not fit in 32 bits"))
                })?;
                Ok(self.to_ppm_color(n))
            }
            other => Err(VectorError::argument(format!(
                "max color value must be an int, not '{}'",
                other.kind_name()
            ))),
        }
    }
}

/// Component-wise sum of two vector operands.
///
/// # Errors
/// Returns a type error unless both operands are vectors.
pub fn add(lhs: &Operand, rhs: &Operand) -> Result<Operand, VectorError> {
    let (a, b) = expect_vectors("+", lhs, rhs)?;
    Ok(Operand::Vector(a + b))
}

/// Component-wise difference of two vector operands.
///
/// # Errors
/// Returns a type error unless both operands are vectors.
pub fn subtract(lhs: &Operand, rhs: &Operand) -> Result<Operand, VectorError> {
    let (a, b) = expect_vectors("-", lhs, rhs)?;
    Ok(Operand::Vector(a - b))
}

/// Vector × vector (component-wise) or vector × scalar on either side.
///
/// # Errors
/// Returns a type error for every other combination of operand kinds.
pub fn multiply(lhs: &Operand, rhs: &Operand) -> Result<Operand, VectorError> {
    match (lhs, rhs) {
        (Operand::Vector(a), Operand::Vector(b)) => Ok(Operand::Vector(*a * *b)),
        (Operand::Vector(v), Operand::Float(s)) | (Operand::Float(s), Operand::Vector(v)) => {
            Ok(Operand::Vector(*v * *s))
        }
        (Operand::Vector(v), Operand::Int(n)) | (Operand::Int(n), Operand::Vector(v)) => {
            Ok(Operand::Vector(*v * *n as f64))
        }
        _ => Err(type_error(MULTIPLY_OPERAND_MSG.to_string())),
    }
}

/// [`ops::dot`] over operands.
///
/// # Errors
/// Returns a type error unless both operands are vectors.
pub fn dot(lhs: &Operand, rhs: &Operand) -> Result<f64, VectorError> {
    let (a, b) = expect_vectors("dot", lhs, rhs)?;
    Ok(ops::dot(a, b))
}

/// [`ops::cross`] over operands.
///
/// # Errors
/// Returns a type error unless both operands are vectors.
pub fn cross(lhs: &Operand, rhs: &Operand) -> Result<Vector3, VectorError> {
    let (a, b) = expect_vectors("cross", lhs, rhs)?;
    Ok(ops::cross(a, b))
}
