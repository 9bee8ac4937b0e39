//! Three-component vector value type for colors, positions, and directions.
//!
//! `Vector3` is plain data: binary operators always produce a new value and
//! leave their operands alone. The only in-place mutations are the explicitly
//! named [`Vector3::normalize`] and [`Vector3::negate_in_place`].
//!
//! # Usage
//! ```
//! use vectors_core::Vector3;
//!
//! let u = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(u.length(), 5.0);
//! assert_eq!(u.to_string(), "3.000000 4.000000 0.000000");
//!
//! let unit = u.get_normalized().unwrap();
//! assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
//!
//! let color = Vector3::new(1.0, 0.5, 0.0);
//! assert_eq!(color.to_ppm_color(255), "255 127 0\n");
//! ```

use crate::core_types::ops;
use crate::error::VectorError;
use nalgebra::Vector3 as NaVector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use tracing::debug;

/// An ordered triple of `f64` components.
///
/// No range invariant is enforced. A zero vector is a legal value until
/// it is normalized, at which point normalization fails.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component (red channel when used as a color)
    pub x: f64,
    /// Y component (green channel when used as a color)
    pub y: f64,
    /// Z component (blue channel when used as a color)
    pub z: f64,
}

impl Vector3 {
    /// The zero vector
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Create a vector holding the three components verbatim.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Squared Euclidean norm
    #[inline]
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm, `sqrt(x² + y² + z²)`. Zero for the zero vector.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scale this vector to unit length in place and return it for chaining.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if the length is exactly zero.
    /// The vector is left unmodified in that case.
    pub fn normalize(&mut self) -> Result<&mut Self, VectorError> {
        let length = self.checked_length()?;
        self.x /= length;
        self.y /= length;
        self.z /= length;
        Ok(self)
    }

    /// Unit-length copy of this vector. `self` is not modified.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if the length is exactly zero.
    pub fn get_normalized(&self) -> Result<Vector3, VectorError> {
        let length = self.checked_length()?;
        Ok(Vector3::new(self.x / length, self.y / length, self.z / length))
    }

    /// Length, or the zero-vector error shared by both normalize forms.
    fn checked_length(&self) -> Result<f64, VectorError> {
        let length = self.length();
        if length == 0.0 {
            debug!(vector = %self, "refusing to normalize zero-length vector");
            return Err(VectorError::zero_vector());
        }
        Ok(length)
    }

    /// Flip the sign of every component in place and return the same vector.
    pub fn negate_in_place(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Negated copy. Same as the unary `-` operator.
    #[inline]
    #[must_use]
    pub fn negated(&self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }

    /// Dot product with `rhs`. See [`ops::dot`].
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Vector3) -> f64 {
        ops::dot(self, rhs)
    }

    /// Cross product `self × rhs`. See [`ops::cross`].
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Vector3) -> Vector3 {
        ops::cross(self, rhs)
    }

    /// Format the vector as one PPM (P3) pixel line, `"<r> <g> <b>\n"`.
    ///
    /// Each channel is `component * max_color_value` truncated toward zero.
    /// Values are not clamped: components outside `[0, 1]` or a non-positive
    /// `max_color_value` produce out-of-range channels as-is.
    #[must_use]
    pub fn to_ppm_color(&self, max_color_value: i32) -> String {
        let scale = f64::from(max_color_value);
        let r = (self.x * scale) as i32;
        let g = (self.y * scale) as i32;
        let b = (self.z * scale) as i32;
        format!("{r} {g} {b}\n")
    }
}

/// `"<x> <y> <z>"`, six decimals per component.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {:.6} {:.6}", self.x, self.y, self.z)
    }
}

/// Parses the `Display` form (or any three whitespace-separated numbers).
impl FromStr for Vector3 {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = [0.0_f64; 3];
        let mut tokens = s.split_whitespace();

        for (slot, axis) in components.iter_mut().zip(["x", "y", "z"]) {
            let token = tokens.next().ok_or_else(|| {
                VectorError::argument(format!("missing {axis} component in {s:?}"))
            })?;
            *slot = token.parse().map_err(|_| {
                VectorError::argument(format!("{axis} component {token:?} is not a number"))
            })?;
        }

        if let Some(extra) = tokens.next() {
            return Err(VectorError::argument(format!(
                "expected 3 components, found extra token {extra:?}"
            )));
        }

        let [x, y, z] = components;
        Ok(Vector3::new(x, y, z))
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<NaVector3<f64>> for Vector3 {
    fn from(v: NaVector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for NaVector3<f64> {
    fn from(v: Vector3) -> Self {
        NaVector3::new(v.x, v.y, v.z)
    }
}

// ============================================================================
// ARITHMETIC OPERATORS (all pure)
// ============================================================================

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Component-wise (Hadamard) product, not the dot product.
impl Mul for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Mul<i32> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: i32) -> Vector3 {
        self * f64::from(rhs)
    }
}

impl Mul<Vector3> for i32 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * f64::from(self)
    }
}

/// Pure negation. Use [`Vector3::negate_in_place`] to flip an existing vector.
impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        self.negated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_stores_components_verbatim() {
        let v = Vector3::new(1e300, -0.0, f64::INFINITY);
        assert_eq!(v.x, 1e300);
        assert!(v.y.is_sign_negative());
        assert!(v.z.is_infinite());
    }

    #[test]
    fn test_length_3_4_5() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector3::ZERO.length(), 0.0);
        assert_eq!(Vector3::new(1.0, 2.0, 2.0).length_squared(), 9.0);
    }

    #[test]
    fn test_normalize_in_place_chains() {
        let mut v = Vector3::new(0.0, 0.0, 2.0);
        let len = v.normalize().unwrap().length();
        assert_eq!(len, 1.0);
        assert_eq!(v, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normalize_zero_fails_without_mutation() {
        let mut v = Vector3::ZERO;
        let err = v.normalize().unwrap_err();
        assert_eq!(err.kind(), VectorErrorKind::DivisionByZero);
        assert_eq!(err.msg(), "cannot normalize a zero vector");
        assert_eq!(v, Vector3::ZERO);
    }

    #[test]
    fn test_normalize_negative_zero_also_fails() {
        let mut v = Vector3::new(-0.0, 0.0, -0.0);
        assert!(v.normalize().is_err());
        assert!(v.get_normalized().is_err());
    }

    #[test]
    fn test_get_normalized_leaves_original() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        let n = v.get_normalized().unwrap();
        assert_eq!(n, Vector3::new(0.6, 0.8, 0.0));
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_eq!(v, Vector3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_negate_in_place_mutates() {
        let mut v = Vector3::new(1.0, -2.0, 3.0);
        v.negate_in_place();
        assert_eq!(v, Vector3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_neg_operator_is_pure() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        let n = -v;
        assert_eq!(n, Vector3::new(-1.0, 2.0, -3.0));
        assert_eq!(v, Vector3::new(1.0, -2.0, 3.0));
        assert_eq!(v.negated(), n);
    }

    #[test]
    fn test_scalar_multiply_both_sides() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let expected = Vector3::new(2.0, 4.0, 6.0);
        assert_eq!(v * 2, expected);
        assert_eq!(2 * v, expected);
        assert_eq!(v * 2.0, expected);
        assert_eq!(2.0 * v, expected);
    }

    #[test]
    fn test_hadamard_product() {
        let u = Vector3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(2.0, 3.0, 4.0);
        assert_eq!(u * v, Vector3::new(2.0, 6.0, 12.0));
        assert_eq!(u - v, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(u + v, Vector3::new(3.0, 5.0, 7.0));
    }

    #[test]
    fn test_display_six_decimals() {
        let v = Vector3::new(1.5, -2.25, 0.0);
        assert_eq!(v.to_string(), "1.500000 -2.250000 0.000000");
    }

    #[test]
    fn test_ppm_color_truncates() {
        let c = Vector3::new(1.0, 0.5, 0.0);
        assert_eq!(c.to_ppm_color(255), "255 127 0\n");
    }

    #[test]
    fn test_ppm_color_no_clamping() {
        let c = Vector3::new(2.0, -0.5, 0.999);
        assert_eq!(c.to_ppm_color(255), "510 -127 254\n");
        assert_eq!(Vector3::new(1.0, 0.5, 0.25).to_ppm_color(-4), "-4 -2 -1\n");
        assert_eq!(Vector3::new(1.0, 0.5, 0.25).to_ppm_color(0), "0 0 0\n");
    }

    #[test]
    fn test_from_str_parses_display_form() {
        let v: Vector3 = "1.500000 -2.250000 0.000000".parse().unwrap();
        assert_eq!(v, Vector3::new(1.5, -2.25, 0.0));
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        for input in ["", "1 2", "1 2 3 4", "1 two 3"] {
            let err = input.parse::<Vector3>().unwrap_err();
            assert_eq!(err.kind(), VectorErrorKind::ArgumentError, "{input:?}");
        }
    }

    #[test]
    fn test_nalgebra_conversion() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let na: NaVector3<f64> = v.into();
        assert_eq!(na.dot(&na), v.dot(v));
        assert_eq!(Vector3::from(na), v);
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
        assert_eq!(Vector3::from((1.0, 2.0, 3.0)), v);
    }
}
