//! Free-function vector products.
//!
//! These are the operations that don't read naturally as operators: the
//! scalar dot product (lighting terms) and the cross product (surface normals).

use super::vec3::Vector3;

/// Dot product, `a.x*b.x + a.y*b.y + a.z*b.z`.
#[inline]
#[must_use]
pub fn dot(a: Vector3, b: Vector3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Cross product `a × b`.
///
/// Anti-commutative: `cross(a, b) == -cross(b, a)` holds exactly, because each
/// component is a difference of the same two products with the order swapped.
#[inline]
#[must_use]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}
