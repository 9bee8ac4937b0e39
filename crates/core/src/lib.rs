//! Vectors Core Library
//!
//! A small 3-component vector value type for ray-tracing style code:
//! component-wise arithmetic, magnitude and normalization, dot and cross
//! products, and export of a vector as a PPM (P3) color line.
//!
//! ## Typed and runtime-checked entry points
//!
//! - [`Vector3`] implements the arithmetic operators directly (`+`, `-`,
//!   `*` by vector or scalar on either side, unary `-`).
//! - [`Operand`] and the functions in [`core_types::operand`] accept values
//!   of unknown kind and report [`VectorError`]s instead of failing to compile.

// Core types and utilities
pub mod core_types;

// Error taxonomy
pub mod error;

// Re-export core types
pub use core_types::{cross, dot, Operand, Vector3};
pub use error::{VectorError, VectorErrorKind};
