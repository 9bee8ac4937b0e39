//! Core types and utilities

pub mod operand;
pub mod ops;
pub mod vec3;

pub use operand::Operand;
pub use ops::{cross, dot};
pub use vec3::Vector3;
