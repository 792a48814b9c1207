//! Linear algebra primitives for computer graphics, with fixed-size
//! single-precision vectors, matrices, complex numbers and quaternions.

#[macro_use]
mod macros;

pub mod complex;
pub mod matrix;
pub mod quaternion;
pub mod scalar;
pub mod vector;
