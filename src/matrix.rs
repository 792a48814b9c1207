//! Matrices.
//!
//! Every rectangular shape from 2x2 to 4x4 is provided as its own type.
//! Matrices are stored row-major as a set of row vectors; columns are
//! computed on access. Multiplying a matrix with a vector treats the
//! vector as a column, while multiplying a vector with a matrix treats it
//! as a row.

mod rect;
mod square;

pub use rect::{Matrix2x3, Matrix2x4, Matrix3x2, Matrix3x4, Matrix4x2, Matrix4x3};
pub use square::{Matrix2, Matrix3, Matrix4};
