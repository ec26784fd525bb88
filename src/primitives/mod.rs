//! Core compute primitives.
//!
//! Dense row-major storage for the square matrices that correlation
//! networks are built from.

mod matrix;

pub use matrix::Matrix;
