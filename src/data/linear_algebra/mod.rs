//! # Linear algebra primitives
//!
//! Dense primitives used to represent the simplex tableau.
pub mod matrix;
