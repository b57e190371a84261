//! # Number types
//!
//! The algorithms are written against a small trait over floating point numbers, such that the
//! same code runs with `f32` and `f64`. Because floats carry rounding errors, all comparisons of
//! computed values against zero go through a single `Tolerance`.
pub mod traits;
pub mod tolerance;
