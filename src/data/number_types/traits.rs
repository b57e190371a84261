//! # Traits
//!
//! The tableau is dense and its values are floats. The bounds below are what the algorithms need
//! from such a float; they are collected in a single trait to keep signatures readable.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::Float;

/// The number type that the simplex algorithm computes with.
///
/// Automatically implemented for all types satisfying the trait's bounds, most notably `f32` and
/// `f64`.
pub trait Real: Float + Sum + Debug + Display + 'static {}
impl<T: Float + Sum + Debug + Display + 'static> Real for T {}
