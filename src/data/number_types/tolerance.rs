//! # Numerical tolerance
//!
//! Computations on the tableau accumulate rounding errors. Whether a value is "zero", "positive"
//! or "negative" is therefore decided relative to a threshold. Mixing thresholds between
//! comparisons breaks the guarantees of the algorithm (a value could be both "not negative" in
//! one place and "not zero" in another), so a single `Tolerance` is shared by all of them.
use crate::data::number_types::traits::Real;

/// Default threshold below which a value is considered zero.
pub const EPSILON: f64 = 1e-10;

/// The default threshold converted to the number type used.
///
/// Falls back to the machine epsilon of `F` if `EPSILON` can't be represented.
pub fn default_epsilon<F: Real>() -> F {
    F::from(EPSILON).unwrap_or_else(F::epsilon)
}

/// Threshold based sign tests.
///
/// The three tests partition the number line: every value is exactly one of negative, zero or
/// positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance<F> {
    epsilon: F,
}

impl<F: Real> Tolerance<F> {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: Nonnegative threshold.
    pub fn new(epsilon: F) -> Self {
        debug_assert!(epsilon >= F::zero());

        Self { epsilon }
    }

    /// The threshold itself.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// Whether `value` is strictly larger than the threshold.
    pub fn is_positive(&self, value: F) -> bool {
        value > self.epsilon
    }

    /// Whether `value` is strictly smaller than minus the threshold.
    pub fn is_negative(&self, value: F) -> bool {
        value < -self.epsilon
    }

    /// Whether `value` is neither positive nor negative.
    pub fn is_zero(&self, value: F) -> bool {
        !self.is_positive(value) && !self.is_negative(value)
    }
}

impl<F: Real> Default for Tolerance<F> {
    fn default() -> Self {
        Self::new(default_epsilon())
    }
}
