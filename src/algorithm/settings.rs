//! # Solver settings
//!
//! Parameters that influence a solve without being part of the problem. They are built with a
//! validating builder:
//!
//! ```
//! use twophase::algorithm::settings::SettingsBuilder;
//!
//! let settings = SettingsBuilder::<f64>::default()
//!     .tolerance(1e-9)
//!     .max_iterations(1_000)
//!     .build()
//!     .unwrap();
//! assert_eq!(settings.max_iterations, Some(1_000));
//! ```
use derive_builder::Builder;
use thiserror::Error;

use crate::data::number_types::tolerance::{default_epsilon, Tolerance};
use crate::data::number_types::traits::Real;

/// Error type returned by settings validation.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// An error attributable to one of the fields.
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings shared by both phases of a solve.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Settings<F: Real> {
    /// Threshold used for all comparisons with zero.
    ///
    /// The same value decides which reduced costs are negative, which column coefficients take
    /// part in the ratio test, which right-hand sides are acceptable and whether the first phase
    /// found a feasible point.
    #[builder(default = "default_epsilon()")]
    pub tolerance: F,

    /// Maximum number of pivots per phase, unlimited if `None`.
    #[builder(default, setter(strip_option))]
    pub max_iterations: Option<usize>,
}

impl<F: Real> Settings<F> {
    /// The tolerance as used by the tableau.
    pub fn tolerance(&self) -> Tolerance<F> {
        Tolerance::new(self.tolerance)
    }
}

impl<F: Real> Default for Settings<F> {
    fn default() -> Self {
        Self {
            tolerance: default_epsilon(),
            max_iterations: None,
        }
    }
}

impl From<SettingsError> for SettingsBuilderError {
    fn from(error: SettingsError) -> Self {
        SettingsBuilderError::ValidationError(error.to_string())
    }
}

/// Pre-build settings validation.
impl<F: Real> SettingsBuilder<F> {
    fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tolerance) = self.tolerance {
            if !tolerance.is_finite() || tolerance < F::zero() {
                return Err(SettingsError::BadFieldValue("tolerance"));
            }
        }

        Ok(())
    }
}
