//! # A linear program solver
//!
//! Linear programs are solved using the two phase Simplex Method on a dense tableau, as described
//! in the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! ```
//! use twophase::{ConstraintType, GeneralForm, Objective, Settings, VariableSign};
//!
//! // Maximize 3 x1 + x2 + 2 x3 subject to three constraints
//! let problem = GeneralForm::new(
//!     Objective::Maximize,
//!     vec![
//!         vec![3.0, 1.0, 2.0, 0.0],
//!         vec![1.0, 1.0, 3.0, 30.0],
//!         vec![2.0, 2.0, 5.0, 24.0],
//!         vec![4.0, 1.0, 2.0, 36.0],
//!     ],
//!     vec![VariableSign::NonNegative; 3],
//!     vec![ConstraintType::Less; 3],
//! ).unwrap();
//!
//! let solution = problem.solve(&Settings::default()).unwrap();
//! assert!((solution.objective_value() - 28.0f64).abs() < 1e-9);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

pub use crate::algorithm::settings::{Settings, SettingsBuilder};
pub use crate::algorithm::two_phase::{solve, solve_with};
pub use crate::data::linear_program::canonical_form::CanonicalForm;
pub use crate::data::linear_program::elements::{ConstraintType, Objective, VariableSign};
pub use crate::data::linear_program::general_form::GeneralForm;
pub use crate::data::linear_program::solution::Solution;
pub use crate::error::{InputError, SolveError};

#[cfg(test)]
mod tests;
