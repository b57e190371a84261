//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! A dense tableau is used: every pivot updates the whole matrix, including the objective row.
use log::{debug, trace};

use crate::algorithm::settings::Settings;
use crate::algorithm::two_phase::phase_one::Rank;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::variable::reconstruct;
use crate::data::number_types::traits::Real;
use crate::error::{InputError, SolveError};

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

/// Solve a linear program in canonical form with the two phase method.
///
/// # Arguments
///
/// * `problem`: Tableau with a feasible basis, together with the information needed to express the
/// solution in terms of the original variables. If it lists auxiliary columns, a first phase drives
/// them to zero before the objective is optimized.
/// * `settings`: Iteration limit. Its tolerance should be the one the tableau was created with.
///
/// # Return value
///
/// A value for each original variable and the minimal value of the objective function of the
/// tableau. `InputError::ToleranceMismatch` if the settings and the tableau don't agree on the
/// tolerance.
pub fn solve<F: Real>(
    problem: CanonicalForm<F>,
    settings: &Settings<F>,
) -> Result<Solution<F>, SolveError> {
    // Default choice
    type PivotRule = FirstProfitable;

    solve_with::<F, PivotRule>(problem, settings)
}

/// Solve a linear program in canonical form with the two phase method, using a specific pivot
/// rule.
///
/// See `solve`.
pub fn solve_with<F, PR>(
    problem: CanonicalForm<F>,
    settings: &Settings<F>,
) -> Result<Solution<F>, SolveError>
where
    F: Real,
    PR: PivotRule,
{
    let (mut tableau, variables, auxiliary_columns) = problem.into_parts();
    if settings.tolerance() != tableau.tolerance() {
        return Err(InputError::ToleranceMismatch.into());
    }

    if !auxiliary_columns.is_empty() {
        match phase_one::primal::<F, PR>(&mut tableau, &auxiliary_columns, settings)? {
            Rank::Full => debug!("Feasible basis found"),
            Rank::Deficient(rows) => debug!("Feasible basis found after removing {} rows", rows.len()),
        }
    }

    debug!("Phase two with {} rows and {} columns", tableau.nr_rows(), tableau.nr_columns());
    trace!("{}", tableau);
    let solution = phase_two::primal::<F, PR>(&mut tableau, settings)?;
    debug!("Optimal objective value {}", solution.objective_value());

    Ok(Solution::new(
        solution.objective_value(),
        reconstruct(&variables, solution.values()),
    ))
}
