//! # Phase two: improving a basic feasible solution
use log::{log_enabled, trace, Level};

use crate::algorithm::settings::Settings;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Real;
use crate::error::SolveError;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be nonnegative (primal feasibility)
/// - The relative cost of the basis columns should be zero
///
/// The last two are verified before the first pivot, the first one when the tableau was created.
///
/// Comparisons use the tolerance of the tableau; of the settings, only the iteration limit is
/// used.
///
/// # Return value
///
/// The optimal basic feasible solution with a value for every column of the tableau, and the
/// minimal objective value. It cannot be infeasible, as a feasible solution is needed to start
/// using this method.
pub fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    settings: &Settings<F>,
) -> Result<Solution<F>, SolveError>
where
    F: Real,
    PR: PivotRule,
{
    tableau.check_canonical()?;

    let mut rule = PR::new();
    let mut nr_iterations = 0;
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => {
                let row_index = tableau.select_primal_pivot_row(column_index)
                    .ok_or(SolveError::Unbounded { column: column_index })?;

                if let Some(limit) = settings.max_iterations {
                    if nr_iterations >= limit {
                        return Err(SolveError::IterationLimit { limit });
                    }
                }

                let leaving = tableau.bring_into_basis(column_index, row_index);
                nr_iterations += 1;

                trace!(
                    "Iteration {}: column {} (relative cost {}) entered in row {}, column {} left, objective value {}",
                    nr_iterations, column_index, cost, row_index, leaving, tableau.objective_function_value(),
                );
                if log_enabled!(Level::Trace) {
                    trace!("Solution: {:?}", tableau.current_bfs());
                }
            },
            None => break Ok(tableau.current_solution()),
        }
    }
}
