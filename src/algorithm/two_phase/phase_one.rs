//! # Phase one: finding a basic feasible solution
use std::collections::HashSet;

use log::{debug, trace};

use crate::algorithm::settings::Settings;
use crate::algorithm::two_phase::phase_two;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Real;
use crate::error::SolveError;

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices is provided. These
/// rows were removed from the tableau, which then has full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows were removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Reduces the auxiliary cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution without auxiliary variables is found.
///
/// The objective row of the tableau is saved, temporarily replaced by the sum of the auxiliary
/// columns and restored afterwards. On success, the auxiliary columns are zero in every row and the
/// objective row is canonical w.r.t. a basis without auxiliary columns: the tableau is ready for
/// phase two.
///
/// # Arguments
///
/// * `tableau`: Tableau with a valid basis. This basis will typically contain the auxiliary
/// columns.
/// * `auxiliary_columns`: Indices of the columns that should end up at zero.
///
/// # Return value
///
/// Whether rows had to be removed, or `SolveError::Infeasible` if the auxiliary cost can't be
/// reduced to zero.
pub fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    auxiliary_columns: &[usize],
    settings: &Settings<F>,
) -> Result<Rank, SolveError>
where
    F: Real,
    PR: PivotRule,
{
    debug!("Phase one with {} auxiliary columns", auxiliary_columns.len());

    let objective = tableau.objective_row();
    tableau.set_auxiliary_objective(auxiliary_columns);
    tableau.canonicalize_objective();
    trace!("{}", tableau);

    let cost = phase_two::primal::<F, PR>(tableau, settings)?.objective_value();
    debug!("Phase one ended with auxiliary cost {}", cost);
    if tableau.tolerance().is_positive(cost) {
        return Err(SolveError::Infeasible { cost: cost.to_f64().unwrap_or(f64::NAN) });
    }

    let rows_to_remove = remove_auxiliary_basis_variables(tableau, auxiliary_columns);
    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        debug!("Removed redundant rows {:?}", rows_to_remove);
        Rank::Deficient(rows_to_remove)
    };

    tableau.set_objective_row(&objective);
    tableau.clear_columns(auxiliary_columns);
    tableau.canonicalize_objective();

    Ok(rank)
}

/// Removes all auxiliary variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// An auxiliary variable that is still basic has value zero. It is exchanged for the first column
/// that is neither auxiliary nor basic and that has a nonzero coefficient in its row. If there is
/// no such column, the row is a linear combination of the other rows and is removed.
///
/// # Return value
///
/// A `Vec` with indices of rows that were removed. Is sorted as a side effect of the algorithm.
fn remove_auxiliary_basis_variables<F: Real>(
    tableau: &mut Tableau<F>,
    auxiliary_columns: &[usize],
) -> Vec<usize> {
    let auxiliary = auxiliary_columns.iter().copied().collect::<HashSet<_>>();
    let tolerance = tableau.tolerance();
    let mut rows_to_remove = Vec::new();

    for row in 0..tableau.nr_rows() {
        if !auxiliary.contains(&tableau.basis_column_index_for_row(row)) {
            continue;
        }

        let pivot_column = (0..tableau.nr_columns())
            .filter(|j| !auxiliary.contains(j) && !tableau.is_in_basis(*j))
            .find(|&j| !tolerance.is_zero(tableau.generate_element(row, j)));

        match pivot_column {
            Some(column) => {
                // Zero within the tolerance; exactly zero leaves the other right-hand sides as
                // they are
                tableau.set_constraint_value(row, F::zero());
                let leaving = tableau.bring_into_basis(column, row);
                trace!("Auxiliary column {} left the basis for column {} in row {}", leaving, column, row);
            },
            None => rows_to_remove.push(row),
        }
    }

    tableau.remove_rows(&rows_to_remove);

    debug_assert!(rows_to_remove.is_sorted());
    rows_to_remove
}
