//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Real;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// currently made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of the entering column, together with its relative cost. `None` if no column
    /// improves the objective: the current solution is optimal.
    fn select_primal_pivot_column<F: Real>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Only the sign of the relative cost matters, not its magnitude. Basis columns are skipped; they
/// have a zero relative cost anyway.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Real>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let tolerance = tableau.tolerance();

        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| tolerance.is_negative(cost))
    }
}
