//! # Objective row
//!
//! Between phases, the objective row of the tableau is replaced. A new objective row is in general
//! not expressed in terms of the current basis; the operations here bring it back into canonical
//! form.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Real;

impl<F: Real> Tableau<F> {
    /// A copy of the objective row, including the right-hand side.
    pub fn objective_row(&self) -> Vec<F> {
        self.matrix.row(0).to_vec()
    }

    /// Replace the objective row.
    ///
    /// The result will typically not be canonical; see `canonicalize_objective`.
    ///
    /// # Arguments
    ///
    /// * `row`: A value for each column followed by the right-hand side.
    pub fn set_objective_row(&mut self, row: &[F]) {
        debug_assert_eq!(row.len(), self.nr_columns() + 1);

        self.matrix.set_row(0, row);
    }

    /// Replace the objective by the sum of the given columns.
    ///
    /// This is the objective of the first phase: the listed columns get cost one, all other
    /// columns and the right-hand side zero.
    pub fn set_auxiliary_objective(&mut self, columns: &[usize]) {
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns()));

        let mut row = vec![F::zero(); self.nr_columns() + 1];
        for &j in columns {
            row[j] = F::one();
        }
        self.matrix.set_row(0, &row);
    }

    /// Express the objective row in terms of the current basis.
    ///
    /// The cost of each basic column is eliminated by subtracting a multiple of the constraint
    /// row that column is basic in. All multiples are read before the objective row is modified
    /// and the constraint rows are not touched. Afterwards, the basic columns have a relative cost
    /// of exactly zero.
    pub fn canonicalize_objective(&mut self) {
        let weights = self.basis_indices.iter()
            .map(|&j| self.matrix.get_value(0, j))
            .collect::<Vec<_>>();

        for (row, weight) in weights.into_iter().enumerate() {
            if weight != F::zero() {
                self.matrix.mul_add_rows(row + 1, 0, -weight);
            }
        }

        for &j in &self.basis_indices {
            self.matrix.set_value(0, j, F::zero());
        }
    }

    /// Set the given columns to zero in every row, the objective row included.
    ///
    /// # Arguments
    ///
    /// * `columns`: Columns not in the basis.
    pub fn clear_columns(&mut self, columns: &[usize]) {
        debug_assert!(columns.iter().all(|&j| !self.is_in_basis(j)));

        for &j in columns {
            self.matrix.clear_column(j);
        }
    }
}
