//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is extended with supplementary data structures for efficiency.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Real;
use crate::error::InputError;

pub mod objective;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns a dense matrix of size `(1 + m) x (n + 1)`. The first row is the objective row, which
/// holds the relative cost of each column and, in its last entry, minus the current objective
/// value. The other `m` rows are the constraints, with their right-hand side in the last column.
///
/// Constraint rows are indexed `0..m` throughout this type, the objective row is not counted.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Objective row followed by the constraint rows.
    ///
    /// This attribute changes with a basis change.
    matrix: DenseMatrix<F>,

    /// For each constraint row, the column that is basic in that row.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,

    /// Used for all comparisons of values with zero.
    tolerance: Tolerance<F>,
}

impl<F: Real> Tableau<F> {
    /// Create a new tableau.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Objective row followed by the constraint rows, each with the right-hand side as
    /// the last element.
    /// * `basis_indices`: For each constraint row, the index of the column basic in that row.
    /// * `tolerance`: Used for all comparisons with zero for the lifetime of the tableau.
    ///
    /// # Return value
    ///
    /// An error if the basis doesn't match the matrix: it should have one column per constraint
    /// row, all distinct, together forming an identity matrix. Right-hand sides should not be
    /// negative.
    pub fn new(
        matrix: DenseMatrix<F>,
        basis_indices: Vec<usize>,
        tolerance: Tolerance<F>,
    ) -> Result<Self, InputError> {
        if matrix.nr_rows() == 0 || matrix.nr_columns() == 0 {
            return Err(InputError::EmptyTableau);
        }
        let nr_rows = matrix.nr_rows() - 1;
        let nr_columns = matrix.nr_columns() - 1;

        if basis_indices.len() != nr_rows {
            return Err(InputError::BasisSize { basis: basis_indices.len(), constraints: nr_rows });
        }
        let mut basis_columns = HashSet::with_capacity(nr_rows);
        for &index in &basis_indices {
            if index >= nr_columns {
                return Err(InputError::BasisIndexOutOfRange { index, nr_columns });
            }
            if !basis_columns.insert(index) {
                return Err(InputError::DuplicateBasisIndex(index));
            }
        }

        let tableau = Self { matrix, basis_indices, basis_columns, tolerance };
        tableau.check_identity()?;
        tableau.check_right_hand_side()?;

        Ok(tableau)
    }

    /// Create a new tableau from rows of data.
    ///
    /// See `Tableau::new`.
    pub fn from_data(
        data: Vec<Vec<F>>,
        basis_indices: Vec<usize>,
        tolerance: Tolerance<F>,
    ) -> Result<Self, InputError> {
        let matrix = DenseMatrix::from_data(data).ok_or(InputError::RaggedRows)?;
        Self::new(matrix, basis_indices, tolerance)
    }

    /// Verify that the tableau is in canonical form w.r.t. its objective row.
    ///
    /// The basis columns should have a zero relative cost and all right-hand sides should be
    /// nonnegative. This is what the simplex algorithm requires before it starts pivoting.
    pub fn check_canonical(&self) -> Result<(), InputError> {
        if let Some(&column) = self.basis_indices.iter()
            .find(|&&j| !self.tolerance.is_zero(self.relative_cost(j))) {
            return Err(InputError::NonzeroBasicCost(column));
        }

        self.check_right_hand_side()
    }

    fn check_identity(&self) -> Result<(), InputError> {
        for (row, &column) in self.basis_indices.iter().enumerate() {
            let is_unit = (0..self.nr_rows()).all(|i| {
                let expected = if i == row { F::one() } else { F::zero() };
                self.tolerance.is_zero(self.generate_element(i, column) - expected)
            });
            if !is_unit {
                return Err(InputError::NotUnitColumn { row, column });
            }
        }

        Ok(())
    }

    fn check_right_hand_side(&self) -> Result<(), InputError> {
        match (0..self.nr_rows()).find(|&i| self.tolerance.is_negative(self.constraint_value(i))) {
            Some(row) => Err(InputError::NegativeRightHandSide(row)),
            None => Ok(()),
        }
    }

    /// Brings a column into the basis by pivoting on the matrix, and updating the data structures
    /// holding the collection of basis columns.
    ///
    /// Right-hand sides of rows with a positive coefficient in the pivot column decrease. Those
    /// that end up below zero are set to zero.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column entering the basis, not yet in the basis.
    /// * `pivot_row_index`: Constraint row in which it becomes basic, in range `0` until
    /// `self.nr_rows()`.
    ///
    /// # Return value
    ///
    /// Index of the column that left the basis.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) -> usize {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let decreasing = (0..self.nr_rows())
            .filter(|&i| i != pivot_row_index)
            .filter(|&i| self.generate_element(i, pivot_column_index) > F::zero())
            .collect::<Vec<_>>();

        self.matrix.pivot(pivot_row_index + 1, pivot_column_index);

        // A coefficient too small to take part in the ratio test can still push the right-hand
        // side of its row below zero
        for row in decreasing {
            if self.constraint_value(row) < F::zero() {
                self.set_constraint_value(row, F::zero());
            }
        }

        self.update_basis_indices(pivot_column_index, pivot_row_index)
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(&mut self, pivot_column: usize, pivot_row: usize) -> usize {
        let leaving_column = self.basis_indices[pivot_row];
        self.basis_indices[pivot_row] = pivot_column;

        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);

        leaving_column
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the minimal ratio
    /// between the right-hand side and a positive column coefficient. Coefficients that are not
    /// positive w.r.t. the tolerance don't take part.
    ///
    /// When there are multiple rows with the minimal ratio, the one with the lowest index is
    /// chosen. This is not Bland's rule for the leaving variable, which would choose the row whose
    /// basic column has the lowest index.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the column entering the basis.
    ///
    /// # Return value
    ///
    /// Index of the constraint row to pivot on. If not found, the problem is unbounded in the
    /// direction of this column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut min_values: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.generate_element(row, column);
            if self.tolerance.is_positive(xij) {
                let ratio = self.constraint_value(row) / xij;
                match min_values {
                    Some((_, min_ratio)) if ratio >= min_ratio => {},
                    _ => min_values = Some((row, ratio)),
                }
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }

    /// Remove constraint rows, together with the columns that are basic in them.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated constraint row indices.
    pub(crate) fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows()));

        if rows.is_empty() {
            return;
        }

        let matrix_rows = rows.iter().map(|&i| i + 1).collect::<Vec<_>>();
        self.matrix.remove_rows(&matrix_rows);

        self.basis_indices = self.basis_indices.iter()
            .enumerate()
            .filter(|(i, _)| rows.binary_search(i).is_err())
            .map(|(_, &column)| column)
            .collect();
        self.basis_columns = self.basis_indices.iter().copied().collect();
    }

    /// Calculates the relative cost of a column.
    ///
    /// # Arguments
    ///
    /// * `j`: Index of column to read the relative cost for, in range `0` until
    /// `self.nr_columns()`.
    ///
    /// # Note
    ///
    /// That column will typically not be a basis column. The relative cost of a basis column is
    /// zero as long as the tableau is canonical.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(0, j)
    }

    /// Single element of a constraint row.
    pub fn generate_element(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(i + 1, j)
    }

    /// Right-hand side of constraint row `i`, which is the value of the basic variable in that
    /// row.
    pub fn constraint_value(&self, i: usize) -> F {
        debug_assert!(i < self.nr_rows());

        self.matrix.get_value(i + 1, self.nr_columns())
    }

    pub(crate) fn set_constraint_value(&mut self, i: usize, value: F) {
        debug_assert!(i < self.nr_rows());

        let column = self.nr_columns();
        self.matrix.set_value(i + 1, column, value);
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Index of the column that is basic in constraint row `row`.
    pub fn basis_column_index_for_row(&self, row: usize) -> usize {
        debug_assert!(row < self.nr_rows());

        self.basis_indices[row]
    }

    /// For each constraint row, the column that is basic in it.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Get the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// A value for each column: the basic columns take the right-hand side of their row, all
    /// others are zero.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_columns()];
        for (row, &column) in self.basis_indices.iter().enumerate() {
            values[column] = self.constraint_value(row);
        }
        values
    }

    /// The current basic feasible solution, together with its objective value.
    pub fn current_solution(&self) -> Solution<F> {
        Solution::new(self.objective_function_value(), self.current_bfs())
    }

    /// Get the cost of the current solution.
    ///
    /// The objective row stores minus the objective value in its last entry.
    pub fn objective_function_value(&self) -> F {
        -self.matrix.get_value(0, self.nr_columns())
    }

    /// Tolerance used for comparisons.
    pub fn tolerance(&self) -> Tolerance<F> {
        self.tolerance
    }

    /// Number of constraint rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows() - 1
    }

    /// Number of variables (columns, excluding the right-hand side) in the tableau.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns() - 1
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state<F: Real>(tableau: &Tableau<F>) -> bool {
    // Checking basis_columns
    // Correct number of basis columns (uniqueness is implied because it's a set)
    let basis_consistent = tableau.basis_columns.len() == tableau.nr_rows()
        && tableau.basis_indices.iter().all(|j| tableau.basis_columns.contains(j));

    basis_consistent && tableau.check_identity().is_ok() && tableau.check_canonical().is_ok()
}

impl<F: Real> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        let header = (0..self.nr_columns()).map(|j| format!("{:>10}", j)).join(" ");
        writeln!(f, "{:>6} | {:>10} | {}", "basis", "b", header)?;
        writeln!(f, "{}", "-".repeat(6 + 3 + 10 + 3 + header.len()))?;

        let cost = (0..self.nr_columns())
            .map(|j| format!("{:>10.4}", self.relative_cost(j)))
            .join(" ");
        writeln!(f, "{:>6} | {:>10.4} | {}", "cost", -self.objective_function_value(), cost)?;
        writeln!(f, "{}", "-".repeat(6 + 3 + 10 + 3 + header.len()))?;

        for row in 0..self.nr_rows() {
            let values = (0..self.nr_columns())
                .map(|j| format!("{:>10.4}", self.generate_element(row, j)))
                .join(" ");
            writeln!(
                f, "{:>6} | {:>10.4} | {}",
                self.basis_column_index_for_row(row), self.constraint_value(row), values,
            )?;
        }

        Ok(())
    }
}
