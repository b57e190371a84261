//! # Dense matrices
//!
//! The simplex tableau is stored as a dense, row major matrix. Next to the basic accessors, this
//! module provides the elementary row operations that the algorithm is built from.
use crate::data::number_types::traits::Real;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation, except for
/// the removal of rows.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Real> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Return value
    ///
    /// `None` if the rows don't all have the same length.
    pub fn from_data(data: Vec<Vec<F>>) -> Option<Self> {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);

        if data.iter().all(|row| row.len() == nr_columns) {
            Some(Self { data, nr_rows, nr_columns })
        } else {
            None
        }
    }

    /// Create a matrix of zeros of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            data: vec![vec![F::zero(); columns]; rows],
            nr_rows: rows,
            nr_columns: columns,
        }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// All values in row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// All values in column `j`.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Change row `i` to the provided `values`.
    pub fn set_row(&mut self, i: usize, values: &[F]) {
        debug_assert!(i < self.nr_rows);
        debug_assert_eq!(values.len(), self.nr_columns);

        self.data[i].copy_from_slice(values);
    }

    /// Set all values in column `j` to zero.
    pub fn clear_column(&mut self, j: usize) {
        debug_assert!(j < self.nr_columns);

        for row in &mut self.data {
            row[j] = F::zero();
        }
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value = *value * factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read = self.data[read_row][j];
            let write = &mut self.data[write_row][j];
            *write = *write + factor * read;
        }
    }

    /// Pivot on the element at (`row`, `column`).
    ///
    /// Row `row` is divided by the pivot element, and a multiple of it is subtracted from each
    /// other row such that column `column` becomes the unit vector `e_row`.
    ///
    /// The whole matrix is transformed at once: the multipliers of all rows are read before any
    /// row is written.
    ///
    /// # Arguments
    ///
    /// * `row`: Row index of the pivot element.
    /// * `column`: Column index of the pivot element, the value at the coordinate should not be
    /// zero.
    pub fn pivot(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);
        debug_assert_ne!(self.data[row][column], F::zero());

        let factors = self.column(column);
        self.multiply_row(row, F::one() / factors[row]);
        let pivot_row = self.data[row].clone();

        for (i, (values, factor)) in self.data.iter_mut().zip(factors).enumerate() {
            if i == row || factor == F::zero() {
                continue;
            }

            for (value, &pivot_value) in values.iter_mut().zip(&pivot_row) {
                *value = *value - factor * pivot_value;
            }
        }

        // Exact unit column, rather than values close to it
        for (i, values) in self.data.iter_mut().enumerate() {
            values[column] = if i == row { F::one() } else { F::zero() };
        }
    }

    /// Remove rows from the matrix.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated row indices.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows));

        let mut index = 0;
        self.data.retain(|_| {
            let keep = rows.binary_search(&index).is_err();
            index += 1;
            keep
        });
        self.nr_rows = self.data.len();
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}
