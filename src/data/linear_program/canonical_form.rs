//! # Canonical form
//!
//! A tableau together with the information needed to interpret its solution.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::variable::VariableTransform;
use crate::data::number_types::traits::Real;
use crate::error::InputError;

/// A linear program in `CanonicalForm` is a tableau with a basic feasible solution: it has only
/// equality constraints, nonnegative variables and the constraint vector `b` is nonnegative.
///
/// The basis may consist of auxiliary columns that are not part of the original problem. These
/// should be driven to zero before the solution means anything.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalForm<F> {
    tableau: Tableau<F>,
    /// How each original variable is represented in the tableau, ordered by original index.
    variables: Vec<VariableTransform>,
    /// Sorted, without duplicates.
    auxiliary_columns: Vec<usize>,
}

impl<F: Real> CanonicalForm<F> {
    /// Create a new linear program in canonical form.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau with a feasible basis.
    /// * `variables`: One record for each original variable. The primary column of variable `i`
    /// should be column `i`.
    /// * `auxiliary_columns`: Columns that only exist to provide an initial basis. None of them may
    /// represent a variable.
    pub fn new(
        tableau: Tableau<F>,
        variables: Vec<VariableTransform>,
        mut auxiliary_columns: Vec<usize>,
    ) -> Result<Self, InputError> {
        let nr_columns = tableau.nr_columns();

        for (variable, transform) in variables.iter().enumerate() {
            if transform.column != variable {
                return Err(InputError::VariableColumn { variable, column: transform.column });
            }
            if transform.max_column() >= nr_columns {
                return Err(InputError::VariableColumn { variable, column: transform.max_column() });
            }
        }

        if let Some(&index) = auxiliary_columns.iter().find(|&&j| j >= nr_columns) {
            return Err(InputError::AuxiliaryColumnOutOfRange { index, nr_columns });
        }
        auxiliary_columns.sort_unstable();
        auxiliary_columns.dedup();

        for (variable, transform) in variables.iter().enumerate() {
            let overlap = transform.columns().find(|j| auxiliary_columns.binary_search(j).is_ok());
            if let Some(column) = overlap {
                return Err(InputError::AuxiliaryVariableColumn { variable, column });
            }
        }

        Ok(Self { tableau, variables, auxiliary_columns })
    }

    /// A problem with only nonnegative variables, represented by the first columns of the tableau.
    pub fn with_identity_variables(
        tableau: Tableau<F>,
        nr_variables: usize,
        auxiliary_columns: Vec<usize>,
    ) -> Result<Self, InputError> {
        let variables = (0..nr_variables).map(VariableTransform::identity).collect();
        Self::new(tableau, variables, auxiliary_columns)
    }

    /// The tableau.
    pub fn tableau(&self) -> &Tableau<F> {
        &self.tableau
    }

    /// Transform records, one for each original variable.
    pub fn variables(&self) -> &[VariableTransform] {
        &self.variables
    }

    /// Columns to be driven to zero in the first phase.
    pub fn auxiliary_columns(&self) -> &[usize] {
        &self.auxiliary_columns
    }

    /// Get the number of original variables.
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }

    /// Get the number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.tableau.nr_rows()
    }

    /// Split into tableau, variable transforms and auxiliary columns.
    pub fn into_parts(self) -> (Tableau<F>, Vec<VariableTransform>, Vec<usize>) {
        (self.tableau, self.variables, self.auxiliary_columns)
    }
}
