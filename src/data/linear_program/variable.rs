//! # Mapping tableau columns back to the original variables
//!
//! The tableau only knows nonnegative variables. Variables of the original problem that are
//! nonpositive or free are rewritten when the tableau is built; the records in this module
//! describe how, such that the solution can be translated back.
use crate::data::number_types::traits::Real;

/// How an original variable is represented in the tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransformKind {
    /// The column is the variable itself.
    Identity,
    /// The column holds `-x`.
    Flipped,
    /// The column holds the positive part, and a second column holds the negative part.
    Split {
        /// Column index of the negative part.
        negative: usize,
    },
}

/// Per-variable record of how an original variable is represented.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VariableTransform {
    /// Index of the variable in the original problem, which is also its (primary) column index in
    /// the tableau.
    pub column: usize,
    /// How that column relates to the variable.
    pub kind: TransformKind,
}

impl VariableTransform {
    /// A variable that is represented as-is.
    pub fn identity(column: usize) -> Self {
        Self { column, kind: TransformKind::Identity }
    }

    /// A variable represented by its negation.
    pub fn flipped(column: usize) -> Self {
        Self { column, kind: TransformKind::Flipped }
    }

    /// A free variable, represented by the difference of two columns.
    pub fn split(column: usize, negative: usize) -> Self {
        debug_assert_ne!(column, negative);

        Self { column, kind: TransformKind::Split { negative } }
    }

    /// Largest column index this record refers to.
    pub fn max_column(&self) -> usize {
        match self.kind {
            TransformKind::Split { negative } => self.column.max(negative),
            _ => self.column,
        }
    }

    /// All columns this record refers to.
    pub fn columns(&self) -> impl Iterator<Item = usize> {
        let negative = match self.kind {
            TransformKind::Split { negative } => Some(negative),
            TransformKind::Identity | TransformKind::Flipped => None,
        };

        std::iter::once(self.column).chain(negative)
    }

    /// Value of the original variable given a value for each tableau column.
    pub fn value<F: Real>(&self, column_values: &[F]) -> F {
        let primary = column_values[self.column];
        match self.kind {
            TransformKind::Identity => primary,
            TransformKind::Flipped => -primary,
            TransformKind::Split { negative } => primary - column_values[negative],
        }
    }
}

/// Translate values of tableau columns into values of the original variables.
///
/// # Arguments
///
/// * `transforms`: One record for each original variable, ordered by original index.
/// * `column_values`: Value of each column of the tableau, slack and auxiliary columns included.
///
/// # Return value
///
/// Values of the original variables; the slack and auxiliary columns are dropped.
pub fn reconstruct<F: Real>(transforms: &[VariableTransform], column_values: &[F]) -> Vec<F> {
    debug_assert!(transforms.iter().enumerate().all(|(i, transform)| transform.column == i));
    debug_assert!(transforms.iter().all(|transform| transform.max_column() < column_values.len()));

    transforms.iter()
        .map(|transform| transform.value(column_values))
        .collect()
}
