//! # Error reporting
//!
//! A solve either produces a solution or ends in one of the errors below. None of them come with a
//! partial result; callers are expected to tell them apart (an infeasible problem is reported
//! differently than an unbounded one).
use thiserror::Error;

/// Everything that can end a solve without a finite optimum.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SolveError {
    /// The input didn't satisfy the preconditions of the algorithm. Detected before any pivot.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// A column with a negative reduced cost has no positive coefficient, so the objective can be
    /// decreased without limit.
    #[error("The linear program is unbounded (column {column} can increase without limit)")]
    Unbounded {
        /// Index of the improving column.
        column: usize,
    },
    /// The first phase ended with a positive auxiliary cost: there is no feasible point.
    #[error("The linear program is infeasible (minimal auxiliary cost {cost})")]
    Infeasible {
        /// Optimal value of the phase one problem.
        cost: f64,
    },
    /// A phase needed more pivots than allowed by the settings.
    #[error("Iteration limit of {limit} reached")]
    IterationLimit {
        /// The configured maximum number of pivots per phase.
        limit: usize,
    },
}

/// A violated precondition.
#[allow(missing_docs)]
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum InputError {
    #[error("the tableau needs an objective row and a right-hand side column")]
    EmptyTableau,
    #[error("the rows don't all have the same length")]
    RaggedRows,
    #[error("the basis has {basis} indices, but there are {constraints} constraint rows")]
    BasisSize { basis: usize, constraints: usize },
    #[error("basis index {index} is out of range for {nr_columns} columns")]
    BasisIndexOutOfRange { index: usize, nr_columns: usize },
    #[error("column {0} appears in the basis more than once")]
    DuplicateBasisIndex(usize),
    #[error("basic column {column} of row {row} is not a unit vector")]
    NotUnitColumn { row: usize, column: usize },
    #[error("basic column {0} has a nonzero reduced cost")]
    NonzeroBasicCost(usize),
    #[error("constraint row {0} has a negative right-hand side")]
    NegativeRightHandSide(usize),
    #[error("auxiliary column {index} is out of range for {nr_columns} columns")]
    AuxiliaryColumnOutOfRange { index: usize, nr_columns: usize },
    #[error("variable {variable} refers to column {column}, which doesn't fit the tableau")]
    VariableColumn { variable: usize, column: usize },
    #[error("column {column} of variable {variable} is also listed as auxiliary")]
    AuxiliaryVariableColumn { variable: usize, column: usize },
    #[error("the tolerance of the settings differs from the one the tableau was created with")]
    ToleranceMismatch,
    #[error("expected {expected} {what}, got {actual}")]
    Dimension {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}
