//! # Representation of optimal solutions
//!
//! Once a linear program is solved, a solution is derived. The same type is used for a solution
//! over the columns of a tableau and for one over the variables of the original problem.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::number_types::traits::Real;

/// Values for all variables and the corresponding objective value.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    objective_value: F,
    /// Value for each variable, ordered by index.
    values: Vec<F>,
}

impl<F: Real> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, values: Vec<F>) -> Self {
        Self { objective_value, values }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Values of the variables.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Number of variables.
    pub fn nr_variables(&self) -> usize {
        self.values.len()
    }

    /// Take the values.
    pub fn into_values(self) -> Vec<F> {
        self.values
    }
}

impl<F: Real> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Objective value: {}", self.objective_value)?;
        write!(
            f,
            "{}",
            self.values.iter().enumerate().map(|(i, value)| format!("x{}\t{}", i, value)).join("\n"),
        )
    }
}
