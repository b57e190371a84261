//! # Linear programs in "general form"
//!
//! Data structure for manipulation of linear programs. Any combination of constraint types and
//! variable sign restrictions is allowed. Before it can be solved, a problem in general form is
//! brought into canonical form.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;
use log::debug;

use crate::algorithm::settings::Settings;
use crate::algorithm::two_phase;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::elements::{ConstraintType, Objective, VariableSign};
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::variable::VariableTransform;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Real;
use crate::error::{InputError, SolveError};

/// A linear program in general form.
///
/// The problem is `min` (or `max`) `c^T x` subject to `a_i^T x (<=, =, >=) b_i`, with a sign
/// restriction for each variable.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralForm<F> {
    /// Which direction does the objective function go?
    objective: Objective,
    /// Coefficient of each variable in the objective function.
    cost: Vec<F>,

    /// All coefficients, a row for each constraint.
    constraints: DenseMatrix<F>,
    /// All right-hands sides of the constraints.
    b: Vec<F>,
    /// The type of each constraint, ordered by index.
    constraint_types: Vec<ConstraintType>,

    /// The sign restriction of each variable, ordered by index.
    variables: Vec<VariableSign>,
}

impl<F: Real> GeneralForm<F> {
    /// Create a new linear program in general form.
    ///
    /// # Arguments
    ///
    /// * `objective`: Whether to minimize or maximize.
    /// * `augmented`: The first row contains the cost of each variable followed by a placeholder
    /// zero, which is not used. Every following row contains the coefficients of a constraint,
    /// followed by its right-hand side.
    /// * `variables`: Sign restriction for each variable.
    /// * `constraint_types`: Type for each constraint.
    pub fn new(
        objective: Objective,
        augmented: Vec<Vec<F>>,
        variables: Vec<VariableSign>,
        constraint_types: Vec<ConstraintType>,
    ) -> Result<Self, InputError> {
        let augmented = DenseMatrix::from_data(augmented).ok_or(InputError::RaggedRows)?;
        if augmented.nr_rows() == 0 || augmented.nr_columns() == 0 {
            return Err(InputError::EmptyTableau);
        }

        let nr_variables = augmented.nr_columns() - 1;
        let nr_constraints = augmented.nr_rows() - 1;
        if variables.len() != nr_variables {
            return Err(InputError::Dimension {
                what: "variable signs",
                expected: nr_variables,
                actual: variables.len(),
            });
        }
        if constraint_types.len() != nr_constraints {
            return Err(InputError::Dimension {
                what: "constraint types",
                expected: nr_constraints,
                actual: constraint_types.len(),
            });
        }

        let cost = augmented.row(0)[..nr_variables].to_vec();
        let b = augmented.column(nr_variables)[1..].to_vec();
        let mut constraints = DenseMatrix::zeros(nr_constraints, nr_variables);
        for i in 0..nr_constraints {
            constraints.set_row(i, &augmented.row(i + 1)[..nr_variables]);
        }

        Ok(Self { objective, cost, constraints, b, constraint_types, variables })
    }

    /// Convert this linear program into canonical form.
    ///
    /// Columns of the resulting tableau are ordered as follows:
    ///
    /// * the original variables, negated if they are nonpositive;
    /// * the negative part of each free variable;
    /// * a slack (`<=`) or surplus (`>=`) column for each inequality;
    /// * an auxiliary column for each `>=` and `=` constraint.
    ///
    /// Rows with a negative right-hand side are negated first, which mirrors their type. The
    /// initial basis consists of the slack of each `<=` row and the auxiliary column of each other
    /// row. The objective is expressed as a minimization.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Tolerance the tableau will use for all comparisons.
    pub fn standardize(&self, tolerance: Tolerance<F>) -> Result<CanonicalForm<F>, InputError> {
        let nr_variables = self.nr_variables();
        let free = self.variables.iter()
            .positions(|&sign| sign == VariableSign::Free)
            .collect::<Vec<_>>();
        let nr_structural = nr_variables + free.len();

        let rows = (0..self.nr_constraints())
            .map(|i| {
                let coefficients = (0..nr_variables)
                    .map(|j| self.sign_factor(j) * self.constraints.get_value(i, j))
                    .chain(free.iter().map(|&j| -self.constraints.get_value(i, j)))
                    .collect::<Vec<_>>();

                if self.b[i] < F::zero() {
                    let coefficients = coefficients.into_iter().map(|v| -v).collect::<Vec<_>>();
                    (coefficients, -self.constraint_types[i], -self.b[i])
                } else {
                    (coefficients, self.constraint_types[i], self.b[i])
                }
            })
            .collect::<Vec<(Vec<F>, _, _)>>();

        let nr_slack = rows.iter()
            .filter(|(_, constraint_type, _)| *constraint_type != ConstraintType::Equal)
            .count();
        let nr_auxiliary = rows.iter()
            .filter(|(_, constraint_type, _)| *constraint_type != ConstraintType::Less)
            .count();
        let nr_columns = nr_structural + nr_slack + nr_auxiliary;

        let mut matrix = DenseMatrix::zeros(1 + rows.len(), nr_columns + 1);

        let direction = self.objective.into::<F>();
        for j in 0..nr_variables {
            matrix.set_value(0, j, direction * self.sign_factor(j) * self.cost[j]);
        }
        for (k, &j) in free.iter().enumerate() {
            matrix.set_value(0, nr_variables + k, -direction * self.cost[j]);
        }

        let mut basis_indices = Vec::with_capacity(rows.len());
        let mut auxiliary_columns = Vec::with_capacity(nr_auxiliary);
        let mut next_slack = nr_structural;
        let mut next_auxiliary = nr_structural + nr_slack;
        for (i, (coefficients, constraint_type, rhs)) in rows.into_iter().enumerate() {
            let row = i + 1;
            for (j, value) in coefficients.into_iter().enumerate() {
                matrix.set_value(row, j, value);
            }
            matrix.set_value(row, nr_columns, rhs);

            match constraint_type {
                ConstraintType::Less => {
                    matrix.set_value(row, next_slack, F::one());
                    basis_indices.push(next_slack);
                    next_slack += 1;
                },
                ConstraintType::Greater => {
                    matrix.set_value(row, next_slack, -F::one());
                    next_slack += 1;
                    matrix.set_value(row, next_auxiliary, F::one());
                    basis_indices.push(next_auxiliary);
                    auxiliary_columns.push(next_auxiliary);
                    next_auxiliary += 1;
                },
                ConstraintType::Equal => {
                    matrix.set_value(row, next_auxiliary, F::one());
                    basis_indices.push(next_auxiliary);
                    auxiliary_columns.push(next_auxiliary);
                    next_auxiliary += 1;
                },
            }
        }

        let mut nr_free = 0;
        let variables = self.variables.iter()
            .enumerate()
            .map(|(j, sign)| match sign {
                VariableSign::NonNegative => VariableTransform::identity(j),
                VariableSign::NonPositive => VariableTransform::flipped(j),
                VariableSign::Free => {
                    nr_free += 1;
                    VariableTransform::split(j, nr_variables + nr_free - 1)
                },
            })
            .collect();

        debug!(
            "Standardized {} constraints on {} variables into a tableau with {} columns, {} auxiliary",
            self.nr_constraints(), nr_variables, nr_columns, auxiliary_columns.len(),
        );

        let tableau = Tableau::new(matrix, basis_indices, tolerance)?;
        CanonicalForm::new(tableau, variables, auxiliary_columns)
    }

    /// Solve this linear program.
    ///
    /// # Return value
    ///
    /// The optimal value of each variable, and the objective value in the direction of the
    /// problem: for a maximization problem, this is the maximum.
    pub fn solve(&self, settings: &Settings<F>) -> Result<Solution<F>, SolveError> {
        let problem = self.standardize(settings.tolerance())?;
        let solution = two_phase::solve(problem, settings)?;

        let objective_value = self.objective.into::<F>() * solution.objective_value();
        Ok(Solution::new(objective_value, solution.into_values()))
    }

    /// Value of the objective function for a value of each variable.
    pub fn objective_value(&self, values: &[F]) -> F {
        debug_assert_eq!(values.len(), self.nr_variables());

        self.cost.iter().zip(values).map(|(&c, &x)| c * x).sum()
    }

    /// Whether a value for each variable satisfies all constraints and sign restrictions, up to a
    /// tolerance.
    pub fn is_feasible(&self, values: &[F], tolerance: Tolerance<F>) -> bool {
        debug_assert_eq!(values.len(), self.nr_variables());

        let signs_ok = self.variables.iter().zip(values).all(|(sign, &x)| match sign {
            VariableSign::NonNegative => !tolerance.is_negative(x),
            VariableSign::NonPositive => !tolerance.is_positive(x),
            VariableSign::Free => true,
        });

        let constraints_ok = (0..self.nr_constraints()).all(|i| {
            let lhs = self.constraints.row(i).iter().zip(values).map(|(&a, &x)| a * x).sum::<F>();
            let difference = lhs - self.b[i];
            match self.constraint_types[i] {
                ConstraintType::Less => !tolerance.is_positive(difference),
                ConstraintType::Greater => !tolerance.is_negative(difference),
                ConstraintType::Equal => tolerance.is_zero(difference),
            }
        });

        signs_ok && constraints_ok
    }

    /// `-1` for nonpositive variables, which are replaced by their negation.
    fn sign_factor(&self, j: usize) -> F {
        match self.variables[j] {
            VariableSign::NonPositive => -F::one(),
            VariableSign::NonNegative | VariableSign::Free => F::one(),
        }
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// The number of constraints in this linear program.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// The number of variables in this linear program.
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }
}

impl<F: Real> Display for GeneralForm<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let direction = match self.objective {
            Objective::Maximize => "maximize",
            Objective::Minimize => "minimize",
        };
        writeln!(f, "{} {}", direction, self.cost.iter().join(" "))?;

        for i in 0..self.nr_constraints() {
            let constraint_type = match self.constraint_types[i] {
                ConstraintType::Less => "<=",
                ConstraintType::Equal => "==",
                ConstraintType::Greater => ">=",
            };
            writeln!(f, "{} {} {}", self.constraints.row(i).iter().join(" "), constraint_type, self.b[i])?;
        }

        write!(f, "{}", self.variables.iter().map(|sign| format!("{:?}", sign)).join(" "))
    }
}
