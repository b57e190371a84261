//! # Building blocks to describe linear programs.
use std::ops::Neg;

use num_traits::One;

/// A `Constraint` is a type of (in)equality.
///
/// Read from the constraint to the constraint value: `Less` means `<a, x> <= b`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

/// Multiplying both sides of a constraint with `-1` mirrors the inequality.
impl Neg for ConstraintType {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Equal => Self::Equal,
            Self::Greater => Self::Less,
            Self::Less => Self::Greater,
        }
    }
}

/// Sign restriction on a decision variable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VariableSign {
    /// `x >= 0`, the only kind the tableau knows about.
    NonNegative,
    /// `x <= 0`, represented by the nonnegative variable `-x`.
    NonPositive,
    /// No restriction, represented by the difference of two nonnegative variables.
    Free,
}

impl Default for VariableSign {
    fn default() -> Self {
        VariableSign::NonNegative
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    /// Factor to multiply costs with to get a minimization problem.
    #[must_use]
    pub fn into<F: One + Neg<Output = F>>(self) -> F {
        match self {
            Objective::Maximize => -F::one(),
            Objective::Minimize => F::one(),
        }
    }
}

impl Default for Objective {
    fn default() -> Self {
        Objective::Minimize
    }
}
