//! # Representing linear programs
//!
//! This module contains different representations of linear programs. Linear programs in general
//! form may contain any type of constraint and variable, while linear programs in canonical form
//! are a tableau with a feasible basis, ready for the simplex method.
pub mod canonical_form;
pub mod elements;
pub mod general_form;
pub mod solution;
pub mod variable;
