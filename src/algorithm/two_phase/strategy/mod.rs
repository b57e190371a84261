//! # Strategies
//!
//! Decisions the simplex method has a choice in.
pub mod pivot_rule;
