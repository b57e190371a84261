//! # Algorithms
pub mod settings;
pub mod two_phase;
