//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn general_form()`
//! * `fn canonical_form()`
//! * `fn tableau_form()`
