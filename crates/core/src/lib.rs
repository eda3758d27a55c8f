//! Pure-logic core of the account registration form.
//!
//! Holds the field model and the validation engine. Nothing in this crate
//! performs I/O; callers decide what to do with a validation result.

pub mod error;
pub mod registration;
