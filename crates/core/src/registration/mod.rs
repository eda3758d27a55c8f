//! Registration form validation engine.
//!
//! Provides the field model, the rule table, the date-of-birth parser and a
//! pure evaluator that aggregates every failing rule in one pass.

pub mod dob;
pub mod evaluator;
pub mod fields;
pub mod rules;

pub use dob::{is_valid_date_of_birth, parse_date_of_birth, DateOfBirth};
pub use evaluator::{validate, FieldErrors, ValidationResult};
pub use fields::{Field, FieldValues};
pub use rules::{FieldRule, RULES};
