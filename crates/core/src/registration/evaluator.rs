//! Rule evaluator — pure logic, no I/O.

use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::fields::{Field, FieldValues};
use super::rules::RULES;

/// Failing fields mapped to their messages, at most one entry per field.
///
/// Only the evaluator builds these, and only when at least one rule failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

/// Outcome of validating one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every rule passed; carries the snapshot exactly as submitted.
    Valid(FieldValues),
    /// At least one rule failed.
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Invalid(errors) => Some(errors),
            ValidationResult::Valid(_) => None,
        }
    }

    pub fn data(&self) -> Option<&FieldValues> {
        match self {
            ValidationResult::Valid(values) => Some(values),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn into_data(self) -> Option<FieldValues> {
        match self {
            ValidationResult::Valid(values) => Some(values),
            ValidationResult::Invalid(_) => None,
        }
    }
}

/// Serializes as `{"ok": true, "data": {..}}` or `{"ok": false, "errors": {..}}`.
impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        match self {
            ValidationResult::Valid(values) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("data", values)?;
            }
            ValidationResult::Invalid(errors) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

/// Validate a registration snapshot against every rule.
///
/// All rules run against the same snapshot; every failure is reported, not
/// just the first. On success the snapshot is handed back untouched (names
/// are trimmed only for the blank check).
///
/// # Examples
///
/// ```
/// use signup_core::registration::{validate, Field, FieldValues};
///
/// let result = validate(FieldValues::default());
/// let errors = result.errors().unwrap();
/// assert_eq!(errors.len(), 5);
/// assert_eq!(errors.get(Field::FirstName), Some("First Name is required"));
/// assert!(!errors.contains(Field::ConfirmPassword));
/// ```
pub fn validate(values: FieldValues) -> ValidationResult {
    let errors: BTreeMap<Field, &'static str> = RULES
        .iter()
        .filter(|rule| !rule.passes(&values))
        .map(|rule| (rule.field, rule.message))
        .collect();

    if errors.is_empty() {
        ValidationResult::Valid(values)
    } else {
        ValidationResult::Invalid(FieldErrors(errors))
    }
}
