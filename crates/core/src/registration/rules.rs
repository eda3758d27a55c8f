//! Registration rule table.
//!
//! Each rule is a predicate over the whole snapshot that, when it fails,
//! produces one fixed message for one field. Rules are independent, so the
//! table order only decides iteration order, never the outcome.

use std::sync::LazyLock;

use regex::Regex;

use super::dob::is_valid_date_of_birth;
use super::fields::{Field, FieldValues};

pub const FIRST_NAME_REQUIRED: &str = "First Name is required";
pub const LAST_NAME_REQUIRED: &str = "Last Name is required";
pub const INVALID_EMAIL: &str = "Invalid email format";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const INVALID_DOB: &str = "Date of Birth must be in dd/mm/yyyy format";

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Basic mail shape. Deliberately unanchored: any substring of that shape
/// is enough.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// A single field-level rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub message: &'static str,
    pub check: fn(&FieldValues) -> bool,
}

impl FieldRule {
    pub fn passes(&self, values: &FieldValues) -> bool {
        (self.check)(values)
    }
}

/// All registration rules, one per field, in form order.
pub static RULES: [FieldRule; 6] = [
    FieldRule {
        field: Field::FirstName,
        message: FIRST_NAME_REQUIRED,
        check: |v| is_not_blank(&v.first_name),
    },
    FieldRule {
        field: Field::LastName,
        message: LAST_NAME_REQUIRED,
        check: |v| is_not_blank(&v.last_name),
    },
    FieldRule {
        field: Field::Email,
        message: INVALID_EMAIL,
        check: |v| is_email_shaped(&v.email),
    },
    FieldRule {
        field: Field::Password,
        message: PASSWORD_TOO_SHORT,
        check: |v| is_long_enough(&v.password),
    },
    FieldRule {
        field: Field::ConfirmPassword,
        message: PASSWORDS_DO_NOT_MATCH,
        check: |v| v.confirm_password == v.password,
    },
    FieldRule {
        field: Field::Dob,
        message: INVALID_DOB,
        check: |v| is_valid_date_of_birth(&v.dob),
    },
];

/// Names only need something other than whitespace.
pub fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Length is counted in Unicode scalar values (`char`s), not bytes or UTF-16 units.
pub fn is_long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}
