//! Account creation form: holds live field values, validates on submit and
//! forwards accepted submissions to a sink.

use signup_core::registration::{validate, Field, FieldErrors, FieldValues, ValidationResult};

use crate::config::FormConfig;
use crate::error::FormResult;
use crate::sink::SubmissionSink;

/// Heading shown above the form.
pub const TITLE: &str = "Create New Account";

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the sink received these values.
    Submitted(FieldValues),
    /// Validation failed; errors are available through [`AccountForm::errors`].
    Rejected,
}

#[derive(Debug, Clone)]
pub struct AccountForm {
    values: FieldValues,
    errors: FieldErrors,
    reset_on_success: bool,
}

impl AccountForm {
    pub fn new(reset_on_success: bool) -> Self {
        Self {
            values: FieldValues::default(),
            errors: FieldErrors::default(),
            reset_on_success,
        }
    }

    /// Build an empty form that follows `config`'s reset policy.
    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.reset_on_success)
    }

    /// Replace the current value of one input.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Message to show next to `field`, from the last submit attempt.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validate the current values and, if they pass, forward them to `sink`.
    ///
    /// Errors from a previous attempt are always replaced, never merged. The
    /// sink is not touched when validation fails. A sink failure is returned
    /// as an error and the form keeps its values.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> FormResult<SubmitOutcome> {
        match validate(self.values.clone()) {
            ValidationResult::Invalid(errors) => {
                tracing::debug!(
                    failing = errors.len(),
                    fields = ?errors.iter().map(|(f, _)| f.name()).collect::<Vec<_>>(),
                    "Submission rejected"
                );
                self.errors = errors;
                Ok(SubmitOutcome::Rejected)
            }
            ValidationResult::Valid(data) => {
                self.errors = FieldErrors::default();
                sink.forward(&data)?;
                if self.reset_on_success {
                    self.values = FieldValues::default();
                }
                Ok(SubmitOutcome::Submitted(data))
            }
        }
    }

    /// One `"<label>: <message>"` line per failing field, in form order.
    pub fn render_errors(&self) -> String {
        self.errors
            .iter()
            .map(|(field, message)| format!("{}: {message}", field.label()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
