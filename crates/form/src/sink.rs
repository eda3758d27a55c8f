//! Destinations for accepted submissions.

use std::io::Write;

use signup_core::registration::{Field, FieldValues};

use crate::error::FormResult;

const REDACTED: &str = "********";

/// Receives the values of every submission that passed validation.
pub trait SubmissionSink {
    fn forward(&mut self, values: &FieldValues) -> FormResult<()>;
}

/// Logs each submission as one structured `tracing` event.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    pub redact_secrets: bool,
}

impl TracingSink {
    pub fn new(redact_secrets: bool) -> Self {
        Self { redact_secrets }
    }

    fn shown<'a>(&self, values: &'a FieldValues, field: Field) -> &'a str {
        if self.redact_secrets && field.is_secret() {
            REDACTED
        } else {
            values.get(field)
        }
    }
}

impl SubmissionSink for TracingSink {
    fn forward(&mut self, values: &FieldValues) -> FormResult<()> {
        tracing::info!(
            first_name = %self.shown(values, Field::FirstName),
            last_name = %self.shown(values, Field::LastName),
            email = %self.shown(values, Field::Email),
            password = %self.shown(values, Field::Password),
            confirm_password = %self.shown(values, Field::ConfirmPassword),
            dob = %self.shown(values, Field::Dob),
            "Account form submitted"
        );
        Ok(())
    }
}

/// Writes each submission as a single line of camelCase JSON.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for JsonLinesSink<W> {
    fn forward(&mut self, values: &FieldValues) -> FormResult<()> {
        serde_json::to_writer(&mut self.writer, values)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory capture.
impl SubmissionSink for Vec<FieldValues> {
    fn forward(&mut self, values: &FieldValues) -> FormResult<()> {
        self.push(values.clone());
        Ok(())
    }
}

/// Fan-out: forwards to both sinks, first to second. Stops at the first error.
impl<A: SubmissionSink, B: SubmissionSink> SubmissionSink for (A, B) {
    fn forward(&mut self, values: &FieldValues) -> FormResult<()> {
        self.0.forward(values)?;
        self.1.forward(values)
    }
}

/// Writes the submission to `writer`, then logs it.
///
/// The log event is only emitted once the write has succeeded.
pub fn write_then_log<W: Write>(
    writer: W,
    redact_secrets: bool,
) -> (JsonLinesSink<W>, TracingSink) {
    (JsonLinesSink::new(writer), TracingSink::new(redact_secrets))
}
