/// Errors raised around a form submission.
///
/// Validation failures are not errors here: they come back as
/// [`SubmitOutcome::Rejected`](crate::form::SubmitOutcome::Rejected).
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// An environment variable held a value that could not be used.
    #[error("Invalid configuration for {var}: {reason}")]
    Config { var: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for fallible form operations.
pub type FormResult<T> = Result<T, FormError>;
