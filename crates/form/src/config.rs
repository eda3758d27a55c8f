use std::str::FromStr;

use crate::error::{FormError, FormResult};

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// Form configuration loaded from environment variables.
///
/// All fields have defaults suitable for local use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Subscriber output format (default: `pretty`).
    pub log_format: LogFormat,
    /// Mask password fields when a sink logs a submission (default: `true`).
    pub redact_secrets: bool,
    /// Clear all fields after a successful submit (default: `true`).
    pub reset_on_success: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            redact_secrets: true,
            reset_on_success: true,
        }
    }
}

impl FormConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default  |
    /// |---------------------------|----------|
    /// | `LOG_FORMAT`              | `pretty` |
    /// | `SIGNUP_REDACT_SECRETS`   | `true`   |
    /// | `SIGNUP_RESET_ON_SUCCESS` | `true`   |
    pub fn from_env() -> FormResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> FormResult<Self> {
        let defaults = Self::default();

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse().map_err(|reason| FormError::Config {
                var: "LOG_FORMAT",
                reason,
            })?,
            None => defaults.log_format,
        };

        let redact_secrets = parse_flag(&lookup, "SIGNUP_REDACT_SECRETS")?
            .unwrap_or(defaults.redact_secrets);
        let reset_on_success = parse_flag(&lookup, "SIGNUP_RESET_ON_SUCCESS")?
            .unwrap_or(defaults.reset_on_success);

        Ok(Self {
            log_format,
            redact_secrets,
            reset_on_success,
        })
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> FormResult<Option<bool>> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        other => Err(FormError::Config {
            var,
            reason: format!("expected a boolean, got `{other}`"),
        }),
    }
}
