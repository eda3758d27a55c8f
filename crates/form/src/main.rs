use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signup_core::registration::{Field, FieldValues};
use signup_form::config::{FormConfig, LogFormat};
use signup_form::form::{AccountForm, SubmitOutcome, TITLE};
use signup_form::sink::write_then_log;

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = FormConfig::from_env().context("Failed to load form configuration")?;

    // --- Tracing ---
    // Logs go to stderr; stdout carries the submitted JSON only.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "signup_form=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
    tracing::debug!(?config, "Loaded form configuration");

    // --- Snapshot ---
    let path = std::env::args().nth(1);
    let raw = match &path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot from {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read snapshot from stdin")?;
            buf
        }
    };
    let snapshot: FieldValues =
        serde_json::from_str(&raw).context("Snapshot is not a JSON object of field values")?;

    // --- Submit ---
    let mut form = AccountForm::from_config(&config);
    for field in Field::ALL {
        form.set(field, snapshot.get(field));
    }

    let mut sink = write_then_log(std::io::stdout().lock(), config.redact_secrets);

    tracing::info!(title = TITLE, source = path.as_deref().unwrap_or("stdin"), "Submitting form");
    match form.submit(&mut sink).context("Failed to forward submission")? {
        SubmitOutcome::Submitted(_) => Ok(ExitCode::SUCCESS),
        SubmitOutcome::Rejected => {
            eprintln!("{}", form.render_errors());
            Ok(ExitCode::FAILURE)
        }
    }
}
