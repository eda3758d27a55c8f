//! Shared helpers for `signup-form` integration tests.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use signup_core::registration::FieldValues;

/// A snapshot every rule accepts.
pub fn valid_snapshot() -> FieldValues {
    FieldValues {
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john@example.com".into(),
        password: "password123".into(),
        confirm_password: "password123".into(),
        dob: "01/01/2000".into(),
    }
}

/// Run the `signup-form` binary with `stdin` piped in and the given env vars.
pub fn run_binary(stdin: &str, envs: &[(&str, &str)]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_signup-form"))
        .envs(envs.iter().copied())
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    // The binary may exit before reading stdin (e.g. bad config), so a
    // broken pipe here is not a failure.
    let mut pipe = child.stdin.take().expect("stdin is piped");
    let _ = pipe.write_all(stdin.as_bytes());
    drop(pipe);

    child.wait_with_output().expect("binary should finish")
}
