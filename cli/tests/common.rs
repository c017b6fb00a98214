//! # Medibot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests. Each test file that declares
//! `mod common;` is compiled as a separate test crate, so not every helper is
//! used everywhere.
//!

#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get Medibot Command (`medibot_cmd`)
///
/// An `assert_cmd::Command` for the compiled `medibot` binary, isolated from
/// the developer's own configuration: `HOME`, `XDG_CONFIG_HOME` and the working
/// directory all point at `sandbox`, and `MEDIBOT_CONFIG` is cleared.
///
/// ## Panics
/// Panics if the `medibot` binary cannot be found via `Command::cargo_bin`.
pub fn medibot_cmd(sandbox: &Path) -> Command {
    let mut cmd = Command::cargo_bin("medibot").expect("Failed to find medibot binary for testing");
    cmd.env("HOME", sandbox)
        .env("XDG_CONFIG_HOME", sandbox.join(".config"))
        .env_remove("MEDIBOT_CONFIG")
        .env_remove("RUST_LOG")
        .current_dir(sandbox);
    cmd
}
