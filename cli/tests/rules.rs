//! # Medibot CLI Rules Integration Tests
//!
//! File: cli/tests/rules.rs
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_rules_lists_builtin_knowledge_base() {
    let sandbox = tempdir().unwrap();
    medibot_cmd(sandbox.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Knowledge base: 8 rule(s)")
                .and(predicate::str::contains("  1. hello, hi, hey"))
                .and(predicate::str::contains("  8. thanks, thank you, great"))
                .and(predicate::str::contains("Fallback:")),
        );
}

#[test]
fn test_rules_puts_custom_rules_first() {
    let sandbox = tempdir().unwrap();
    fs::write(
        sandbox.path().join(".medibot.toml"),
        "[[knowledge_base.rules]]\nkeywords = [\"Allergy\"]\nresponse = \"See an allergist.\"\n",
    )
    .unwrap();

    medibot_cmd(sandbox.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Knowledge base: 9 rule(s)")
                .and(predicate::str::contains("  1. allergy\n     See an allergist."))
                .and(predicate::str::contains("  2. hello, hi, hey")),
        );
}
