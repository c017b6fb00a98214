//! # Medibot Rules Command
//!
//! File: cli/src/commands/rules.rs
//!
//! ## Overview
//!
//! `medibot rules` prints the effective knowledge base (custom rules followed
//! by the built-in ones, unless disabled) in evaluation order, then the
//! fallback response.
//!
//! Example output:
//!
//! ```text
//! Knowledge base: 8 rule(s), checked in order. First match wins.
//!
//!   1. hello, hi, hey
//!      Hello! How can I support you today? ...
//!
//! Fallback:
//!      I'm here to provide general information. ...
//! ```
//!
use medibot::core::config::Config;
use medibot::core::error::Result;
use medibot::knowledge::KnowledgeBase;
use clap::Parser;
use std::fmt::Write;
use tracing::info;

/// # Rules Arguments (`RulesArgs`)
///
/// The command takes no options yet; the struct keeps it consistent with the
/// other commands.
#[derive(Parser, Debug)]
pub struct RulesArgs {}

pub async fn handle_rules(_args: RulesArgs, cfg: &Config) -> Result<()> {
    info!("Handling rules command...");
    let kb = cfg.build_knowledge_base()?;
    print!("{}", format_rules(&kb));
    Ok(())
}

fn format_rules(kb: &KnowledgeBase) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "Knowledge base: {} rule(s), checked in order. First match wins.\n",
        kb.rules().len()
    );
    for (index, rule) in kb.rules().iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, rule.keywords().join(", "));
        let _ = writeln!(out, "     {}\n", rule.response());
    }
    let _ = writeln!(out, "Fallback:");
    let _ = writeln!(out, "     {}", kb.fallback_response());
    out
}
