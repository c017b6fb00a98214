//! # Medibot Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! `medibot ask <TEXT>...` answers a single question and exits. The words are
//! joined with spaces, so quoting is optional. With `--explain` the matched
//! rule and keyword are printed before the reply.
//!
//! ```bash
//! medibot ask I want to book an appointment
//! medibot ask --explain "That's great"
//! ```
//!
use medibot::core::config::Config;
use medibot::core::error::Result;
use medibot::knowledge::KnowledgeBase;
use medibot::responder::{normalize, Responder};
use clap::Parser;
use tracing::info;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question to answer.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Show which rule and keyword produced the reply.
    #[arg(long)]
    pub explain: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Builds the responder from `cfg`, prints the reply (and the explanation if
/// requested) to stdout.
pub async fn handle_ask(args: AskArgs, cfg: &Config) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);

    let responder = Responder::new(cfg.build_knowledge_base()?);
    let question = args.text.join(" ");

    if args.explain {
        println!("{}", explain(responder.knowledge_base(), &question));
    }
    println!("{}", responder.respond(&question));
    Ok(())
}

/// Describes how `question` is resolved against `kb`.
fn explain(kb: &KnowledgeBase, question: &str) -> String {
    let normalized = normalize(question);
    match kb.matching_rule(&normalized) {
        Some((index, rule)) => {
            // The rule matched, so it has a keyword contained in the input.
            let keyword = rule.matching_keyword(&normalized).unwrap_or_default();
            format!("[rule #{} matched on keyword '{}']", index + 1, keyword)
        }
        None => "[no rule matched; fallback response]".to_string(),
    }
}
