//! # Medibot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the medibot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading and validating configuration (a malformed knowledge base stops here)
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Ask a single question
//! medibot ask "I have a fever"
//!
//! # Start an interactive conversation with extra logging
//! medibot -vv chat
//!
//! # Show the knowledge base from a custom configuration file
//! medibot --config ~/clinic.toml rules
//! ```
//!
use clap::{Parser, Subcommand};
use medibot::core::config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "medibot",
    about = "Medibot: keyword-matching medical information chatbot",
    long_about = "Answers general health questions with canned guidance.\n\
                  Educational use only. Always seek professional care for concerns.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the project/user configuration.
    #[arg(long, global = true, env = "MEDIBOT_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "r")]
    Rules(commands::rules::RulesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match config::load_config(cli.config.as_deref()) {
        Ok(cfg) => match cli.command {
            Commands::Ask(args) => commands::ask::handle_ask(args, &cfg).await,
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg).await,
            Commands::Rules(args) => commands::rules::handle_rules(args, &cfg).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
