//! # Medibot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The terminal front end of medibot. Each command defines its own Clap
//! arguments struct and an async handler that receives the already-validated
//! configuration from `main.rs`.
//!
//! ## Commands
//!
//! - `ask`: answer a single question and exit
//! - `chat`: interactive conversation over stdin/stdout
//! - `rules`: print the effective knowledge base
//!

/// One-shot question answering (`medibot ask`).
pub mod ask;
/// Interactive conversation loop (`medibot chat`).
pub mod chat;
/// Knowledge base listing (`medibot rules`).
pub mod rules;
