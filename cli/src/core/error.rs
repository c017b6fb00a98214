//! # Medibot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout medibot. There are only
//! two families of failure in the application:
//! - **Configuration errors**: a knowledge base rule or assistant setting is
//!   malformed. These are raised while the knowledge base is being built and
//!   stop the program before any conversation starts.
//! - **I/O errors** in the terminal view layer (reading stdin, reading config
//!   files). These are carried as `anyhow::Error` with context attached.
//!
//! Responding itself never fails: unmatched input produces the fallback reply.
//!
//! ## Architecture
//!
//! - `MedibotError`: A `thiserror` enum for the typed failures above
//! - `Result<T>`: A type alias for `anyhow::Result<T>` used by command handlers
//!
//! ## Examples
//!
//! ```rust
//! use medibot::core::error::MedibotError;
//! use medibot::knowledge::{KnowledgeBase, RuleDefinition};
//!
//! let err = KnowledgeBase::new(vec![RuleDefinition::new(Vec::<String>::new(), "Hi")], "Fallback")
//!     .unwrap_err();
//! assert!(matches!(err, MedibotError::InvalidRule { index: 0, .. }));
//! ```
//!
use thiserror::Error;

/// Custom error type for medibot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MedibotError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// `index` is the zero-based position of the rule in declaration order.
    #[error("Invalid knowledge base rule #{}: {reason}", .index + 1)]
    InvalidRule { index: usize, reason: String },

    #[error("Knowledge base fallback response cannot be empty.")]
    EmptyFallback,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
