//! # Medibot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the application `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use medibot::core::config; // For loading configuration
//! use medibot::core::error::{MedibotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
