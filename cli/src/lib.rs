//! # Medibot Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Medibot answers free-text health questions with one of a small set of
//! canned responses chosen by keyword matching, or with a fallback response
//! when nothing matches. It is an information widget, not a diagnostic tool.
//!
//! ## Architecture
//!
//! - `knowledge`: ordered keyword rules plus the fallback (static, validated once)
//! - `responder`: normalizes input and picks the first matching rule
//! - `session`: conversation history, pending input and panel visibility
//! - `core`: configuration and error handling shared by the `medibot` binary
//!
//! Control flow: the front end hands raw text to a `ChatSession`, which asks
//! the `Responder` for a reply and records both turns. Nothing in the library
//! depends on the front end.
//!
pub mod core;
pub mod knowledge;
pub mod responder;
pub mod session;
