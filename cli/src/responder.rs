//! # Medibot Responder
//!
//! File: cli/src/responder.rs
//!
//! ## Overview
//!
//! Turns raw user text into exactly one reply:
//! 1. Trim leading/trailing whitespace.
//! 2. Lowercase. Nothing else is done to the text: no punctuation stripping,
//!    tokenization or stemming.
//! 3. Ask the knowledge base for the first matching rule; return its response
//!    verbatim, or the fallback response when nothing matches.
//!
//! `respond` is total and deterministic. Empty input is never submitted by a
//! `ChatSession`, but if it reaches the responder anyway it simply gets the
//! fallback.
//!
//! ## Examples
//!
//! ```rust
//! use medibot::knowledge::KnowledgeBase;
//! use medibot::responder::Responder;
//!
//! let responder = Responder::new(KnowledgeBase::builtin()?);
//! assert!(responder.respond("  I have a FEVER ").starts_with("For mild fever"));
//! # Ok::<(), medibot::core::error::MedibotError>(())
//! ```
//!
use crate::knowledge::KnowledgeBase;
use tracing::debug;

/// Normalizes raw input for matching: trimmed, then lowercased.
pub fn normalize(raw_input: &str) -> String {
    raw_input.trim().to_lowercase()
}

/// Pure reply function over a fixed `KnowledgeBase`.
#[derive(Debug, Clone)]
pub struct Responder {
    knowledge_base: KnowledgeBase,
}

impl Responder {
    pub fn new(knowledge_base: KnowledgeBase) -> Self {
        Self { knowledge_base }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// # Respond to User Input (`respond`)
    ///
    /// Returns the response of the first rule with a keyword contained in the
    /// normalized input, otherwise the knowledge base fallback. Never fails.
    pub fn respond(&self, raw_input: &str) -> String {
        let normalized = normalize(raw_input);

        match self.knowledge_base.matching_rule(&normalized) {
            Some((index, rule)) => {
                debug!("Input matched knowledge base rule #{}", index + 1);
                rule.response().to_string()
            }
            None => {
                debug!("No rule matched input; using fallback response");
                self.knowledge_base.fallback_response().to_string()
            }
        }
    }
}
