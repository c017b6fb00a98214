//! # Medibot Conversation Session
//!
//! File: cli/src/session.rs
//!
//! ## Overview
//!
//! A `ChatSession` owns the conversation history of one user session, the
//! pending-input buffer, and the visibility state of the chat panel.
//!
//! ## State Machine
//!
//! - `SessionState::Idle`: panel closed. History is kept but not shown.
//! - `SessionState::Active`: panel open and accepting input.
//!
//! `open`, `close` and `toggle` only change visibility; they never touch the
//! history. Submission is not gated on the state: a closed panel has no input
//! field, so the front end simply has no way to submit.
//!
//! On submission the pending input is trimmed. Blank input is a no-op (nothing
//! is appended and the responder is not consulted). Otherwise a user turn with
//! the trimmed text and a bot turn with the reply are appended, in that order,
//! and the buffer is cleared.
//!
//! History starts with a single bot greeting and is append-only for the life
//! of the session.
//!
//! ## Examples
//!
//! ```rust
//! use medibot::knowledge::KnowledgeBase;
//! use medibot::responder::Responder;
//! use medibot::session::{ChatSession, Speaker};
//!
//! let responder = Responder::new(KnowledgeBase::builtin()?);
//! let mut session = ChatSession::new(&responder, "Welcome!");
//! session.open();
//!
//! session.set_input("  Any diet tips?  ");
//! let reply = session.submit().map(str::to_owned);
//!
//! assert!(reply.is_some());
//! assert_eq!(session.history().len(), 3);
//! assert_eq!(session.history().turns()[1].speaker, Speaker::User);
//! assert_eq!(session.history().turns()[1].text, "Any diet tips?");
//! assert_eq!(session.pending_input(), "");
//! # Ok::<(), medibot::core::error::MedibotError>(())
//! ```
//!
use crate::responder::Responder;
use std::fmt;
use tracing::{debug, info};

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Bot => write!(f, "bot"),
        }
    }
}

/// One recorded utterance. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}

/// Ordered, append-only list of turns. Only `ChatSession` can append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Visibility of the chat panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
}

/// # Chat Session (`ChatSession`)
///
/// Conversation state for a single user. Borrows the responder so several
/// sessions can share one knowledge base.
#[derive(Debug)]
pub struct ChatSession<'a> {
    responder: &'a Responder,
    history: ConversationHistory,
    pending_input: String,
    state: SessionState,
}

impl<'a> ChatSession<'a> {
    /// Starts a closed session whose history holds only `greeting` as a bot turn.
    pub fn new(responder: &'a Responder, greeting: impl Into<String>) -> Self {
        let mut history = ConversationHistory::default();
        history.push(ConversationTurn::bot(greeting));
        Self {
            responder,
            history,
            pending_input: String::new(),
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn open(&mut self) {
        self.state = SessionState::Active;
    }

    pub fn close(&mut self) {
        self.state = SessionState::Idle;
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            SessionState::Idle => SessionState::Active,
            SessionState::Active => SessionState::Idle,
        };
        debug!("Chat session is now {:?}", self.state);
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Replaces the pending-input buffer (what the user has typed so far).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// # Submit Pending Input (`submit`)
    ///
    /// Submits the pending-input buffer.
    ///
    /// ## Returns
    ///
    /// * `Some(reply)`: the bot reply that was appended after the user turn.
    /// * `None`: the trimmed input was empty; history and buffer are unchanged.
    pub fn submit(&mut self) -> Option<&str> {
        let trimmed = self.pending_input.trim();
        if trimmed.is_empty() {
            debug!("Ignoring blank submission");
            return None;
        }

        let user_text = trimmed.to_string();
        let reply = self.responder.respond(&user_text);
        info!(
            "Recorded exchange #{}",
            (self.history.len() + 1) / 2
        );
        self.history.push(ConversationTurn::user(user_text));
        self.history.push(ConversationTurn::bot(reply));
        self.pending_input.clear();

        self.history.last().map(|turn| turn.text.as_str())
    }

    /// Convenience for front ends without a separate input buffer:
    /// `set_input(raw_input)` followed by `submit()`.
    pub fn submit_text(&mut self, raw_input: &str) -> Option<&str> {
        self.set_input(raw_input);
        self.submit()
    }
}
