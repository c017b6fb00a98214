//! # Medibot Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! `medibot chat` runs an interactive conversation in the terminal. It is the
//! view layer around a `ChatSession`: it prints the banner and greeting, reads
//! one line per submission, and prints the bot reply.
//!
//! ## In-chat Commands
//!
//! - `bye`, `quit`, `exit`: end the conversation (EOF does the same)
//! - `/history`: print the conversation so far
//! - `/close`: close the chat panel (input is ignored until `/open`)
//! - `/open`: reopen the chat panel
//!
//! Blank lines are ignored.
//!
//! ## Architecture
//!
//! `handle_chat` wires stdin/stdout into `run_chat`, which is generic over the
//! reader and writer so the loop can be exercised from tests with in-memory
//! buffers.
//!
use anyhow::Context;
use clap::Parser;
use medibot::core::config::Config;
use medibot::core::error::Result;
use medibot::knowledge::builtin::DISCLAIMER;
use medibot::responder::Responder;
use medibot::session::{ChatSession, Speaker};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const EXIT_WORDS: [&str; 3] = ["bye", "quit", "exit"];

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Do not print the title and disclaimer banner.
    #[arg(long)]
    pub no_banner: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds the responder from `cfg` and runs the conversation on stdin/stdout
/// until the user leaves or input ends.
pub async fn handle_chat(args: ChatArgs, cfg: &Config) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let responder = Responder::new(cfg.build_knowledge_base()?);
    let mut session = ChatSession::new(&responder, cfg.greeting());
    let banner = (!args.no_banner).then(|| cfg.assistant_name());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_chat(&mut session, banner, stdin, &mut stdout).await?;

    info!(
        "Chat ended after {} turn(s)",
        session.history().len()
    );
    Ok(())
}

/// # Run Chat Loop (`run_chat`)
///
/// Opens the session, prints the banner (when `banner` holds the assistant
/// name) and the greeting, then processes `input` line by line.
///
/// ## Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub async fn run_chat<R, W>(
    session: &mut ChatSession<'_>,
    banner: Option<&str>,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    session.open();

    if let Some(name) = banner {
        writeln!(output, "{}\n{}", name, DISCLAIMER)?;
        writeln!(output, "Type 'bye' to quit, '/history' to review the conversation.\n")?;
    }
    if let Some(greeting) = session.history().last() {
        writeln!(output, "Bot: {}", greeting.text)?;
    }

    let mut lines = input.lines();
    loop {
        if session.is_open() {
            write!(output, "You: ")?;
        }
        output.flush().context("Failed to flush output")?;

        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read chat input")?
        else {
            debug!("Input closed; ending chat");
            writeln!(output)?;
            break;
        };

        let command = line.trim();
        if EXIT_WORDS.iter().any(|word| command.eq_ignore_ascii_case(word)) {
            writeln!(output, "Bot: Goodbye! Take care.")?;
            break;
        }

        match command {
            "/history" => print_history(session, output)?,
            "/close" => {
                session.close();
                writeln!(output, "(chat closed; type /open to continue)")?;
            }
            "/open" => {
                session.open();
                writeln!(output, "(chat reopened)")?;
            }
            _ if !session.is_open() => {
                debug!("Ignoring input while chat is closed");
            }
            _ => {
                if let Some(reply) = session.submit_text(&line) {
                    writeln!(output, "Bot: {}", reply)?;
                }
            }
        }
    }

    output.flush().context("Failed to flush output")?;
    Ok(())
}

fn print_history<W: Write>(session: &ChatSession<'_>, output: &mut W) -> Result<()> {
    writeln!(output, "--- conversation ({} turns) ---", session.history().len())?;
    for turn in session.history().iter() {
        let label = match turn.speaker {
            Speaker::User => "You",
            Speaker::Bot => "Bot",
        };
        writeln!(output, "{}: {}", label, turn.text)?;
    }
    writeln!(output, "---")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medibot::knowledge::builtin::{FALLBACK_RESPONSE, GREETING};
    use medibot::knowledge::KnowledgeBase;

    fn responder() -> Responder {
        Responder::new(KnowledgeBase::builtin().unwrap())
    }

    async fn run(session: &mut ChatSession<'_>, input: &str) -> String {
        let mut output = Vec::new();
        run_chat(session, None, input.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_replies_and_records_turns() {
        let responder = responder();
        let mut session = ChatSession::new(&responder, GREETING);

        let output = run(&mut session, "xyz random text\n").await;

        assert!(output.starts_with(&format!("Bot: {}\n", GREETING)));
        assert!(output.contains(&format!("Bot: {}\n", FALLBACK_RESPONSE)));
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history().turns()[1].text, "xyz random text");
    }

    #[tokio::test]
    async fn test_blank_lines_are_ignored() {
        let responder = responder();
        let mut session = ChatSession::new(&responder, GREETING);

        let output = run(&mut session, "\n   \n\t\n").await;

        assert_eq!(session.history().len(), 1);
        assert_eq!(output.matches("Bot:").count(), 1);
    }

    #[tokio::test]
    async fn test_exit_word_stops_reading() {
        let responder = responder();
        let mut session = ChatSession::new(&responder, GREETING);

        let output = run(&mut session, "hello\nBYE\nfever\n").await;

        assert!(output.contains("Goodbye"));
        assert_eq!(session.history().len(), 3);
    }

    #[tokio::test]
    async fn test_closed_chat_ignores_input() {
        let responder = responder();
        let mut session = ChatSession::new(&responder, GREETING);

        let output = run(&mut session, "/close\nfever\n/open\nfever\n").await;

        assert!(output.contains("(chat closed; type /open to continue)"));
        assert!(output.contains("(chat reopened)"));
        assert_eq!(session.history().len(), 3);
        assert!(session.is_open());
    }

    #[tokio::test]
    async fn test_history_command_prints_transcript() {
        let responder = responder();
        let mut session = ChatSession::new(&responder, GREETING);

        let output = run(&mut session, "I need a workout plan\n/history\n").await;

        assert!(output.contains("--- conversation (3 turns) ---"));
        assert!(output.contains("You: I need a workout plan\n"));
        assert_eq!(session.history().len(), 3);
    }

    #[tokio::test]
    async fn test_banner_is_printed_when_requested() {
        let responder = responder();
        let mut session = ChatSession::new(&responder, GREETING);
        let mut output = Vec::new();

        run_chat(&mut session, Some("Medical Chatbot"), "".as_bytes(), &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Medical Chatbot\n"));
        assert!(output.contains(DISCLAIMER));
    }

    #[test]
    fn test_parses_no_banner_flag() {
        let args = ChatArgs::try_parse_from(["chat", "--no-banner"]).unwrap();
        assert!(args.no_banner);
    }
}
