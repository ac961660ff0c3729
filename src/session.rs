//! Interactive session loop
//!
//! Reads lines, forwards them to the responder, and prints each reply behind
//! the speaker label. Generic over the reader and writer so it runs the same
//! against a terminal or an in-memory buffer.

use crate::config::SessionConfig;
use artimus_core::Responder;
use std::io::{self, BufRead, Write};

pub const FAREWELL: &str = "Goodbye, Jerry. I will be here when you return.";
pub const SESSION_ENDED: &str = "Session ended. Memory preserved.";

/// How a session finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed an exit word.
    Farewell,
    /// Input was exhausted.
    InputClosed,
}

/// Startup line. The exit hint names the first configured exit word.
pub fn banner(responder: &Responder, config: &SessionConfig) -> String {
    let exit_word = config.exit_words.first().map(String::as_str).unwrap_or("quit");
    format!(
        "{} v{} initialized. Type '{}' to exit.",
        responder.identity(),
        responder.version(),
        exit_word
    )
}

/// Message printed when the session is cut short (end of input or interrupt).
pub fn session_ended(config: &SessionConfig) -> String {
    format!("\n{}: {}", config.speaker, SESSION_ENDED)
}

pub fn run<R: BufRead, W: Write>(
    responder: &mut Responder,
    config: &SessionConfig,
    mut input: R,
    mut output: W,
) -> io::Result<SessionEnd> {
    writeln!(output, "{}", banner(responder, config))?;
    tracing::info!(creator = responder.creator(), "session started");

    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "{}", session_ended(config))?;
            tracing::info!(heard = responder.memory().len(), "input closed");
            return Ok(SessionEnd::InputClosed);
        }
        let text = strip_line_ending(&line);

        if config.is_exit(text) {
            writeln!(output, "{}: {}", config.speaker, FAREWELL)?;
            tracing::info!(heard = responder.memory().len(), "session ended by user");
            return Ok(SessionEnd::Farewell);
        }

        let reply = responder.hear(text);
        writeln!(output, "{}: {}", config.speaker, reply)?;
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_line_terminators() {
        assert_eq!(strip_line_ending("hi\n"), "hi");
        assert_eq!(strip_line_ending("hi\r\n"), "hi");
        assert_eq!(strip_line_ending("  hi  \n"), "  hi  ");
        assert_eq!(strip_line_ending("no newline"), "no newline");
    }

    #[test]
    fn banner_names_first_exit_word() {
        let r = Responder::default();
        assert_eq!(
            banner(&r, &SessionConfig::default()),
            "Artimus v2.0 initialized. Type 'quit' to exit."
        );

        let custom = SessionConfig {
            exit_words: vec!["bye".into(), "later".into()],
            ..SessionConfig::default()
        };
        assert_eq!(banner(&r, &custom), "Artimus v2.0 initialized. Type 'bye' to exit.");

        let none = SessionConfig {
            exit_words: Vec::new(),
            ..SessionConfig::default()
        };
        assert!(banner(&r, &none).ends_with("Type 'quit' to exit."));
    }

    #[test]
    fn exit_words_ignore_case_and_padding() {
        let config = SessionConfig::default();
        assert!(config.is_exit("quit"));
        assert!(config.is_exit("  EXIT \t"));
        assert!(!config.is_exit("quit now"));
        assert!(!config.is_exit(""));
    }
}
