//! # replybot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `replybot chat`, the interactive session. It prints the welcome
//! text, then repeatedly prompts with `> `, reads a line and prints the reply.
//! The session ends when a line contains the quit word (`bye` by default) or at
//! end of input, and closes with the farewell text.
//!
//! ## Examples
//!
//! ```bash
//! replybot chat
//! echo "my computer is slow" | replybot --responses data/systemresponses.txt
//! ```
//!
use crate::core::config::{self, ChatConfig, Config};
use crate::core::error::Result;
use crate::engine::input::InputReader;
use crate::engine::Responder;
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Word that ends the session (overrides chat.quit_word).
    #[arg(long, value_name = "WORD")]
    pub quit_word: Option<String>,
}

/// Runs the chat loop on stdin/stdout.
pub fn handle_chat(args: ChatArgs, cfg: &Config) -> Result<()> {
    let chat = chat_settings(&args, cfg)?;
    let responder = Responder::from_config(&cfg.files);
    info!(
        "Chat session started ({} keywords, {} default responses)",
        responder.table().len(),
        responder.defaults().len()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_chat(&responder, &chat, stdin.lock(), stdout.lock())
}

/// Applies `--quit-word` on top of the configured chat texts. The result goes
/// through the same validation as the configuration files.
fn chat_settings(args: &ChatArgs, cfg: &Config) -> Result<ChatConfig> {
    let mut cfg = cfg.clone();
    if let Some(word) = &args.quit_word {
        cfg.chat.quit_word = word.clone();
    }
    config::finalize_config(&mut cfg)?;
    Ok(cfg.chat)
}

/// The chat loop over arbitrary input and output streams.
///
/// `{quit_word}` in the welcome text is replaced by the quit word.
pub fn run_chat<R: BufRead, W: Write>(
    responder: &Responder,
    chat: &ChatConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    let mut reader = InputReader::new(input);
    let welcome = chat.welcome.replace("{quit_word}", &chat.quit_word);
    writeln!(output, "{}", welcome).context("Failed to write welcome message")?;

    let mut exchanges = 0usize;
    loop {
        write!(output, "> ").context("Failed to write prompt")?;
        output.flush().context("Failed to flush stdout")?;

        let words = match reader.read_words().context("Failed to read input")? {
            Some(words) => words,
            None => {
                // Keep the farewell off the prompt line.
                writeln!(output).context("Failed to write output")?;
                break;
            }
        };
        if words.contains(&chat.quit_word) {
            break;
        }
        let reply = responder.generate_response(&words);
        writeln!(output, "{}: {}", chat.name, reply).context("Failed to write reply")?;
        exchanges += 1;
    }

    debug!("Chat session ended after {} exchanges", exchanges);
    writeln!(output, "{}", chat.farewell).context("Failed to write farewell message")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::defaults::DefaultResponses;
    use crate::engine::table::ResponseTable;
    use std::io::Cursor;

    fn responder() -> Responder {
        Responder::from_parts(
            ResponseTable::parse("slow\nCheck your hardware.\n"),
            DefaultResponses::parse("Tell me more.\n"),
        )
    }

    fn run(input: &str, chat: &ChatConfig) -> String {
        let mut output = Vec::new();
        run_chat(&responder(), chat, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_chat_replies_until_quit_word() {
        let chat = ChatConfig::default();
        let out = run("It is SLOW\nhmm\nok bye now\nnever read\n", &chat);

        assert!(out.starts_with("Welcome to the support system."));
        assert!(out.contains("Please type 'bye' to exit"));
        assert!(out.contains("replybot: Check your hardware."));
        assert!(out.contains("replybot: Tell me more."));
        assert!(out.trim_end().ends_with(&chat.farewell));
        assert_eq!(out.matches("replybot: ").count(), 2);
    }

    #[test]
    fn test_chat_ends_at_end_of_input() {
        let chat = ChatConfig {
            farewell: "See you.".into(),
            ..Default::default()
        };
        let out = run("slow\n", &chat);
        assert!(out.contains("Check your hardware."));
        assert!(out.ends_with("See you.\n"));
    }

    #[test]
    fn test_custom_quit_word() {
        let chat = ChatConfig {
            quit_word: "exit".into(),
            ..Default::default()
        };
        let out = run("bye\nexit\n", &chat);
        assert_eq!(out.matches("replybot: Tell me more.").count(), 1);
        assert!(out.contains("Please type 'exit' to exit"));
        assert!(!out.contains("{quit_word}"));
    }

    #[test]
    fn test_quit_word_flag_is_normalized() {
        let args = ChatArgs::try_parse_from(["chat", "--quit-word", " Stop "]).unwrap();
        let chat = chat_settings(&args, &Config::default()).unwrap();
        assert_eq!(chat.quit_word, "stop");
    }

    #[test]
    fn test_quit_word_flag_is_validated() {
        for word in ["good bye", "", "   "] {
            let args = ChatArgs {
                quit_word: Some(word.to_string()),
            };
            let err = chat_settings(&args, &Config::default()).unwrap_err();
            assert!(
                err.to_string().contains("Configuration validation failed"),
                "quit word {word:?} was accepted"
            );
        }
    }

    #[test]
    fn test_parses_quit_word_flag() {
        let args = ChatArgs::try_parse_from(["chat", "--quit-word", "exit"]).unwrap();
        assert_eq!(args.quit_word.as_deref(), Some("exit"));
    }
}
