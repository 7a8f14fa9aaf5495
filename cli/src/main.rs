//! # replybot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the replybot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Resolving the configuration and routing to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start a chat session (the default command)
//! replybot
//!
//! # One-off answer using a specific responses file, with load logging
//! replybot -v --responses data/systemresponses.txt ask why is it slow
//! ```
//!
use clap::{Parser, Subcommand};
use replybot::commands::{self, FileArgs};
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "replybot",
    about = "Keyword-triggered canned responses",
    long_about = "Answers typed input with canned responses keyed on words.\n\
                  Unrecognized input gets a randomly chosen default reply.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    files: FileArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive session on stdin/stdout (default).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Print a single response for the given words.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Show what was loaded from the data files.
    #[command(alias = "i")]
    Inspect(commands::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
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

    let command_result = cli.files.resolve_config().and_then(|cfg| {
        match cli.command.unwrap_or(Commands::Chat(Default::default())) {
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg),
            Commands::Ask(args) => commands::ask::handle_ask(args, &cfg),
            Commands::Inspect(args) => commands::inspect::handle_inspect(args, &cfg),
        }
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
