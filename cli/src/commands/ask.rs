//! # replybot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! Implements `replybot ask <WORDS>...`: the words are joined and tokenized like
//! a typed chat line, and a single reply is printed to stdout.
//!
//! ```bash
//! replybot ask my computer is slow
//! replybot ask --seed 7 something unknown   # reproducible default pick
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::engine::input::words_from_line;
use crate::engine::Responder;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Words to respond to.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Seed for the default-response pick, for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn handle_ask(args: AskArgs, cfg: &Config) -> Result<()> {
    let responder = Responder::from_config(&cfg.files);
    println!("{}", answer(&responder, &args));
    Ok(())
}

fn answer<'a>(responder: &'a Responder, args: &AskArgs) -> &'a str {
    let words = words_from_line(&args.words.join(" "));
    debug!("Asking with words {:?}", words);
    match args.seed {
        Some(seed) => responder.generate_response_with(&words, &mut StdRng::seed_from_u64(seed)),
        None => responder.generate_response(&words),
    }
}
