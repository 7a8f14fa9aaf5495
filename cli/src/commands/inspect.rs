//! # replybot Inspect Command
//!
//! File: cli/src/commands/inspect.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `replybot inspect`, a check for the data files. It prints the
//! resolved file locations and what was loaded from them, then either every
//! keyword (sorted) or the response for one keyword.
//!
//! ## Examples
//!
//! ```bash
//! replybot inspect
//! replybot inspect --keyword crash
//! ```
//!
//! Example output:
//!
//! ```text
//! Responses file:    systemresponses.txt
//! Defaults file:     default.txt
//! Keywords:          3
//! Default responses: 2
//!
//!   bye
//!   hello
//!   hi
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::engine::Responder;
use clap::Parser;
use std::fmt::Write as _;

/// # Inspect Arguments (`InspectArgs`)
#[derive(Parser, Debug, Default)]
pub struct InspectArgs {
    /// Show the response for this keyword instead of listing all keywords.
    /// Fails if the keyword is unknown.
    #[arg(long, short)]
    pub keyword: Option<String>,
}

pub fn handle_inspect(args: InspectArgs, cfg: &Config) -> Result<()> {
    let responder = Responder::from_config(&cfg.files);
    print!("{}", render_report(&responder, cfg, args.keyword.as_deref())?);
    Ok(())
}

fn render_report(responder: &Responder, cfg: &Config, keyword: Option<&str>) -> Result<String> {
    let table = responder.table();
    let mut report = String::new();
    writeln!(report, "Responses file:    {}", cfg.files.responses)?;
    writeln!(report, "Defaults file:     {}", cfg.files.defaults)?;
    writeln!(report, "Keywords:          {}", table.len())?;
    writeln!(report, "Default responses: {}", responder.defaults().len())?;
    writeln!(report)?;

    match keyword {
        Some(keyword) => match table.get(keyword) {
            Some(response) => writeln!(report, "{keyword}: {response}")?,
            None => anyhow::bail!(
                "Keyword '{}' is not defined in {}",
                keyword,
                cfg.files.responses
            ),
        },
        None => {
            let mut keywords: Vec<&str> = table.keywords().collect();
            keywords.sort_unstable();
            for keyword in keywords {
                writeln!(report, "  {keyword}")?;
            }
        }
    }
    Ok(report)
}
