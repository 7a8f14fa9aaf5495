//! # replybot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `replybot` CLI and the
//! arguments they share.
//!
//! ## Commands
//!
//! - `chat`: Interactive session reading lines from stdin (the default command)
//! - `ask`: Answers the words given on the command line once
//! - `inspect`: Shows what was loaded from the data files
//!
//! Every command resolves the configuration the same way: configuration files
//! first, then the `--responses` / `--defaults` flags (or their environment
//! variables) on top. See [`FileArgs::resolve_config`].
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use clap::Args;
use std::path::PathBuf;

/// Contains the handler and arguments for `replybot ask`.
pub mod ask;
/// Contains the handler and arguments for `replybot chat`.
pub mod chat;
/// Contains the handler and arguments for `replybot inspect`.
pub mod inspect;

/// # Data File Arguments (`FileArgs`)
///
/// Global flags overriding the configured data file locations.
#[derive(Args, Debug, Default, Clone)]
pub struct FileArgs {
    /// Keyword-responses file (default: systemresponses.txt).
    #[arg(long, global = true, env = "REPLYBOT_RESPONSES", value_name = "PATH")]
    pub responses: Option<PathBuf>,

    /// Default-responses file (default: default.txt).
    #[arg(long, global = true, env = "REPLYBOT_DEFAULTS", value_name = "PATH")]
    pub defaults: Option<PathBuf>,
}

impl FileArgs {
    /// Loads the configuration files and applies these flags on top.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut cfg = config::load_config()?;
        self.apply(&mut cfg)?;
        Ok(cfg)
    }

    fn apply(&self, cfg: &mut Config) -> Result<()> {
        cfg.apply_file_overrides(self.responses.as_deref(), self.defaults.as_deref());
        config::finalize_config(cfg)
    }
}
