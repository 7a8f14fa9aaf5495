//! # replybot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by replybot. Two kinds of failure
//! can happen while loading the data files, and both are treated as non-fatal by
//! the response engine: the caller logs them and carries on with whatever was
//! loaded so far.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ReplyBotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for application code
//!
//! The loaders in `common::fs::io` and `engine` return `ReplyBotError` directly so
//! callers can tell a missing file from a failed read. The command handlers and
//! configuration code work with `Result<T>` and add context via `anyhow::Context`.
//!
//! ## Examples
//!
//! ```rust
//! use replybot::core::error::ReplyBotError;
//! use std::path::PathBuf;
//!
//! let err = ReplyBotError::ResourceNotFound { path: PathBuf::from("default.txt") };
//! assert_eq!(err.to_string(), "Unable to open default.txt");
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for replybot.
#[derive(Error, Debug)]
pub enum ReplyBotError {
    /// The named data file does not exist.
    #[error("Unable to open {}", .path.display())]
    ResourceNotFound { path: PathBuf },

    /// The data file exists but opening or reading it failed part-way.
    #[error("A problem was encountered reading {}", .path.display())]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ReplyBotError {
    /// Path of the data file involved, if this is a resource error.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ReplyBotError::ResourceNotFound { path } | ReplyBotError::ResourceRead { path, .. } => {
                Some(path.as_path())
            }
            ReplyBotError::Config(_) => None,
        }
    }
}

/// Type alias for Result using anyhow::Error for application code.
pub type Result<T> = anyhow::Result<T>;
