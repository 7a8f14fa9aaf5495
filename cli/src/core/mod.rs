//! # replybot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the response engine and
//! the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the application `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use replybot::core::config; // For resolving data file paths and chat texts
//! use replybot::core::error::{ReplyBotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
