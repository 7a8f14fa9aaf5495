//! # replybot
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! A keyword-triggered canned-response generator. Given a set of input words,
//! [`Responder`] returns the response associated with a recognized keyword, or a
//! randomly chosen default reply when no word is recognized.
//!
//! Responses come from two plain-text files, loaded once at construction:
//! - `systemresponses.txt`: entries of a comma-separated keyword line followed by
//!   response lines, separated by blank lines;
//! - `default.txt`: blank-line separated paragraphs, one default reply each.
//!
//! ```rust,no_run
//! use replybot::Responder;
//! use std::collections::HashSet;
//!
//! let responder = Responder::new();
//! let words: HashSet<String> = ["hello".to_string()].into_iter().collect();
//! println!("{}", responder.generate_response(&words));
//! ```
//!
//! The `replybot` binary wraps the library with a chat loop (see `commands`).

pub mod commands;
pub mod common;
pub mod core;
pub mod engine;

pub use engine::Responder;
