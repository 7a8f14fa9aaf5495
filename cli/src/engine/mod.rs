//! # replybot Response Engine
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The response engine turns a set of input words into a canned reply.
//!
//! - `table`: Parses the keyword-responses file into a keyword lookup.
//! - `defaults`: Parses the default-responses file into a non-empty fallback list.
//! - `responder`: Owns both and selects a response for a word set.
//! - `input`: Splits typed lines into word sets.
//!
//! Both data structures are built once when a `Responder` is constructed and are
//! read-only afterwards.
//!
pub mod defaults;
pub mod input;
pub mod responder;
pub mod table;

pub use responder::Responder;
