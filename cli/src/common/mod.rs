//! # replybot Common Utilities
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! Shared utilities that are not specific to a single command:
//! - `fs`: Data file access for the response engine.

pub mod fs;
