//! # replybot Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! Filesystem helpers shared by the response engine. Currently a single
//! submodule:
//! - `io`: Opening data files and streaming their lines with classified errors.

pub mod io;
