//! # Keyword Response Table
//!
//! File: cli/src/engine/table.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Parses the keyword-responses file into a [`ResponseTable`]. The file is a
//! sequence of entries separated by one or more blank lines:
//!
//! ```text
//! crash,crashes
//! Well, it never crashes on our system.
//! It must have something to do with your system.
//!
//! slow
//! I think this has to do with your hardware.
//! ```
//!
//! The first non-blank line of an entry lists its keywords, separated by commas.
//! Every further non-blank line up to the next blank line (or end of file) is part
//! of the response; those lines are trimmed and joined with single spaces.
//!
//! ## Rules
//!
//! - Whitespace-only lines count as blank.
//! - An entry with keywords but no response lines is dropped.
//! - A keyword listed in several entries maps to the response of the last one.
//! - Keywords are case-sensitive and trimmed; empty keywords are skipped.
//!
use crate::common::fs::io;
use crate::core::error::ReplyBotError;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Keyword to response text lookup. Built once, read-only afterwards.
///
/// All keywords of one entry share the same `Arc<str>`.
#[derive(Debug, Clone, Default)]
pub struct ResponseTable {
    entries: HashMap<String, Arc<str>>,
}

impl ResponseTable {
    /// Parses `contents` as a keyword-responses file.
    pub fn parse(contents: &str) -> Self {
        let mut builder = ResponseTableBuilder::new();
        for line in contents.lines() {
            builder.push_line(line);
        }
        builder.finish()
    }

    /// Loads the table from `path`.
    ///
    /// Always returns a table. On failure the table holds the entries committed
    /// before the error, and the error is returned alongside it.
    pub fn load(path: &Path) -> (Self, Option<ReplyBotError>) {
        let mut builder = ResponseTableBuilder::new();
        let result = io::for_each_line(path, |line| builder.push_line(line));
        match result {
            Ok(lines) => {
                let table = builder.finish();
                info!(
                    "Loaded {} keywords from {} ({} lines)",
                    table.len(),
                    path.display(),
                    lines
                );
                (table, None)
            }
            // The entry being read when the failure happened is not committed.
            Err(e) => (builder.into_partial(), Some(e)),
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entries.get(keyword).map(|response| &**response)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keywords, in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Streaming parser for the keyword-responses format.
///
/// Feed lines with [`push_line`](Self::push_line) and call
/// [`finish`](Self::finish) at end of input.
#[derive(Debug, Default)]
pub struct ResponseTableBuilder {
    table: ResponseTable,
    current_keys: Option<String>,
    response: String,
}

impl ResponseTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            // A blank line always ends the current entry.
            self.commit();
            return;
        }
        match self.current_keys {
            None => self.current_keys = Some(line.to_string()),
            Some(_) => {
                if !self.response.is_empty() {
                    self.response.push(' ');
                }
                self.response.push_str(line.trim());
            }
        }
    }

    /// Commits the final entry, if any, and returns the table.
    pub fn finish(mut self) -> ResponseTable {
        self.commit();
        self.table
    }

    fn into_partial(self) -> ResponseTable {
        self.table
    }

    fn commit(&mut self) {
        let keys = self.current_keys.take();
        let response = std::mem::take(&mut self.response);
        let Some(keys) = keys else {
            return;
        };
        if response.is_empty() {
            debug!("Dropping entry {:?}: no response lines", keys);
            return;
        }
        let response: Arc<str> = Arc::from(response.trim());
        for keyword in keys.split(',').map(str::trim) {
            if keyword.is_empty() {
                continue;
            }
            if let Some(previous) = self
                .table
                .entries
                .insert(keyword.to_string(), Arc::clone(&response))
            {
                debug!("Keyword {:?} redefined (was {:?})", keyword, previous);
            }
        }
    }
}
