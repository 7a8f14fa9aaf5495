//! # Input Reader
//!
//! File: cli/src/engine/input.rs
//! Author: Christi Mahu
//!
//! Turns typed text into the word sets the [`Responder`](crate::Responder)
//! works on. A line is trimmed, lowercased and split on whitespace; duplicates
//! collapse because the result is a set.
//!
use std::collections::HashSet;
use std::io::{self, BufRead};

/// Splits `line` into a set of lowercase words.
pub fn words_from_line(line: &str) -> HashSet<String> {
    line.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Reads word sets line by line from any buffered source (stdin in the chat
/// loop, a cursor in tests).
pub struct InputReader<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// Reads the next line. Returns `Ok(None)` at end of input.
    pub fn read_words(&mut self) -> io::Result<Option<HashSet<String>>> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(words_from_line(&self.buffer)))
    }
}
