//! # Default Responses
//!
//! File: cli/src/engine/defaults.rs
//! Author: Christi Mahu
//!
//! Parses the default-responses file: every run of non-blank lines is one
//! paragraph, and every paragraph is one fallback response. Lines of a paragraph
//! are joined with single spaces and the paragraph is trimmed as a whole.
//!
//! The resulting [`DefaultResponses`] is never empty. If the file is missing,
//! unreadable, or has no paragraphs, it holds [`FALLBACK_RESPONSE`] alone.
//!
use crate::common::fs::io;
use crate::core::error::ReplyBotError;
use rand::Rng;
use std::path::Path;
use tracing::info;

/// Used when no default responses could be loaded.
pub const FALLBACK_RESPONSE: &str = "Could you elaborate on that?";

/// Non-empty, ordered list of fallback responses.
#[derive(Debug, Clone)]
pub struct DefaultResponses {
    responses: Vec<String>,
}

impl DefaultResponses {
    /// Builds the list from already parsed paragraphs, adding the fallback if
    /// `responses` is empty.
    pub fn from_responses(mut responses: Vec<String>) -> Self {
        if responses.is_empty() {
            info!("No default responses loaded, using {:?}", FALLBACK_RESPONSE);
            responses.push(FALLBACK_RESPONSE.to_string());
        }
        Self { responses }
    }

    /// Parses `contents` as a default-responses file.
    pub fn parse(contents: &str) -> Self {
        let mut builder = ParagraphBuilder::default();
        for line in contents.lines() {
            builder.push_line(line);
        }
        Self::from_responses(builder.finish())
    }

    /// Loads the list from `path`, returning any load error alongside it.
    pub fn load(path: &Path) -> (Self, Option<ReplyBotError>) {
        let mut builder = ParagraphBuilder::default();
        let result = io::for_each_line(path, |line| builder.push_line(line));
        match result {
            Ok(_) => {
                let paragraphs = builder.finish();
                info!(
                    "Loaded {} default responses from {}",
                    paragraphs.len(),
                    path.display()
                );
                (Self::from_responses(paragraphs), None)
            }
            Err(e) => (Self::from_responses(builder.paragraphs), Some(e)),
        }
    }

    /// Picks one response uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.gen_range(0..self.responses.len());
        &self.responses[index]
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Returns `false` once constructed; the list always holds at least the fallback.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn contains(&self, response: &str) -> bool {
        self.responses.iter().any(|r| r == response)
    }

    /// Responses in file order.
    pub fn as_slice(&self) -> &[String] {
        &self.responses
    }
}

#[derive(Debug, Default)]
struct ParagraphBuilder {
    paragraphs: Vec<String>,
    pending: String,
}

impl ParagraphBuilder {
    fn push_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.flush();
        } else {
            if !self.pending.is_empty() {
                self.pending.push(' ');
            }
            self.pending.push_str(line);
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let paragraph = std::mem::take(&mut self.pending);
            self.paragraphs.push(paragraph.trim().to_string());
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.paragraphs
    }
}
