//! # replybot Data File I/O
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module opens the plain-text data files read by the response engine and
//! streams them line by line. Failures are classified into the two resource error
//! kinds of [`ReplyBotError`]:
//! - **`ResourceNotFound`**: the file does not exist.
//! - **`ResourceRead`**: the file could not be opened for another reason, or a read
//!   failed part-way (including invalid UTF-8).
//!
//! Lines are handed to the caller as they are read, so a parser that has consumed
//! part of a file keeps its progress when a later read fails.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use replybot::common::fs::io;
//! use std::path::Path;
//!
//! let mut count = 0;
//! let result = io::for_each_line(Path::new("default.txt"), |_line| count += 1);
//! if let Err(e) = result {
//!     eprintln!("{e}");
//! }
//! ```
//!
use crate::core::error::ReplyBotError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Opens `path` for buffered reading.
///
/// # Errors
///
/// Returns `ReplyBotError::ResourceNotFound` if the file does not exist and
/// `ReplyBotError::ResourceRead` for any other open failure.
pub fn open_resource(path: &Path) -> Result<BufReader<File>, ReplyBotError> {
    match File::open(path) {
        Ok(file) => {
            debug!("Opened data file {:?}", path);
            Ok(BufReader::new(file))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ReplyBotError::ResourceNotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(ReplyBotError::ResourceRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Feeds every line of `reader` to `on_line`, without the trailing line ending.
///
/// Stops at the first read error and returns it, attributed to `path`. Lines
/// delivered before the error stay delivered. Returns the number of lines read.
pub fn stream_lines<R, F>(reader: R, path: &Path, mut on_line: F) -> Result<usize, ReplyBotError>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut count = 0;
    for line in reader.lines() {
        let line = line.map_err(|source| ReplyBotError::ResourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        trace!("{:?}:{}: {:?}", path, count + 1, line);
        on_line(&line);
        count += 1;
    }
    Ok(count)
}

/// Opens `path` and feeds each of its lines to `on_line`.
/// See [`open_resource`] and [`stream_lines`] for the error cases.
pub fn for_each_line<F>(path: &Path, on_line: F) -> Result<usize, ReplyBotError>
where
    F: FnMut(&str),
{
    let reader = open_resource(path)?;
    stream_lines(reader, path, on_line)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    /// Lines come back in order, without `\n` or `\r\n` endings.
    #[test]
    fn test_for_each_line_reads_all_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        fs::write(&path, "first\r\nsecond\n\nfourth").unwrap();

        let mut lines = Vec::new();
        let count = for_each_line(&path, |line| lines.push(line.to_string())).unwrap();

        assert_eq!(count, 4);
        assert_eq!(lines, vec!["first", "second", "", "fourth"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent.txt");

        let err = for_each_line(&path, |_| {}).unwrap_err();
        assert!(matches!(err, ReplyBotError::ResourceNotFound { .. }));
        assert!(err.to_string().contains("nonexistent.txt"));
    }

    /// Reading a directory fails after the open, so it is a read error.
    #[test]
    fn test_directory_is_read_error() {
        let dir = tempdir().unwrap();

        let err = for_each_line(dir.path(), |_| {}).unwrap_err();
        assert!(matches!(err, ReplyBotError::ResourceRead { .. }));
    }

    /// Lines before invalid UTF-8 are delivered, then the error is returned.
    #[test]
    fn test_invalid_utf8_keeps_earlier_lines() {
        let data: &[u8] = b"good line\nbad \xff line\nnever seen\n";
        let mut lines = Vec::new();

        let err = stream_lines(Cursor::new(data), Path::new("mem.txt"), |line| {
            lines.push(line.to_string())
        })
        .unwrap_err();

        assert_eq!(lines, vec!["good line"]);
        match err {
            ReplyBotError::ResourceRead { path, source } => {
                assert_eq!(path, Path::new("mem.txt"));
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
