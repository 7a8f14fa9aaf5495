//! # Responder
//!
//! File: cli/src/engine/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The [`Responder`] owns a [`ResponseTable`] and a [`DefaultResponses`] list,
//! both loaded once at construction, and answers word sets with a response.
//!
//! ## Selection
//!
//! The input words are probed against the table in the set's own iteration
//! order, which is unspecified. The first recognized word wins, so when several
//! words are recognized any one of their responses may come back. If no word is
//! recognized, a default response is picked uniformly at random.
//!
//! Load failures never reach the caller: they are logged and the responder works
//! with whatever was loaded (see [`Responder::from_files`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use replybot::Responder;
//! use replybot::engine::input::words_from_line;
//!
//! let responder = Responder::new(); // systemresponses.txt + default.txt
//! let reply = responder.generate_response(&words_from_line("my app is slow"));
//! println!("{reply}");
//! ```
//!
use crate::core::config::FilesConfig;
use crate::core::error::ReplyBotError;
use crate::engine::defaults::DefaultResponses;
use crate::engine::table::ResponseTable;
use rand::Rng;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, error};

/// Generates responses from sets of input words.
#[derive(Debug, Clone)]
pub struct Responder {
    table: ResponseTable,
    defaults: DefaultResponses,
}

impl Responder {
    /// Loads `systemresponses.txt` and `default.txt` from the working directory.
    pub fn new() -> Self {
        Self::from_config(&FilesConfig::default())
    }

    /// Loads the two data files named by `files`.
    pub fn from_config(files: &FilesConfig) -> Self {
        Self::from_files(&files.responses_path(), &files.defaults_path())
    }

    /// Loads the keyword table from `responses` and the fallback list from
    /// `defaults`.
    ///
    /// Missing or unreadable files are reported on the error log and otherwise
    /// ignored: the table may end up empty, the default list falls back to a
    /// single built-in response.
    pub fn from_files(responses: &Path, defaults: &Path) -> Self {
        let (table, table_error) = ResponseTable::load(responses);
        report_load_error(table_error);
        let (defaults, defaults_error) = DefaultResponses::load(defaults);
        report_load_error(defaults_error);
        Self::from_parts(table, defaults)
    }

    pub fn from_parts(table: ResponseTable, defaults: DefaultResponses) -> Self {
        Self { table, defaults }
    }

    /// Returns the response for `words`, using the thread-local random generator
    /// for the default case.
    pub fn generate_response(&self, words: &HashSet<String>) -> &str {
        self.generate_response_with(words, &mut rand::thread_rng())
    }

    /// Like [`generate_response`](Self::generate_response), with a caller-supplied
    /// random generator.
    pub fn generate_response_with<R: Rng + ?Sized>(
        &self,
        words: &HashSet<String>,
        rng: &mut R,
    ) -> &str {
        if let Some((word, response)) = words
            .iter()
            .find_map(|word| self.table.get(word).map(|response| (word, response)))
        {
            debug!("Matched keyword {:?}", word);
            return response;
        }
        debug!("No keyword among {} words, picking a default", words.len());
        self.defaults.pick(rng)
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    pub fn defaults(&self) -> &DefaultResponses {
        &self.defaults
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

fn report_load_error(err: Option<ReplyBotError>) {
    if let Some(err) = err {
        let file = err.path().map(|path| path.display().to_string());
        match std::error::Error::source(&err) {
            Some(source) => error!(file = file.as_deref(), "{err}: {source}"),
            None => error!(file = file.as_deref(), "{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::defaults::FALLBACK_RESPONSE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn words(list: &[&str]) -> HashSet<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn write_files(responses: Option<&str>, defaults: Option<&str>) -> TempDir {
        let dir = tempdir().unwrap();
        if let Some(text) = responses {
            fs::write(dir.path().join("systemresponses.txt"), text).unwrap();
        }
        if let Some(text) = defaults {
            fs::write(dir.path().join("default.txt"), text).unwrap();
        }
        dir
    }

    fn load(dir: &TempDir) -> Responder {
        Responder::from_files(
            &dir.path().join("systemresponses.txt"),
            &dir.path().join("default.txt"),
        )
    }

    #[test]
    fn test_recognized_word_among_unknown_words() {
        let dir = write_files(
            Some("hello,hi\nGreetings to you!\n\nbye\nFarewell!\n"),
            Some("Tell me more.\n\nGo on.\n"),
        );
        let responder = load(&dir);

        assert_eq!(
            responder.generate_response(&words(&["hello", "unknown"])),
            "Greetings to you!"
        );
        assert_eq!(responder.generate_response(&words(&["bye"])), "Farewell!");
    }

    #[test]
    fn test_unrecognized_words_give_a_default() {
        let dir = write_files(
            Some("hello,hi\nGreetings to you!\n"),
            Some("Tell me more.\n\nGo on.\n"),
        );
        let responder = load(&dir);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let reply =
                responder.generate_response_with(&words(&["unknown1", "unknown2"]), &mut rng);
            assert!(responder.defaults().contains(reply), "unexpected reply {reply:?}");
        }
    }

    #[test]
    fn test_empty_word_set_gives_a_default() {
        let dir = write_files(Some("hello\nHi!\n"), Some("Only this.\n"));
        let responder = load(&dir);
        assert_eq!(responder.generate_response(&HashSet::new()), "Only this.");
    }

    #[test]
    fn test_recognized_queries_are_deterministic() {
        let dir = write_files(Some("slow\nCheck your hardware.\n"), None);
        let responder = load(&dir);
        let query = words(&["slow"]);

        let first = responder.generate_response(&query).to_string();
        for _ in 0..20 {
            assert_eq!(responder.generate_response(&query), first);
        }
    }

    /// With several recognized words, one of their responses comes back.
    #[test]
    fn test_multiple_matches_return_one_of_them() {
        let dir = write_files(Some("slow\nHardware.\n\ncrash\nNever crashes.\n"), None);
        let responder = load(&dir);

        let reply = responder.generate_response(&words(&["slow", "crash"]));
        assert!(reply == "Hardware." || reply == "Never crashes.");
    }

    #[test]
    fn test_missing_responses_file_falls_through_to_defaults() {
        let dir = write_files(None, Some("Go on.\n"));
        let responder = load(&dir);

        assert!(responder.table().is_empty());
        assert_eq!(responder.generate_response(&words(&["hello"])), "Go on.");
    }

    #[test]
    fn test_missing_defaults_file_uses_fallback() {
        let dir = write_files(Some("hello\nHi!\n"), None);
        let responder = load(&dir);

        assert_eq!(
            responder.defaults().as_slice(),
            &[FALLBACK_RESPONSE.to_string()]
        );
        assert_eq!(
            responder.generate_response(&words(&["what"])),
            FALLBACK_RESPONSE
        );
    }

    #[test]
    fn test_from_config_uses_configured_paths() {
        let dir = write_files(None, None);
        let responses = dir.path().join("answers.txt");
        fs::write(&responses, "free\nIt is free.\n").unwrap();
        let files = FilesConfig {
            responses: responses.to_string_lossy().into_owned(),
            defaults: dir.path().join("none.txt").to_string_lossy().into_owned(),
        };

        let responder = Responder::from_config(&files);
        assert_eq!(responder.generate_response(&words(&["free"])), "It is free.");
    }

    /// The working directory of the test run has no data files.
    #[test]
    fn test_new_without_data_files_still_answers() {
        let responder = Responder::default();
        assert!(!responder.defaults().is_empty());
        assert!(!responder.generate_response(&words(&["anything"])).is_empty());
    }

    #[test]
    fn test_responder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Responder>();
    }
}
