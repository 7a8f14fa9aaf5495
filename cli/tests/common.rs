//! # replybot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs the
//! compiled `replybot` binary inside its own temporary directory, isolated from
//! any real configuration files or environment overrides.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Sample keyword-responses file used across tests.
pub const RESPONSES: &str = "hello,hi\nGreetings to you!\n\nbye\nFarewell!\n\nslow\nI think this has to do with your hardware.\nUpgrading your processor should fix it.\n";

/// Sample default-responses file used across tests.
pub const DEFAULTS: &str = "That sounds interesting.\nTell me more...\n\nCould you describe that?\n";

/// Creates the `replybot` command without any environment or directory setup.
pub fn replybot_cmd() -> Command {
    Command::cargo_bin("replybot").expect("Failed to find replybot binary for testing")
}

/// Creates a temporary working directory containing the given data files.
/// A `.git` directory stops the project-config search from leaving it.
pub fn workspace(responses: Option<&str>, defaults: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    if let Some(text) = responses {
        fs::write(dir.path().join("systemresponses.txt"), text).expect("write responses");
    }
    if let Some(text) = defaults {
        fs::write(dir.path().join("default.txt"), text).expect("write defaults");
    }
    dir
}

/// Creates the `replybot` command running inside `dir`, with the user config
/// directory redirected and file overrides cleared.
pub fn replybot_in(dir: &Path) -> Command {
    let mut cmd = replybot_cmd();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("REPLYBOT_RESPONSES")
        .env_remove("REPLYBOT_DEFAULTS")
        .env_remove("RUST_LOG");
    cmd
}
