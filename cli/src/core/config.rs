//! # replybot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module resolves the settings replybot runs with: the locations of the two
//! data files (keyword responses and default responses) and the texts used by the
//! interactive chat loop.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags / environment variables (applied by the command layer via
//!    [`Config::apply_file_overrides`])
//! 2. Project-specific `.replybot.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/replybot/config.toml`
//! 4. Default values defined in the code
//!
//! After merging, `~` in file paths is expanded and the result is validated.
//!
//! ## Examples
//!
//! ```toml
//! [files]
//! responses = "~/bot/systemresponses.txt"
//! defaults = "~/bot/default.txt"
//!
//! [chat]
//! quit_word = "exit"
//! ```
//!
//! ```rust,no_run
//! let cfg = replybot::core::config::load_config()?;
//! println!("responses from {}", cfg.files.responses_path().display());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{ReplyBotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Default name of the keyword-responses file.
pub const DEFAULT_RESPONSES_FILE: &str = "systemresponses.txt";
/// Default name of the default-responses file.
pub const DEFAULT_DEFAULTS_FILE: &str = "default.txt";

const PROJECT_CONFIG_FILENAME: &str = ".replybot.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Locations of the two data files. Relative paths are resolved against the
/// process working directory.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    /// Keyword-responses file (can use ~).
    #[serde(default = "default_responses_file")]
    pub responses: String,
    /// Default-responses file (can use ~).
    #[serde(default = "default_defaults_file")]
    pub defaults: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            responses: default_responses_file(),
            defaults: default_defaults_file(),
        }
    }
}

impl FilesConfig {
    pub fn responses_path(&self) -> PathBuf {
        PathBuf::from(&self.responses)
    }

    pub fn defaults_path(&self) -> PathBuf {
        PathBuf::from(&self.defaults)
    }
}

/// Texts used by `replybot chat`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Name printed in front of each reply.
    #[serde(default = "default_chat_name")]
    pub name: String,
    /// Printed once when the session starts. `{quit_word}` is replaced by the
    /// quit word.
    #[serde(default = "default_welcome")]
    pub welcome: String,
    /// Printed once when the session ends.
    #[serde(default = "default_farewell")]
    pub farewell: String,
    /// Typing a line containing this word ends the session.
    #[serde(default = "default_quit_word")]
    pub quit_word: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            name: default_chat_name(),
            welcome: default_welcome(),
            farewell: default_farewell(),
            quit_word: default_quit_word(),
        }
    }
}

fn default_responses_file() -> String {
    DEFAULT_RESPONSES_FILE.to_string()
}
fn default_defaults_file() -> String {
    DEFAULT_DEFAULTS_FILE.to_string()
}
fn default_chat_name() -> String {
    "replybot".to_string()
}
fn default_welcome() -> String {
    "Welcome to the support system. Please tell us about your problem.\n\
     We will assist you with any problem you might have.\n\
     Please type '{quit_word}' to exit our system."
        .to_string()
}
fn default_farewell() -> String {
    "Nice talking to you. Bye...".to_string()
}
fn default_quit_word() -> String {
    "bye".to_string()
}

impl Config {
    /// Replaces the data file locations with explicitly given ones (CLI flags or
    /// environment variables). `None` keeps the configured value.
    pub fn apply_file_overrides(&mut self, responses: Option<&Path>, defaults: Option<&Path>) {
        if let Some(path) = responses {
            debug!("Overriding responses file with {}", path.display());
            self.files.responses = path.to_string_lossy().into_owned();
        }
        if let Some(path) = defaults {
            debug!("Overriding defaults file with {}", path.display());
            self.files.defaults = path.to_string_lossy().into_owned();
        }
    }
}

/// Loads the configuration for the current working directory and the current
/// user, merged and validated.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    load_config_in(&current_dir, user_config_path().as_deref())
}

/// Loads the configuration starting the project search at `start_dir` and using
/// `user_config` (if any) as the user-level file.
pub fn load_config_in(start_dir: &Path, user_config: Option<&Path>) -> Result<Config> {
    let user = match user_config {
        Some(path) if path.is_file() => {
            info!("Loading user configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        Some(path) => {
            debug!("User configuration file not found at {}", path.display());
            None
        }
        None => None,
    };
    let project = match find_project_config_path(start_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found.");
            None
        }
    };
    let mut merged = merge_configs(user.unwrap_or_default(), project);
    normalize_config(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

/// Validates and normalizes a configuration that was assembled in code, e.g.
/// after [`Config::apply_file_overrides`].
pub fn finalize_config(config: &mut Config) -> Result<()> {
    normalize_config(config);
    validate_config(config).context("Configuration validation failed")
}

fn user_config_path() -> Option<PathBuf> {
    match ProjectDirs::from("", "", "replybot") {
        Some(dirs) => Some(dirs.config_dir().join("config.toml")),
        None => {
            warn!("Could not determine user config directory.");
            None
        }
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

// A project value wins only when it differs from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let pick = |project: String, user: String, default: &String| {
        if &project != default {
            project
        } else {
            user
        }
    };
    Config {
        files: FilesConfig {
            responses: pick(
                project.files.responses,
                user.files.responses,
                &defaults.files.responses,
            ),
            defaults: pick(
                project.files.defaults,
                user.files.defaults,
                &defaults.files.defaults,
            ),
        },
        chat: ChatConfig {
            name: pick(project.chat.name, user.chat.name, &defaults.chat.name),
            welcome: pick(project.chat.welcome, user.chat.welcome, &defaults.chat.welcome),
            farewell: pick(
                project.chat.farewell,
                user.chat.farewell,
                &defaults.chat.farewell,
            ),
            quit_word: pick(
                project.chat.quit_word,
                user.chat.quit_word,
                &defaults.chat.quit_word,
            ),
        },
    }
}

// Input words are lowercased before lookup, so the quit word is too.
fn normalize_config(config: &mut Config) {
    config.files.responses = shellexpand::tilde(&config.files.responses).into_owned();
    config.files.defaults = shellexpand::tilde(&config.files.defaults).into_owned();
    config.chat.quit_word = config.chat.quit_word.trim().to_lowercase();
}

fn validate_config(config: &Config) -> Result<()> {
    if config.files.responses.trim().is_empty() {
        return Err(anyhow!(ReplyBotError::Config(
            "files.responses cannot be empty.".to_string()
        )));
    }
    if config.files.defaults.trim().is_empty() {
        return Err(anyhow!(ReplyBotError::Config(
            "files.defaults cannot be empty.".to_string()
        )));
    }
    if config.chat.quit_word.is_empty() {
        return Err(anyhow!(ReplyBotError::Config(
            "chat.quit_word cannot be empty.".to_string()
        )));
    }
    if config.chat.quit_word.contains(char::is_whitespace) {
        return Err(anyhow!(ReplyBotError::Config(format!(
            "chat.quit_word must be a single word, got '{}'.",
            config.chat.quit_word
        ))));
    }
    Ok(())
}
