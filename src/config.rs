// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Configuration file support for Titlecase.
//!
//! This module provides functionality for loading and parsing configuration
//! files (`.titlecase.toml`) that choose the default locale and extend the
//! built-in word lists.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Locale, RuleTables, WordLists};

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".titlecase.toml";

/// Configuration for the Titlecase formatter.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Locale used when none is given on the command line (default:
    /// `english`).
    pub locale: Locale,

    /// Treat every input line as an author name (default: false).
    pub author: bool,

    /// Extra entries for the built-in word lists.
    pub words: WordLists,
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Discover and load configuration by searching up the directory tree.
    ///
    /// Starting from `start_dir`, searches for `.titlecase.toml` in each
    /// parent directory until the filesystem root is reached. Returns `None`
    /// if no configuration file is found.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::from_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !current.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// The built-in rule tables extended with the `[words]` section.
    pub fn tables(&self) -> RuleTables {
        RuleTables::builtin().extend(&self.words)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the configuration file.
    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    /// Error parsing the TOML configuration.
    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
}
