//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the triage application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use triage_protocol::{CURRENT_ACTOR, DEFAULT_UPCOMING_WINDOW, ViewMode};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file};

/// Shortest accepted upcoming window, in days.
pub const MIN_WINDOW_DAYS: u32 = 1;

/// Longest accepted upcoming window, in days.
pub const MAX_WINDOW_DAYS: u32 = 31;

/// The main configuration struct for the triage application.
///
/// # Examples
///
/// ```
/// use triage_config::Config;
/// use triage_protocol::ViewMode;
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.actor, "You");
/// assert_eq!(config.upcoming_window_days, 7);
///
/// // Create a custom config
/// let config = Config {
///     actor: "Dana".to_string(),
///     default_view: ViewMode::Kanban,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Assignee name that marks a task as "mine" in the stats bar.
    #[serde(default = "default_actor")]
    pub actor: String,

    /// Presentation shown at startup.
    #[serde(default)]
    pub default_view: ViewMode,

    /// Number of days ahead for which due labels read "N days" instead of
    /// an absolute date.
    #[serde(default = "default_window")]
    pub upcoming_window_days: u32,

    /// File that receives log output.
    ///
    /// Logging is disabled when unset, since the terminal belongs to the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_actor() -> String {
    CURRENT_ACTOR.to_string()
}

fn default_window() -> u32 {
    DEFAULT_UPCOMING_WINDOW
}

impl Default for Config {
    fn default() -> Self {
        Self {
            actor: default_actor(),
            default_view: ViewMode::default(),
            upcoming_window_days: default_window(),
            log_file: None,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./triage.json5` or `./triage.json`
    /// 2. User: `~/.config/triage/config.json5` or `~/.config/triage/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use triage_config::Config;
    ///
    /// # async fn example() -> triage_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Showing tasks for {}", config.actor);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use triage_config::Config;
    ///
    /// # fn example() -> triage_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Config = read_config_file(path)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidActor`] for a blank actor and
    /// [`ConfigError::InvalidWindow`] when the window falls outside
    /// [`MIN_WINDOW_DAYS`]..=[`MAX_WINDOW_DAYS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.upcoming_window_days = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.actor.trim().is_empty() {
            return Err(ConfigError::InvalidActor);
        }

        let days = self.upcoming_window_days;
        if days < MIN_WINDOW_DAYS {
            return Err(ConfigError::InvalidWindow {
                days,
                reason: format!("below minimum of {MIN_WINDOW_DAYS}"),
            });
        }
        if days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidWindow {
                days,
                reason: format!("exceeds maximum of {MAX_WINDOW_DAYS}"),
            });
        }

        Ok(())
    }
}
