//! Configuration file discovery and reading.
//!
//! # File Formats
//!
//! Files are parsed as JSON5, which also accepts plain JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./triage.json5` or `./triage.json`
//! 2. User: `~/.config/triage/config.json5` or `~/.config/triage/config.json`

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["triage.json5", "triage.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "triage";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Looks in the current directory first, then in the user config directory.
///
/// # Examples
///
/// ```no_run
/// use triage_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = user_config_dir().ok();
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds the configuration file, searching `local_dir` then `user_dir`.
///
/// Returns the first existing candidate, or `None`.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| {
        trace!(path = %path.display(), "probing config candidate");
        path.is_file()
    })
}

/// Returns the default user configuration directory.
///
/// This is typically `~/.config/triage/` on Unix systems.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
///
/// # Examples
///
/// ```no_run
/// use triage_config::persistence::read_config_file;
/// use triage_config::Config;
///
/// # fn main() -> triage_config::Result<()> {
/// let config: Config = read_config_file("triage.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use tempfile::TempDir;
    use triage_protocol::ViewMode;

    #[test]
    fn read_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("triage.json5");
        std::fs::write(
            &path,
            r#"
            {
                // trailing commas and comments are fine
                actor: "Dana",
                default_view: "kanban",
            }
            "#,
        )
        .unwrap();

        let config: Config = read_config_file(&path).unwrap();
        assert_eq!(config.actor, "Dana");
        assert_eq!(config.default_view, ViewMode::Kanban);
    }

    #[test]
    fn read_nonexistent_file() {
        let result: Result<Config> = read_config_file("/nonexistent/triage.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result: Result<Config> = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn find_prefers_local_json5() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(local.path().join("triage.json"), "{}").unwrap();
        std::fs::write(local.path().join("triage.json5"), "{}").unwrap();
        std::fs::write(user.path().join("config.json5"), "{}").unwrap();

        let found = find_config_file_in(local.path(), Some(user.path()));
        assert_eq!(found, Some(local.path().join("triage.json5")));
    }

    #[test]
    fn find_falls_back_to_user_dir() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(user.path().join("config.json"), "{}").unwrap();

        let found = find_config_file_in(local.path(), Some(user.path()));
        assert_eq!(found, Some(user.path().join("config.json")));
    }

    #[test]
    fn find_returns_none_without_candidates() {
        let local = TempDir::new().unwrap();
        assert_eq!(find_config_file_in(local.path(), None), None);
    }

    #[test]
    fn user_config_dir_returns_path() {
        // Environments without a home directory skip this check.
        if dirs::config_dir().is_some() {
            let dir = user_config_dir().unwrap();
            assert!(dir.ends_with(USER_CONFIG_DIR));
        }
    }
}
