//! Configuration management for the triage application.
//!
//! This crate handles loading and validating configuration from
//! configuration files and built-in defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./triage.json5` or `./triage.json`)
//! 2. User config (`~/.config/triage/config.json5` or `~/.config/triage/config.json`)
//! 3. Built-in defaults
//!
//! Only the first file found is read; values it omits take their defaults.
//!
//! # Format
//!
//! ```json5
//! {
//!   // Whose tasks count as "mine"
//!   "actor": "You",
//!   // "list" or "kanban"
//!   "default_view": "list",
//!   // Due dates within this many days read "N days"
//!   "upcoming_window_days": 7,
//!   // Optional log destination
//!   "log_file": "/tmp/triage.log",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use triage_config::Config;
//!
//! # async fn example() -> triage_config::Result<()> {
//! let config = Config::load().await?;
//! println!("Starting in {} view", config.default_view.display_name());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::{Config, MAX_WINDOW_DAYS, MIN_WINDOW_DAYS};
pub use error::{ConfigError, Result};
