//! Terminal UI for the triage dashboard.
//!
//! This crate provides a Ratatui-based terminal interface for browsing,
//! filtering and updating a task collection, either as a list or as a
//! Kanban board.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Selection, expansion and filter state
//! - [`widgets`]: Rendering functions for each part of the screen
//! - [`layout`]: Shared layout measurements
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use triage_protocol::seed::seed_store;
//! use triage_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let today = Local::now().date_naive();
//!     let mut app = App::new(seed_store(today)?, today);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::AppState;
