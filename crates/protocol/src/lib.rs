//! Shared protocol types and the triage engine for the triage application.
//!
//! This crate defines the task model used across all triage components,
//! together with the rules that turn a task collection into what the
//! dashboard shows: filtering, summary counters, due-date classification,
//! subtask-driven progress and the Kanban partition.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, priority/status/category and the `Task` struct
//! - [`store`]: The owned task collection and its mutations
//! - [`filter`]: Search query and dropdown filters
//! - [`stats`]: Workload counters over the whole collection
//! - [`due`]: Relative due-date labels and urgency
//! - [`board`]: Kanban columns and the `KanbanBoard` partition
//! - [`view`]: View modes and the memoized filtered view
//! - [`seed`]: Built-in task data
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Filtering the seed data and reading the counters:
//!
//! ```
//! use chrono::NaiveDate;
//! use triage_protocol::{Filter, Stats, seed::seed_store};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
//! let store = seed_store(today).unwrap();
//!
//! let filter = Filter::new().with_query("contract");
//! let visible = filter.apply(store.tasks());
//! assert!(!visible.is_empty());
//!
//! // Counters describe the whole collection, not the search.
//! let stats = Stats::collect(store.tasks(), today);
//! assert_eq!(stats.total, 8);
//! assert!(stats.overdue >= 1);
//! ```

pub mod board;
pub mod due;
pub mod error;
pub mod filter;
pub mod message;
pub mod seed;
pub mod stats;
pub mod store;
pub mod task;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use board::{Column, KanbanBoard, Lane};
pub use due::{DEFAULT_UPCOMING_WINDOW, DueBucket, DueDate, Urgency};
pub use error::{ProtocolError, Result};
pub use filter::{Filter, Selection};
pub use message::Message;
pub use stats::Stats;
pub use store::TaskStore;
pub use task::{CURRENT_ACTOR, Category, Priority, Status, Subtask, SubtaskId, Task, TaskId};
pub use view::{FilteredView, ViewMode};
