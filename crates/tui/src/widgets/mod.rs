//! Widget components for the triage TUI.
//!
//! Each widget is a function that renders borrowed state into a
//! [`Buffer`](ratatui::buffer::Buffer). Widgets hold no state of their own,
//! so they can be tested by rendering into an empty buffer and reading it
//! back.
//!
//! # Modules
//!
//! - [`stats_bar`]: Summary counters
//! - [`filter_bar`]: Search query, selections and match count
//! - [`task_list`]: The list view, with inline task expansion
//! - [`board`]: The Kanban board, one [`lane`] per column
//! - [`task_card`]: A task as a Kanban card
//! - [`status_bar`]: Footer with contextual keybinding hints
//! - [`help`]: Keybinding overlay
//! - [`style`]: Shared colors and text helpers
//!
//! # Color Coding
//!
//! Due labels are colored by [`Urgency`](triage_protocol::Urgency):
//!
//! | Urgency | Color |
//! |---------|-------|
//! | `Critical` | Red |
//! | `High` | Light red |
//! | `Medium` | Yellow |
//! | `Info` | Cyan |
//! | `Neutral` | Gray |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use triage_protocol::{KanbanBoard, Task, seed::seed_store};
//! use triage_tui::widgets;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
//! let store = seed_store(today).unwrap();
//! let visible: Vec<&Task> = store.tasks().iter().collect();
//! let board = KanbanBoard::partition(&visible);
//!
//! let area = Rect::new(0, 0, 120, 30);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&board, widgets::BoardCursor::default(), today, 7, area, &mut buf);
//! ```

pub mod board;
pub mod filter_bar;
pub mod help;
pub mod lane;
pub mod stats_bar;
pub mod status_bar;
pub mod style;
pub mod task_card;
pub mod task_list;

pub use board::{BoardCursor, render_board};
pub use filter_bar::render_filter_bar;
pub use help::render_help_overlay;
pub use lane::{LaneFocus, LanePosition, render_lane};
pub use stats_bar::render_stats_bar;
pub use status_bar::render_status_bar;
pub use style::{
    PROGRESS_BAR_WIDTH, priority_badge, priority_color, progress_bar, star, status_color,
    truncate, urgency_color,
};
pub use task_card::render_task_card;
pub use task_list::{ListCursor, render_task_list};

#[cfg(test)]
mod tests;
