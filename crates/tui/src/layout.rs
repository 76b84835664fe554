//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components.

/// Height of the header bar in rows.
///
/// The header displays the application title, the active view and the help
/// cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the stats bar in rows.
pub const STATS_BAR_HEIGHT: u16 = 1;

/// Height of the search and filter bar in rows.
pub const FILTER_BAR_HEIGHT: u16 = 1;

/// Height of the footer in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each Kanban card in rows.
///
/// This includes the border (2 rows) and content (2 rows for the title and
/// the due label).
pub const TASK_CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message. The bars
/// take 3 rows, which leaves the task view room for its border and a few
/// rows.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 5 lanes; each lane needs at least 12 characters for
/// borders and truncated titles to be readable.
pub const MIN_WIDTH: u16 = 60;
