//! Kanban board rendering widget.
//!
//! This module renders the complete board: one lane per [`Column`],
//! arranged horizontally with equal widths.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};
use triage_protocol::{Column, KanbanBoard};

use super::lane::{LaneFocus, LanePosition, render_lane};

/// Cursor position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCursor {
    /// The focused column.
    pub column: Column,
    /// The selected card within the focused column.
    pub card: usize,
}

/// Renders the complete Kanban board to the buffer.
///
/// # Layout
///
/// ```text
/// ╭Pending (2)─┬In Progress─┬Review (1)──┬Completed───┬Blocked (0)╮
/// │╭──────────╮│╭──────────╮│            │            │No tasks   │
/// ││Task 1    │││Task 3    ││            │            │           │
/// ```
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use triage_protocol::{KanbanBoard, Task};
/// use triage_tui::widgets::{BoardCursor, render_board};
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let tasks = vec![Task::new(1, "Review budget", today)];
/// let visible: Vec<&Task> = tasks.iter().collect();
/// let board = KanbanBoard::partition(&visible);
///
/// let area = Rect::new(0, 0, 100, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, BoardCursor::default(), today, 7, area, &mut buf);
/// ```
pub fn render_board(
    board: &KanbanBoard<'_>,
    cursor: BoardCursor,
    today: NaiveDate,
    window_days: u32,
    area: Rect,
    buf: &mut Buffer,
) {
    let lane_areas = Layout::horizontal([Constraint::Ratio(1, Column::COUNT as u32); Column::COUNT])
        .split(area);

    let focused = cursor.column.index();
    for (i, lane) in board.lanes.iter().enumerate() {
        let focus = LaneFocus {
            focused: i == focused,
            prev_focused: i > 0 && i - 1 == focused,
            selected: (i == focused).then_some(cursor.card),
        };
        render_lane(
            lane,
            focus,
            LanePosition::of(i, Column::COUNT),
            today,
            window_days,
            lane_areas[i],
            buf,
        );
    }
}
