//! Lane rendering widget.
//!
//! This module renders one Kanban column: a header with the column name
//! and card count, followed by a scrolling stack of task cards.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use triage_protocol::Lane;

use super::task_card::render_task_card;
use crate::layout::TASK_CARD_HEIGHT;

/// Position of a lane in the horizontal layout.
///
/// Adjacent lanes share one vertical border instead of drawing two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePosition {
    /// Leftmost lane: rounded left corners, no right border.
    First,
    /// Inner lanes: T-connectors on the left, no right border.
    Middle,
    /// Rightmost lane: T-connectors on the left, rounded right corners.
    Last,
}

impl LanePosition {
    /// Returns the position of lane `index` among `count` lanes.
    #[must_use]
    pub const fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }

    const fn borders(self) -> Borders {
        match self {
            Self::First | Self::Middle => Borders::TOP.union(Borders::BOTTOM).union(Borders::LEFT),
            Self::Last => Borders::ALL,
        }
    }
}

const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// How a lane is drawn relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneFocus {
    /// Whether the cursor is in this lane.
    pub focused: bool,
    /// Whether the lane to the left is focused (its border is shared).
    pub prev_focused: bool,
    /// Selected card index when focused.
    pub selected: Option<usize>,
}

/// Renders a single lane to the buffer.
///
/// Empty lanes show a "No tasks" placeholder.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use triage_protocol::{Column, Lane, Task};
/// use triage_tui::widgets::{LaneFocus, LanePosition, render_lane};
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let task = Task::new(1, "Review budget", today);
/// let mut lane = Lane::new(Column::Pending);
/// lane.tasks.push(&task);
///
/// let area = Rect::new(0, 0, 20, 15);
/// let mut buf = Buffer::empty(area);
/// let focus = LaneFocus { focused: true, prev_focused: false, selected: Some(0) };
///
/// render_lane(&lane, focus, LanePosition::First, today, 7, area, &mut buf);
/// ```
pub fn render_lane(
    lane: &Lane<'_>,
    focus: LaneFocus,
    position: LanePosition,
    today: NaiveDate,
    window_days: u32,
    area: Rect,
    buf: &mut Buffer,
) {
    let (border_style, title_style) = if focus.focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    let border_set = match position {
        LanePosition::First => BORDER_SET_FIRST,
        LanePosition::Middle => BORDER_SET_MIDDLE,
        LanePosition::Last => BORDER_SET_LAST,
    };

    let title = format!("{} ({})", lane.column.display_name(), lane.len());
    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(position.borders())
        .border_set(border_set)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The shared left border follows the focused neighbour.
    if focus.prev_focused && !focus.focused && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        for y in area.y..area.bottom() {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if lane.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    let visible_cards = usize::from((inner_area.height / TASK_CARD_HEIGHT).max(1));
    let selected = focus.selected.filter(|_| focus.focused);
    let scroll_offset = calculate_scroll_offset(selected, lane.len(), visible_cards);

    let card_count = lane.len().saturating_sub(scroll_offset).min(visible_cards);
    let card_areas = Layout::vertical(
        std::iter::repeat_n(Constraint::Length(TASK_CARD_HEIGHT), card_count)
            .chain(std::iter::once(Constraint::Min(0))),
    )
    .split(inner_area);

    for (i, card_area) in card_areas.iter().take(card_count).enumerate() {
        let idx = scroll_offset + i;
        let Some(task) = lane.get(idx) else {
            break;
        };
        render_task_card(
            task,
            selected == Some(idx),
            today,
            window_days,
            *card_area,
            buf,
        );
    }
}

fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .render(area, buf);
}

/// Calculates the scroll offset that keeps the selected card visible.
pub(crate) fn calculate_scroll_offset(
    selected: Option<usize>,
    total: usize,
    visible: usize,
) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);
    selected.saturating_sub(visible / 2).min(max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use triage_protocol::{Column, Task};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    const UNFOCUSED: LaneFocus = LaneFocus {
        focused: false,
        prev_focused: false,
        selected: None,
    };

    #[test]
    fn render_empty_lane() {
        let lane = Lane::new(Column::Pending);
        let area = Rect::new(0, 0, 20, 15);
        let mut buf = Buffer::empty(area);

        render_lane(&lane, UNFOCUSED, LanePosition::First, today(), 7, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Pending (0)"));
        assert!(content.contains("No tasks"));
    }

    #[test]
    fn render_lane_with_tasks() {
        let a = Task::new(1, "Task 1", today());
        let b = Task::new(2, "Task 2", today());
        let mut lane = Lane::new(Column::InProgress);
        lane.tasks.extend([&a, &b]);

        let area = Rect::new(0, 0, 25, 15);
        let mut buf = Buffer::empty(area);
        let focus = LaneFocus {
            focused: true,
            prev_focused: false,
            selected: Some(0),
        };

        render_lane(&lane, focus, LanePosition::Middle, today(), 7, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("In Progress (2)"));
        assert!(content.contains("Task 1"));
        assert!(content.contains("Task 2"));
    }

    #[test]
    fn shared_border_follows_previous_lane_focus() {
        let lane = Lane::new(Column::Review);
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        let focus = LaneFocus {
            prev_focused: true,
            ..UNFOCUSED
        };

        render_lane(&lane, focus, LanePosition::Middle, today(), 7, area, &mut buf);

        let cell = buf.cell((0, 5)).expect("cell should exist");
        assert_eq!(cell.fg, Color::Cyan);
    }

    #[test]
    fn lane_position_of_index() {
        assert_eq!(LanePosition::of(0, 5), LanePosition::First);
        assert_eq!(LanePosition::of(2, 5), LanePosition::Middle);
        assert_eq!(LanePosition::of(4, 5), LanePosition::Last);
    }

    #[test]
    fn scroll_offset_no_selection() {
        assert_eq!(calculate_scroll_offset(None, 10, 3), 0);
    }

    #[test]
    fn scroll_offset_all_visible() {
        assert_eq!(calculate_scroll_offset(Some(2), 3, 5), 0);
    }

    #[test]
    fn scroll_offset_keeps_selection_visible() {
        assert_eq!(calculate_scroll_offset(Some(0), 10, 3), 0);
        assert_eq!(calculate_scroll_offset(Some(5), 10, 3), 4);
        assert_eq!(calculate_scroll_offset(Some(9), 10, 3), 7);
    }
}
