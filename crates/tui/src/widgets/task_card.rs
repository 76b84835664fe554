//! Task card rendering widget.
//!
//! Cards are the Kanban presentation of a task: a bordered box whose border
//! color reflects the priority, holding the title on the first line and
//! the due label and progress on the second.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use triage_protocol::{DueDate, Task};

use super::style::{priority_color, star, truncate, urgency_color};

/// Renders a task card to the buffer.
///
/// # Layout
///
/// ```text
/// ╭──────────────────╮
/// │★ Renew carrier … │
/// │2 days overdue 33%│
/// ╰──────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use triage_protocol::Task;
/// use triage_tui::widgets::render_task_card;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let task = Task::new(1, "Review budget", today);
/// let area = Rect::new(0, 0, 24, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, false, today, 7, area, &mut buf);
/// ```
pub fn render_task_card(
    task: &Task,
    is_selected: bool,
    today: NaiveDate,
    window_days: u32,
    area: Rect,
    buf: &mut Buffer,
) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_style, title_style) = if is_selected {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(priority_color(task.priority)),
            Style::default().fg(Color::White),
        )
    };

    let inner_width = usize::from(area.width.saturating_sub(2));
    let due = DueDate::classify_within(task.due_date, today, window_days);
    let progress = format!(" {}%", task.progress());
    let label_width = inner_width.saturating_sub(progress.chars().count());

    let star_style = if task.starred {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = vec![
        Line::from(vec![
            Span::styled(star(task.starred), star_style),
            Span::raw(" "),
            Span::styled(
                truncate(&task.title, inner_width.saturating_sub(2)),
                title_style,
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{:<label_width$}", truncate(&due.label(), label_width)),
                Style::default().fg(urgency_color(due.urgency())),
            ),
            Span::styled(progress, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
        .render(area, buf);
}
