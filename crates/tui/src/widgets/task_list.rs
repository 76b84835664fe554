//! List view rendering widget.
//!
//! One row per task, in filter order. The expanded task is followed by its
//! detail lines: description, owner and activity, the subtask checklist,
//! tags and hours.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use triage_protocol::{DueDate, Status, Task, TaskId};

use super::style::{
    PROGRESS_BAR_WIDTH, fit, priority_badge, priority_style, progress_bar, star, status_color,
    truncate, urgency_color,
};

/// Inner width from which the category column and full progress bar are shown.
const WIDE_LAYOUT_WIDTH: usize = 100;

const CATEGORY_WIDTH: usize = 11;
const STATUS_WIDTH: usize = 11;
const DUE_WIDTH: usize = 15;
const MIN_TITLE_WIDTH: usize = 8;

/// Indentation of the detail lines under an expanded row.
const DETAIL_INDENT: &str = "      ";

/// Selection and expansion within the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCursor {
    /// Selected row.
    pub row: usize,
    /// The expanded task, if any.
    pub expanded: Option<TaskId>,
    /// Subtask cursor inside the expanded task.
    pub subtask: usize,
}

/// Renders the task list to the buffer.
///
/// # Layout
///
/// ```text
/// ╭ Tasks (8) ───────────────────────────────────────────────────────╮
/// │›☆ URG  Renew carrier appointment…  Contracts  Pending  2 days o… │
/// │      Two carrier agreements lapse this month…                    │
/// │      Subtasks 1/3                                                │
/// │      ▸ [x] Collect signed addenda                                │
/// │ ★ HIGH Approve Q3 commission pay…  Finance    In Progr Tomorrow  │
/// ```
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use triage_protocol::Task;
/// use triage_tui::widgets::{ListCursor, render_task_list};
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let tasks = vec![Task::new(1, "Review budget", today)];
/// let visible: Vec<&Task> = tasks.iter().collect();
///
/// let area = Rect::new(0, 0, 100, 10);
/// let mut buf = Buffer::empty(area);
/// render_task_list(&visible, ListCursor::default(), today, 7, area, &mut buf);
/// ```
pub fn render_task_list(
    tasks: &[&Task],
    cursor: ListCursor,
    today: NaiveDate,
    window_days: u32,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Tasks ({}) ", tasks.len()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    block.render(area, buf);

    if tasks.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "No tasks match the current filters",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .render(inner, buf);
        return;
    }

    let width = usize::from(inner.width);
    let mut lines = Vec::new();
    let mut selected_span = (0, 0);

    for (idx, task) in tasks.iter().enumerate() {
        let start = lines.len();
        let is_selected = idx == cursor.row;
        lines.push(task_row(task, is_selected, today, window_days, width));
        if cursor.expanded == Some(task.id) {
            lines.extend(detail_lines(task, cursor.subtask, width));
        }
        if is_selected {
            selected_span = (start, lines.len());
        }
    }

    let offset = scroll_offset(selected_span, usize::from(inner.height));
    Paragraph::new(lines)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
        .render(inner, buf);
}

/// Returns the first visible line so that the selected row (and its detail
/// lines, when they fit) stay on screen.
fn scroll_offset((start, end): (usize, usize), height: usize) -> usize {
    if end <= height {
        0
    } else {
        (end - height).min(start)
    }
}

fn task_row(
    task: &Task,
    is_selected: bool,
    today: NaiveDate,
    window_days: u32,
    width: usize,
) -> Line<'static> {
    let due = DueDate::classify_within(task.due_date, today, window_days);
    let wide = width >= WIDE_LAYOUT_WIDTH;

    let progress = if wide {
        progress_bar(task.progress(), PROGRESS_BAR_WIDTH)
    } else {
        format!("{:>3}%", task.progress())
    };
    let mut fixed = 2 + 1 + 4 + 1 + 1 + STATUS_WIDTH + 1 + DUE_WIDTH + 1 + progress.chars().count();
    if wide {
        fixed += CATEGORY_WIDTH + 1;
    }
    let title_width = width.saturating_sub(fixed).max(MIN_TITLE_WIDTH);

    let title_style = match (is_selected, task.status) {
        (true, _) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (false, Status::Completed) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        (false, _) => Style::default().fg(Color::White),
    };
    let star_style = if task.starred {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(
            if is_selected { "›" } else { " " },
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(star(task.starred), star_style),
        Span::raw(" "),
        Span::styled(priority_badge(task.priority), priority_style(task.priority)),
        Span::raw(" "),
        Span::styled(fit(&task.title, title_width), title_style),
        Span::raw(" "),
    ];
    if wide {
        spans.push(Span::styled(
            fit(task.category.display_name(), CATEGORY_WIDTH),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::raw(" "));
    }
    spans.extend([
        Span::styled(
            fit(task.status.display_name(), STATUS_WIDTH),
            Style::default().fg(status_color(task.status)),
        ),
        Span::raw(" "),
        Span::styled(
            fit(&due.label(), DUE_WIDTH),
            Style::default().fg(urgency_color(due.urgency())),
        ),
        Span::raw(" "),
        Span::styled(progress, Style::default().fg(Color::Green)),
    ]);

    Line::from(spans)
}

fn detail_lines(task: &Task, subtask_cursor: usize, width: usize) -> Vec<Line<'static>> {
    let text_width = width.saturating_sub(DETAIL_INDENT.len());
    let muted = Style::default().fg(Color::Gray);
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    if !task.description.is_empty() {
        lines.push(Line::from(vec![
            Span::raw(DETAIL_INDENT),
            Span::styled(truncate(&task.description, text_width), muted),
        ]));
    }

    lines.push(Line::from(vec![
        Span::raw(DETAIL_INDENT),
        Span::styled("Owner ", label),
        Span::styled(task.assignee.clone(), muted),
        Span::styled("  Created ", label),
        Span::styled(task.created_date.format("%b %-d").to_string(), muted),
        Span::styled("  Comments ", label),
        Span::styled(task.comments.to_string(), muted),
        Span::styled("  Attachments ", label),
        Span::styled(task.attachments.to_string(), muted),
    ]));

    if task.has_subtasks() {
        lines.push(Line::from(vec![
            Span::raw(DETAIL_INDENT),
            Span::styled(
                format!(
                    "Subtasks {}/{}",
                    task.completed_subtasks(),
                    task.subtasks().len()
                ),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for (idx, subtask) in task.subtasks().iter().enumerate() {
            let (check, style) = if subtask.completed {
                ("[x] ", Style::default().fg(Color::Green))
            } else {
                ("[ ] ", Style::default().fg(Color::White))
            };
            let marker = if idx == subtask_cursor { "▸ " } else { "  " };
            lines.push(Line::from(vec![
                Span::raw(DETAIL_INDENT),
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(check, style),
                Span::styled(
                    truncate(&subtask.title, text_width.saturating_sub(6)),
                    style,
                ),
            ]));
        }
    }

    if !task.tags.is_empty() {
        let tags: Vec<String> = task.tags.iter().map(|t| format!("#{t}")).collect();
        lines.push(Line::from(vec![
            Span::raw(DETAIL_INDENT),
            Span::styled(
                truncate(&tags.join(" "), text_width),
                Style::default().fg(Color::Cyan),
            ),
        ]));
    }

    if task.estimated_hours.is_some() || task.actual_hours.is_some() {
        let hours = |h: Option<f32>| h.map_or_else(|| "-".to_string(), |h| format!("{h:.1}h"));
        lines.push(Line::from(vec![
            Span::raw(DETAIL_INDENT),
            Span::styled("Estimated ", label),
            Span::styled(hours(task.estimated_hours), muted),
            Span::styled("  Actual ", label),
            Span::styled(hours(task.actual_hours), muted),
        ]));
    }

    lines
}
