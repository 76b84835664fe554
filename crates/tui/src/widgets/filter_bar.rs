//! Search and filter bar rendering widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use triage_protocol::{Filter, Selection};

/// Cursor glyph appended to the query while it is being edited.
const CURSOR: &str = "▏";

/// Renders the current filter on a single line, with the visible/total
/// count right-aligned.
///
/// # Layout
///
/// ```text
///  / contract▏  Status All  Priority Urgent  Category All           2 of 8
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use triage_protocol::Filter;
/// use triage_tui::widgets::render_filter_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_filter_bar(&Filter::default(), false, 8, 8, area, &mut buf);
/// ```
pub fn render_filter_bar(
    filter: &Filter,
    editing: bool,
    visible: usize,
    total: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    let label_style = Style::default().fg(Color::DarkGray);
    let query_style = if editing {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::styled(" / ", label_style)];
    if filter.query.is_empty() && !editing {
        spans.push(Span::styled(
            "search",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(filter.query.clone(), query_style));
    }
    if editing {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Yellow)));
    }

    push_selection(&mut spans, "Status", &filter.status);
    push_selection(&mut spans, "Priority", &filter.priority);
    push_selection(&mut spans, "Category", &filter.category);

    let count = format!("{visible} of {total} ");
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(count.len()).unwrap_or(u16::MAX)),
    ])
    .areas(area);

    Paragraph::new(Line::from(spans)).render(left, buf);
    let count_style = if visible < total {
        Style::default().fg(Color::Cyan)
    } else {
        label_style
    };
    Paragraph::new(Span::styled(count, count_style))
        .alignment(Alignment::Right)
        .render(right, buf);
}

fn push_selection<T: std::fmt::Display>(
    spans: &mut Vec<Span<'static>>,
    label: &'static str,
    selection: &Selection<T>,
) {
    let value_style = match selection {
        Selection::All => Style::default().fg(Color::Gray),
        Selection::Only(_) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    };
    spans.push(Span::styled(
        format!("  {label} "),
        Style::default().fg(Color::DarkGray),
    ));
    spans.push(Span::styled(selection.to_string(), value_style));
}
