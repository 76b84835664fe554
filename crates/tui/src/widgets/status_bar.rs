//! Status bar rendering widget.
//!
//! The footer shows the current view and the keybindings that apply in the
//! current input mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use triage_protocol::ViewMode;

const SEARCH_HINTS: &[(&str, &str)] = &[
    ("Enter/Esc", "Done"),
    ("Backspace", "Delete"),
    ("Ctrl+C", "Quit"),
];

const LIST_HINTS: &[(&str, &str)] = &[
    ("↑↓", "Select"),
    ("Enter", "Expand"),
    ("Tab/x", "Subtasks"),
    ("*", "Star"),
    ("/", "Search"),
    ("s/p/c", "Filter"),
    ("v", "Board"),
    ("?", "Help"),
];

const KANBAN_HINTS: &[(&str, &str)] = &[
    ("←→↑↓", "Navigate"),
    ("*", "Star"),
    ("/", "Search"),
    ("s/p/c", "Filter"),
    ("v", "List"),
    ("?", "Help"),
];

/// Renders the status bar.
///
/// # Layout
///
/// ```text
///  LIST  ↑↓ Select  Enter Expand  Tab/x Subtasks  * Star  / Search  ...
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use triage_protocol::ViewMode;
/// use triage_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 100, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(ViewMode::List, false, area, &mut buf);
/// ```
pub fn render_status_bar(view_mode: ViewMode, searching: bool, area: Rect, buf: &mut Buffer) {
    let (mode, mode_color, hints) = if searching {
        ("SEARCH", Color::Yellow, SEARCH_HINTS)
    } else {
        match view_mode {
            ViewMode::List => ("LIST", Color::Cyan, LIST_HINTS),
            ViewMode::Kanban => ("KANBAN", Color::Magenta, KANBAN_HINTS),
        }
    };

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::Gray);

    let mut spans = vec![
        Span::styled(
            format!(" {mode} "),
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {key}"), key_style));
        spans.push(Span::styled(format!(" {action} "), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
