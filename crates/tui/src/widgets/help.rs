//! Help overlay widget.
//!
//! This module provides the help overlay that lists every keybinding when
//! the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 42;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 27;

/// Width of the key column, including the leading indent.
const KEY_COLUMN: usize = 13;

const NAVIGATION: &[(&str, &str)] = &[
    ("↑ ↓", "Select previous / next"),
    ("← →", "Previous / next column"),
    ("v", "Switch list / board"),
];

const TASKS: &[(&str, &str)] = &[
    ("Enter Space", "Expand / collapse"),
    ("Tab", "Next subtask"),
    ("x", "Toggle subtask"),
    ("*", "Star / unstar"),
];

const FILTERS: &[(&str, &str)] = &[
    ("/", "Search"),
    ("s", "Cycle status"),
    ("p", "Cycle priority"),
    ("c", "Cycle category"),
    ("0", "Clear filters"),
];

const GENERAL: &[(&str, &str)] = &[
    ("Esc", "Close / collapse"),
    ("?", "Toggle help"),
    ("Ctrl+C", "Quit"),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, clearing the
/// area behind it first.
///
/// # Layout
///
/// ```text
/// ╭ Help ──────────────────────────────────╮
/// │                                        │
/// │  Navigation                            │
/// │  ↑ ↓        Select previous / next     │
/// │  ← →        Previous / next column     │
/// │  v          Switch list / board        │
/// │                                        │
/// │  Tasks                                 │
/// │  Enter Space Expand / collapse         │
/// │  ...                                   │
/// │  Press any key to close                │
/// ╰────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use triage_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (title, bindings) in [
        ("Navigation", NAVIGATION),
        ("Tasks", TASKS),
        ("Filters", FILTERS),
        ("General", GENERAL),
    ] {
        lines.push(Line::from(""));
        push_section(&mut lines, title, bindings);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

fn push_section(
    lines: &mut Vec<Line<'static>>,
    title: &'static str,
    bindings: &[(&'static str, &'static str)],
) {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);

    lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
    for (key, action) in bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$}", format!("  {key} "), width = KEY_COLUMN), key_style),
            Span::styled(*action, text_style),
        ]));
    }
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to available area
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
