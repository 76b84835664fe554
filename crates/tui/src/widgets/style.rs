//! Shared colors and text helpers for the widgets.
//!
//! Every widget colors tasks the same way: due labels by [`Urgency`],
//! priority badges by [`Priority`] and status text by [`Status`].

use ratatui::style::{Color, Modifier, Style};
use triage_protocol::{Priority, Status, Urgency};

/// Width of the textual progress bar, excluding the percentage.
pub const PROGRESS_BAR_WIDTH: usize = 10;

/// Returns the color of a due label for its urgency tier.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use triage_protocol::Urgency;
/// use triage_tui::widgets::urgency_color;
///
/// assert_eq!(urgency_color(Urgency::Critical), Color::Red);
/// assert_eq!(urgency_color(Urgency::Neutral), Color::Gray);
/// ```
#[must_use]
pub const fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Critical => Color::Red,
        Urgency::High => Color::LightRed,
        Urgency::Medium => Color::Yellow,
        Urgency::Info => Color::Cyan,
        Urgency::Neutral => Color::Gray,
    }
}

/// Returns the color associated with a priority.
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Urgent => Color::Red,
        Priority::High => Color::LightYellow,
        Priority::Medium => Color::Blue,
        Priority::Low => Color::DarkGray,
    }
}

/// Returns the color associated with a status.
#[must_use]
pub const fn status_color(status: Status) -> Color {
    match status {
        Status::Pending => Color::Gray,
        Status::InProgress => Color::Blue,
        Status::Review => Color::Magenta,
        Status::Completed => Color::Green,
        Status::Blocked => Color::Red,
        Status::Deferred => Color::DarkGray,
    }
}

/// Returns a fixed-width badge for a priority, e.g. `"URG "`.
#[must_use]
pub const fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "URG ",
        Priority::High => "HIGH",
        Priority::Medium => "MED ",
        Priority::Low => "LOW ",
    }
}

/// Style for the bold, priority-colored badge.
#[must_use]
pub fn priority_style(priority: Priority) -> Style {
    Style::default()
        .fg(priority_color(priority))
        .add_modifier(Modifier::BOLD)
}

/// Star marker for a task.
#[must_use]
pub const fn star(starred: bool) -> &'static str {
    if starred { "★" } else { "☆" }
}

/// Renders progress as a bar of `width` cells plus a percentage.
///
/// # Examples
///
/// ```
/// use triage_tui::widgets::progress_bar;
///
/// assert_eq!(progress_bar(50, 4), "██░░  50%");
/// assert_eq!(progress_bar(100, 4), "████ 100%");
/// ```
#[must_use]
pub fn progress_bar(progress: u8, width: usize) -> String {
    let progress = usize::from(progress.min(100));
    let filled = (progress * width + 50) / 100;
    format!(
        "{}{} {progress:>3}%",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
#[must_use]
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 1 {
        let truncated: String = s.chars().take(max_width - 1).collect();
        format!("{truncated}…")
    } else {
        s.chars().take(max_width).collect()
    }
}

/// Pads or truncates `s` to exactly `width` characters.
#[must_use]
pub fn fit(s: &str, width: usize) -> String {
    format!("{:<width$}", truncate(s, width))
}
