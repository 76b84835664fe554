//! Summary counters shown above the task views.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use triage_protocol::Stats;

/// Renders the stats bar as a single line of labelled counters.
///
/// Counters that call for attention (overdue and urgent) are highlighted
/// only when non-zero.
///
/// # Layout
///
/// ```text
///  Total 8  Mine 4  In Progress 2  Completed 1  Overdue 1  Due Today 1  Urgent 2
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use triage_protocol::Stats;
/// use triage_tui::widgets::render_stats_bar;
///
/// let area = Rect::new(0, 0, 100, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_stats_bar(&Stats::default(), area, &mut buf);
/// ```
pub fn render_stats_bar(stats: &Stats, area: Rect, buf: &mut Buffer) {
    let counters = [
        ("Total", stats.total, Color::White, false),
        ("Mine", stats.mine, Color::Cyan, false),
        ("In Progress", stats.in_progress, Color::Blue, false),
        ("Completed", stats.completed, Color::Green, false),
        ("Overdue", stats.overdue, Color::Red, true),
        ("Due Today", stats.due_today, Color::LightRed, true),
        ("Urgent", stats.urgent, Color::Red, true),
    ];

    let label_style = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::with_capacity(counters.len() * 2);
    for (label, count, color, alert) in counters {
        let value_style = if alert && count == 0 {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!(" {label} "), label_style));
        spans.push(Span::styled(format!("{count} "), value_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn stats() -> Stats {
        Stats {
            total: 8,
            mine: 4,
            in_progress: 2,
            completed: 1,
            overdue: 1,
            due_today: 1,
            urgent: 2,
        }
    }

    #[test]
    fn renders_every_counter() {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);

        render_stats_bar(&stats(), area, &mut buf);

        assert_eq!(
            buffer_to_string(&buf),
            " Total 8  Mine 4  In Progress 2  Completed 1  Overdue 1  Due Today 1  Urgent 2\n"
        );
    }

    #[test]
    fn zero_alerts_are_not_highlighted() {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);

        render_stats_bar(&Stats::default(), area, &mut buf);

        let content = buffer_to_string(&buf);
        let x = content.find("Overdue 0").expect("overdue counter") + "Overdue ".len();
        let x = u16::try_from(x).expect("fits in u16");
        let cell = buf.cell((x, 0)).expect("cell should exist");
        assert_eq!(cell.symbol(), "0");
        assert_eq!(cell.fg, Color::Gray);
    }
}
