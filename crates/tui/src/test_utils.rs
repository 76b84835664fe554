//! Test helpers for the TUI crate.

use ratatui::buffer::Buffer;

/// Returns the buffer's symbols as text, one line per row.
///
/// Trailing spaces are trimmed from each row so assertions can match on
/// what is actually drawn.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}
