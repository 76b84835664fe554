//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use triage_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// `searching` selects the search-editing key map, where printable keys
/// are captured as query input.
#[must_use]
pub fn event_to_message(event: &Event, searching: bool) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if searching {
                key_to_search_message(*key)
            } else {
                key_to_message(*key)
            }
        }
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (close help or collapse the expanded task) |
/// | Arrows | Navigate |
/// | `Enter` or `Space` | Expand / collapse the selected task |
/// | `*` | Star / unstar the selected task |
/// | `Tab` | Next subtask of the expanded task |
/// | `x` | Toggle the subtask under the cursor |
/// | `v` | Switch list / Kanban view |
/// | `/` | Edit the search query |
/// | `s` / `p` / `c` | Cycle the status / priority / category filter |
/// | `0` | Clear all filters |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::ToggleExpand),
        KeyCode::Char('*') => Some(Message::ToggleStar),
        KeyCode::Tab => Some(Message::NextSubtask),
        KeyCode::Char('x') => Some(Message::ToggleSubtask),
        KeyCode::Char('v') => Some(Message::ToggleView),

        KeyCode::Char('/') => Some(Message::StartSearch),
        KeyCode::Char('s') => Some(Message::CycleStatus),
        KeyCode::Char('p') => Some(Message::CyclePriority),
        KeyCode::Char('c') => Some(Message::CycleCategory),
        KeyCode::Char('0') => Some(Message::ClearFilters),

        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event while the search query is being edited.
///
/// # Key Bindings (Search Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Enter` or `Esc` | Stop editing |
/// | `Backspace` | Delete the last character |
/// | Any char | Append to the query |
#[must_use]
pub fn key_to_search_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Esc => Some(Message::EndSearch),
        KeyCode::Backspace => Some(Message::SearchBackspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::SearchInput { ch })
        }
        _ => None,
    }
}
