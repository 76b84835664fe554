//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use triage_protocol::Message;
///
/// let msg = Message::ToggleStar;
/// assert!(matches!(msg, Message::ToggleStar));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection up (previous task or previous card in the column).
    NavigateUp,
    /// Move selection down.
    NavigateDown,
    /// Move to the column on the left (Kanban view).
    NavigateLeft,
    /// Move to the column on the right (Kanban view).
    NavigateRight,
    /// Expand or collapse the selected task.
    ToggleExpand,
    /// Star or unstar the selected task.
    ToggleStar,
    /// Move the subtask cursor of the expanded task.
    NextSubtask,
    /// Complete or reopen the subtask under the cursor.
    ToggleSubtask,
    /// Switch between list and Kanban presentation.
    ToggleView,
    /// Start editing the search query.
    StartSearch,
    /// Append a character to the search query.
    SearchInput {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the search query.
    SearchBackspace,
    /// Stop editing the search query.
    EndSearch,
    /// Cycle the status filter.
    CycleStatus,
    /// Cycle the priority filter.
    CyclePriority,
    /// Cycle the category filter.
    CycleCategory,
    /// Reset every filter to "all" and clear the query.
    ClearFilters,
    /// Toggle help overlay.
    ToggleHelp,
    /// Escape: close help or collapse the expanded task (contextual).
    Escape,
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::EndSearch.is_terminating());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::NavigateLeft).expect("serialize");
        assert_eq!(json, r#""navigate_left""#);

        let json = serde_json::to_string(&Message::SearchInput { ch: 'c' }).expect("serialize");
        assert_eq!(json, r#"{"search_input":{"ch":"c"}}"#);

        let parsed: Message = serde_json::from_str(r#""cycle_priority""#).expect("deserialize");
        assert_eq!(parsed, Message::CyclePriority);
    }
}
