//! Error types for the triage-protocol crate.
//!
//! This module defines all error types that can occur when working with
//! protocol types, such as duplicate ids and out-of-range values.
//!
//! Mutations driven by the UI (starring a task, toggling a subtask) never
//! produce these errors: unknown ids are ignored there. Errors are reserved
//! for constructing the store and for explicit, caller-supplied values.

use thiserror::Error;

use crate::task::TaskId;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Two tasks in the same collection share an identifier.
    #[error("duplicate task id: {0}")]
    DuplicateTaskId(TaskId),

    /// A progress value above 100 was supplied.
    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u8),

    /// Progress was set directly on a task whose progress is derived from subtasks.
    #[error("progress of task {0} is derived from its subtasks")]
    ProgressDerived(TaskId),

    /// A filter or enum value could not be parsed.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant {
        /// The kind of value being parsed (e.g. "status").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::DuplicateTaskId(7);
        assert_eq!(err.to_string(), "duplicate task id: 7");

        let err = ProtocolError::ProgressOutOfRange(120);
        assert!(err.to_string().contains("got 120"));

        let err = ProtocolError::UnknownVariant {
            kind: "status",
            value: "later".to_string(),
        };
        assert_eq!(err.to_string(), r#"unknown status: "later""#);
    }
}
