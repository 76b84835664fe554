//! Task-related types for the triage board.
//!
//! This module defines the core task types used throughout the triage
//! application, including identifiers, the priority/status/category
//! enumerations, subtasks, and the task record itself.
//!
//! A task's `progress` is a derived value whenever the task carries a
//! subtask checklist. The field is therefore private: it is read through
//! [`Task::progress`] and changed only by [`Task::toggle_subtask`] or, for
//! tasks without subtasks, [`Task::set_progress`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Unique identifier for a task.
///
/// Identifiers are stable for the lifetime of the process and never reused.
pub type TaskId = u32;

/// Identifier of a subtask, unique within its parent task.
pub type SubtaskId = u32;

/// The assignee value that marks a task as owned by the current actor.
pub const CURRENT_ACTOR: &str = "You";

/// Normalizes user input for enum parsing: `"In Progress"` and
/// `"in-progress"` both become `"in_progress"`.
fn normalize(value: &str) -> String {
    value
        .trim()
        .to_ascii_lowercase()
        .replace([' ', '-'], "_")
}

/// Severity of a task. Used for display and filtering, never for ordering.
///
/// # Examples
///
/// ```
/// use triage_protocol::Priority;
///
/// let priority: Priority = "urgent".parse().unwrap();
/// assert_eq!(priority, Priority::Urgent);
/// assert_eq!(priority.display_name(), "Urgent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Needs immediate attention.
    Urgent,
    /// Important, schedule soon.
    High,
    /// Normal priority.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Returns all priorities from most to least severe.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Urgent, Self::High, Self::Medium, Self::Low]
    }

    /// Returns the serialized (snake_case) name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Returns a human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Priority {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Self::all()
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| ProtocolError::UnknownVariant {
                kind: "priority",
                value: s.to_string(),
            })
    }
}

/// The lifecycle state of a task. States are mutually exclusive.
///
/// # Examples
///
/// ```
/// use triage_protocol::Status;
///
/// assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
/// assert_eq!(Status::InProgress.as_str(), "in_progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not started yet.
    #[default]
    Pending,
    /// Actively being worked on.
    InProgress,
    /// Waiting for review or sign-off.
    Review,
    /// Done.
    Completed,
    /// Cannot progress until something else happens.
    Blocked,
    /// Postponed on purpose.
    Deferred,
}

impl Status {
    /// Returns all statuses in workflow order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Pending,
            Self::InProgress,
            Self::Review,
            Self::Completed,
            Self::Blocked,
            Self::Deferred,
        ]
    }

    /// Returns the serialized (snake_case) name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
            Self::Deferred => "deferred",
        }
    }

    /// Returns a human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Completed => "Completed",
            Self::Blocked => "Blocked",
            Self::Deferred => "Deferred",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Status {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Self::all()
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| ProtocolError::UnknownVariant {
                kind: "status",
                value: s.to_string(),
            })
    }
}

/// The business area a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Budgets, commissions and reporting.
    Finance,
    /// Team and agency leadership.
    Leadership,
    /// Carrier and vendor agreements.
    Contracts,
    /// Campaigns and lead generation.
    Marketing,
    /// Hiring, onboarding and people matters.
    #[serde(rename = "hr")]
    HR,
    /// Licensing and regulatory work.
    Compliance,
    /// Day-to-day running of the agency.
    #[default]
    Operations,
    /// Long-term planning.
    Strategy,
}

impl Category {
    /// Returns all categories.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Finance,
            Self::Leadership,
            Self::Contracts,
            Self::Marketing,
            Self::HR,
            Self::Compliance,
            Self::Operations,
            Self::Strategy,
        ]
    }

    /// Returns the serialized (snake_case) name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Leadership => "leadership",
            Self::Contracts => "contracts",
            Self::Marketing => "marketing",
            Self::HR => "hr",
            Self::Compliance => "compliance",
            Self::Operations => "operations",
            Self::Strategy => "strategy",
        }
    }

    /// Returns the display name, which is also what text search matches against.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Leadership => "Leadership",
            Self::Contracts => "Contracts",
            Self::Marketing => "Marketing",
            Self::HR => "HR",
            Self::Compliance => "Compliance",
            Self::Operations => "Operations",
            Self::Strategy => "Strategy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Self::all()
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ProtocolError::UnknownVariant {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// A checklist item belonging to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    /// Identifier, unique within the parent task.
    pub id: SubtaskId,
    /// Short description of the step.
    pub title: String,
    /// Whether the step is done.
    pub completed: bool,
}

impl Subtask {
    /// Creates a subtask.
    #[must_use]
    pub fn new(id: SubtaskId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }
}

/// Computes `round(100 * done / total)` with half-up rounding.
///
/// Returns `None` for an empty checklist, whose progress is not derived.
///
/// # Examples
///
/// ```
/// use triage_protocol::{Subtask, task::derived_progress};
///
/// let subtasks = vec![
///     Subtask::new(1, "a", true),
///     Subtask::new(2, "b", false),
///     Subtask::new(3, "c", false),
/// ];
/// assert_eq!(derived_progress(&subtasks), Some(33));
/// assert_eq!(derived_progress(&[]), None);
/// ```
#[must_use]
pub fn derived_progress(subtasks: &[Subtask]) -> Option<u8> {
    if subtasks.is_empty() {
        return None;
    }
    let total = subtasks.len() as u64;
    let done = subtasks.iter().filter(|s| s.completed).count() as u64;
    // Integer form of floor(100 * done / total + 0.5).
    let rounded = (200 * done + total) / (2 * total);
    Some(rounded as u8)
}

/// A unit of work on the triage board.
///
/// Tasks are created fully formed. After creation only the status, the
/// starred flag and subtask completion (and with it the progress) change.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use triage_protocol::{Category, Priority, Status, Subtask, Task};
///
/// let due = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
/// let task = Task::new(1, "Renew carrier contract", due)
///     .with_priority(Priority::High)
///     .with_category(Category::Contracts)
///     .with_subtasks(vec![
///         Subtask::new(1, "Review terms", true),
///         Subtask::new(2, "Sign", false),
///     ]);
///
/// assert_eq!(task.status, Status::Pending);
/// assert_eq!(task.progress(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TaskRecord")]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Longer free-text description.
    pub description: String,
    /// Severity, display only.
    pub priority: Priority,
    /// Current lifecycle state.
    pub status: Status,
    /// Who owns the task. [`CURRENT_ACTOR`] marks the current user.
    pub assignee: String,
    /// Day the task is due.
    pub due_date: NaiveDate,
    /// Day the task was created.
    pub created_date: NaiveDate,
    /// Business area.
    pub category: Category,
    progress: u8,
    /// Number of comments, display only.
    pub comments: u32,
    /// Number of attachments, display only.
    pub attachments: u32,
    /// Whether the user starred this task.
    pub starred: bool,
    subtasks: Vec<Subtask>,
    /// Free-text labels, display only.
    pub tags: Vec<String>,
    /// Estimated effort in hours.
    pub estimated_hours: Option<f32>,
    /// Effort spent so far in hours.
    pub actual_hours: Option<f32>,
}

/// Wire form of a task. Converting it into a [`Task`] re-derives progress.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    status: Status,
    #[serde(default)]
    assignee: String,
    due_date: NaiveDate,
    created_date: NaiveDate,
    #[serde(default)]
    category: Category,
    #[serde(default)]
    progress: u8,
    #[serde(default)]
    comments: u32,
    #[serde(default)]
    attachments: u32,
    #[serde(default)]
    starred: bool,
    #[serde(default)]
    subtasks: Vec<Subtask>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    estimated_hours: Option<f32>,
    #[serde(default)]
    actual_hours: Option<f32>,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        let progress = derived_progress(&record.subtasks).unwrap_or(record.progress.min(100));
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            priority: record.priority,
            status: record.status,
            assignee: record.assignee,
            due_date: record.due_date,
            created_date: record.created_date,
            category: record.category,
            progress,
            comments: record.comments,
            attachments: record.attachments,
            starred: record.starred,
            subtasks: record.subtasks,
            tags: record.tags,
            estimated_hours: record.estimated_hours,
            actual_hours: record.actual_hours,
        }
    }
}

impl Task {
    /// Creates a pending, medium-priority task assigned to the current actor.
    ///
    /// The creation date defaults to the due date until set with
    /// [`Task::created_on`].
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            status: Status::default(),
            assignee: CURRENT_ACTOR.to_string(),
            due_date,
            created_date: due_date,
            category: Category::default(),
            progress: 0,
            comments: 0,
            attachments: 0,
            starred: false,
            subtasks: Vec::new(),
            tags: Vec::new(),
            estimated_hours: None,
            actual_hours: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    /// Sets the creation date.
    #[must_use]
    pub fn created_on(mut self, date: NaiveDate) -> Self {
        self.created_date = date;
        self
    }

    /// Sets the progress of a task without subtasks, clamped to 100.
    ///
    /// Ignored when the task has subtasks.
    #[must_use]
    pub fn with_progress(mut self, progress: u8) -> Self {
        if self.subtasks.is_empty() {
            self.progress = progress.min(100);
        }
        self
    }

    /// Replaces the subtask checklist and re-derives progress.
    #[must_use]
    pub fn with_subtasks(mut self, subtasks: Vec<Subtask>) -> Self {
        self.subtasks = subtasks;
        if let Some(progress) = derived_progress(&self.subtasks) {
            self.progress = progress;
        }
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the estimated and actual hours.
    #[must_use]
    pub fn with_hours(mut self, estimated: Option<f32>, actual: Option<f32>) -> Self {
        self.estimated_hours = estimated;
        self.actual_hours = actual;
        self
    }

    /// Sets the comment and attachment counters.
    #[must_use]
    pub fn with_activity(mut self, comments: u32, attachments: u32) -> Self {
        self.comments = comments;
        self.attachments = attachments;
        self
    }

    /// Sets the starred flag.
    #[must_use]
    pub fn with_star(mut self, starred: bool) -> Self {
        self.starred = starred;
        self
    }

    /// Returns the completion percentage (0-100).
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Returns the subtask checklist.
    #[must_use]
    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// Returns `true` if progress is derived from a subtask checklist.
    #[must_use]
    pub fn has_subtasks(&self) -> bool {
        !self.subtasks.is_empty()
    }

    /// Returns the number of completed subtasks.
    #[must_use]
    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }

    /// Sets progress directly.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::ProgressOutOfRange`] if `progress > 100` and
    /// [`ProtocolError::ProgressDerived`] if the task has subtasks.
    pub fn set_progress(&mut self, progress: u8) -> Result<()> {
        if progress > 100 {
            return Err(ProtocolError::ProgressOutOfRange(progress));
        }
        if self.has_subtasks() {
            return Err(ProtocolError::ProgressDerived(self.id));
        }
        self.progress = progress;
        Ok(())
    }

    /// Flips the completion flag of one subtask and re-derives progress.
    ///
    /// Returns `false` (and changes nothing) if no subtask has that id.
    pub fn toggle_subtask(&mut self, subtask_id: SubtaskId) -> bool {
        let Some(subtask) = self.subtasks.iter_mut().find(|s| s.id == subtask_id) else {
            return false;
        };
        subtask.completed = !subtask.completed;
        if let Some(progress) = derived_progress(&self.subtasks) {
            self.progress = progress;
        }
        true
    }

    /// Flips the starred flag.
    pub fn toggle_star(&mut self) {
        self.starred = !self.starred;
    }

    /// Returns `true` if the task is assigned to `actor`.
    #[must_use]
    pub fn is_assigned_to(&self, actor: &str) -> bool {
        self.assignee == actor
    }

    /// Returns `true` if the due date has passed and the task is not completed.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && self.status != Status::Completed
    }

    /// Returns `true` if the task is due on `today`, whatever its status.
    #[must_use]
    pub fn is_due_on(&self, today: NaiveDate) -> bool {
        self.due_date == today
    }
}
