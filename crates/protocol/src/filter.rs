//! Task filtering and ordering.
//!
//! A [`Filter`] combines a case-insensitive text query with status, priority
//! and category selections. Applying it never mutates the collection: it
//! returns borrowed tasks sorted by due date, with ties kept in collection
//! order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};
use crate::task::{Category, Priority, Status, Task};

/// The sentinel accepted by [`Selection::from_str`] for "no constraint".
pub const ALL: &str = "all";

/// Either no constraint or an exact match on one value.
///
/// # Examples
///
/// ```
/// use triage_protocol::{Selection, Status};
///
/// let any: Selection<Status> = "all".parse().unwrap();
/// assert!(any.accepts(Status::Blocked));
///
/// let only: Selection<Status> = "review".parse().unwrap();
/// assert!(only.accepts(Status::Review));
/// assert!(!only.accepts(Status::Pending));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    /// Every value passes.
    #[default]
    All,
    /// Only this value passes.
    Only(T),
}

impl<T: PartialEq + Copy> Selection<T> {
    /// Returns `true` if `value` passes this selection.
    #[must_use]
    pub fn accepts(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == value,
        }
    }

    /// Returns `true` if this selection constrains anything.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        matches!(self, Self::Only(_))
    }

    /// Steps through `All`, then each of `values` in order, then back to `All`.
    #[must_use]
    pub fn cycle(self, values: &[T]) -> Self {
        match self {
            Self::All => values.first().copied().map_or(Self::All, Self::Only),
            Self::Only(current) => values
                .iter()
                .position(|v| *v == current)
                .and_then(|idx| values.get(idx + 1))
                .copied()
                .map_or(Self::All, Self::Only),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = ProtocolError>,
{
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// The filter tuple: search text plus status, priority and category selections.
///
/// All active predicates are combined with logical AND.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use triage_protocol::{Category, Filter, Selection, Task};
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 3, d).unwrap();
/// let tasks = vec![
///     Task::new(1, "Renew carrier agreement", day(20)).with_category(Category::Contracts),
///     Task::new(2, "Plan offsite", day(10)).with_category(Category::Leadership),
///     Task::new(3, "Review vendor terms", day(12)).with_category(Category::Contracts),
/// ];
///
/// let filter = Filter::default().with_category(Selection::Only(Category::Contracts));
/// let ids: Vec<_> = filter.apply(&tasks).iter().map(|t| t.id).collect();
/// assert_eq!(ids, vec![3, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Filter {
    /// Case-insensitive substring matched against title, description and category.
    #[serde(default)]
    pub query: String,
    /// Status selection.
    #[serde(default)]
    pub status: Selection<Status>,
    /// Priority selection.
    #[serde(default)]
    pub priority: Selection<Priority>,
    /// Category selection.
    #[serde(default)]
    pub category: Selection<Category>,
}

impl Filter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the status selection.
    #[must_use]
    pub fn with_status(mut self, status: Selection<Status>) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority selection.
    #[must_use]
    pub fn with_priority(mut self, priority: Selection<Priority>) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category selection.
    #[must_use]
    pub fn with_category(mut self, category: Selection<Category>) -> Self {
        self.category = category;
        self
    }

    /// Returns `true` if any predicate is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.status.is_constrained()
            || self.priority.is_constrained()
            || self.category.is_constrained()
    }

    /// Returns `true` if `task` passes every active predicate.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.accepts(task, &self.query.to_lowercase())
    }

    /// Returns the matching tasks sorted by due date ascending.
    ///
    /// The sort is stable: tasks sharing a due date keep their collection order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let needle = self.query.to_lowercase();
        let mut matched: Vec<&Task> = tasks
            .iter()
            .filter(|task| self.accepts(task, &needle))
            .collect();
        matched.sort_by_key(|task| task.due_date);
        matched
    }

    fn accepts(&self, task: &Task, needle: &str) -> bool {
        self.status.accepts(task.status)
            && self.priority.accepts(task.priority)
            && self.category.accepts(task.category)
            && matches_query(task, needle)
    }
}

/// `needle` must already be lowercase. An empty needle matches everything.
fn matches_query(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
        || task.category.display_name().to_lowercase().contains(needle)
}
