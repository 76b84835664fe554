//! Workload summary counters.
//!
//! Stats are always computed over the whole collection, never over the
//! filtered view, so they describe the workload rather than the current
//! search. Each counter is an independent predicate: one task can count
//! toward several of them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::{CURRENT_ACTOR, Priority, Status, Task};

/// Summary counters for a task collection.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use triage_protocol::{Priority, Stats, Status, Task};
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let yesterday = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// let tasks = vec![
///     Task::new(1, "Late and urgent", yesterday).with_priority(Priority::Urgent),
///     Task::new(2, "Done today", today).with_status(Status::Completed),
/// ];
///
/// let stats = Stats::collect(&tasks, today);
/// assert_eq!(stats.total, 2);
/// assert_eq!(stats.overdue, 1);
/// assert_eq!(stats.urgent, 1);
/// assert_eq!(stats.due_today, 1);
/// assert_eq!(stats.completed, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks assigned to the current actor.
    pub mine: usize,
    /// Tasks in progress.
    pub in_progress: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Tasks past their due date and not completed.
    pub overdue: usize,
    /// Tasks due today, whatever their status.
    pub due_today: usize,
    /// Tasks with urgent priority.
    pub urgent: usize,
}

impl Stats {
    /// Computes the counters, treating [`CURRENT_ACTOR`] as the current user.
    #[must_use]
    pub fn collect(tasks: &[Task], today: NaiveDate) -> Self {
        Self::collect_for(tasks, today, CURRENT_ACTOR)
    }

    /// Computes the counters with `actor` as the current user.
    #[must_use]
    pub fn collect_for(tasks: &[Task], today: NaiveDate, actor: &str) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            stats.mine += usize::from(task.is_assigned_to(actor));
            stats.in_progress += usize::from(task.status == Status::InProgress);
            stats.completed += usize::from(task.status == Status::Completed);
            stats.overdue += usize::from(task.is_overdue(today));
            stats.due_today += usize::from(task.is_due_on(today));
            stats.urgent += usize::from(task.priority == Priority::Urgent);
            stats
        })
    }
}
