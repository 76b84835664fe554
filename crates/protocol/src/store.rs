//! The owned, in-memory task collection.
//!
//! [`TaskStore`] is the single writer for task state. Every effective
//! mutation bumps [`TaskStore::version`], which derived views use to detect
//! that they must recompute. Mutations addressed at unknown ids are ignored:
//! ids always come from previously rendered data, so a miss is not a user
//! error.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::{ProtocolError, Result};
use crate::task::{Status, SubtaskId, Task, TaskId};

/// An ordered collection of tasks with unique ids.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use triage_protocol::{Subtask, Task, TaskStore};
///
/// let due = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
/// let mut store = TaskStore::new(vec![
///     Task::new(1, "Onboard new agent", due).with_subtasks(vec![
///         Subtask::new(1, "Paperwork", false),
///         Subtask::new(2, "Licensing check", false),
///     ]),
/// ])
/// .unwrap();
///
/// store.toggle_subtask(1, 2);
/// assert_eq!(store.get(1).unwrap().progress(), 50);
///
/// store.toggle_star(1);
/// assert!(store.get(1).unwrap().starred);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    version: u64,
}

impl TaskStore {
    /// Creates a store from a collection of tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DuplicateTaskId`] if two tasks share an id.
    pub fn new(tasks: Vec<Task>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(dup) = tasks.iter().find(|t| !seen.insert(t.id)) {
            return Err(ProtocolError::DuplicateTaskId(dup.id));
        }
        Ok(Self { tasks, version: 0 })
    }

    /// Returns all tasks in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the mutation counter.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Appends a fully formed task.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DuplicateTaskId`] if the id is already taken.
    pub fn insert(&mut self, task: Task) -> Result<()> {
        if self.get(task.id).is_some() {
            return Err(ProtocolError::DuplicateTaskId(task.id));
        }
        debug!(task_id = task.id, "inserting task");
        self.tasks.push(task);
        self.bump();
        Ok(())
    }

    /// Flips the starred flag of a task. Unknown ids are ignored.
    pub fn toggle_star(&mut self, id: TaskId) {
        let Some(task) = self.get_mut(id) else {
            debug!(task_id = id, "toggle_star: no such task, ignoring");
            return;
        };
        task.toggle_star();
        trace!(task_id = id, starred = task.starred, "toggled star");
        self.bump();
    }

    /// Flips one subtask and re-derives the parent's progress.
    ///
    /// Unknown task or subtask ids are ignored and leave every task untouched.
    pub fn toggle_subtask(&mut self, task_id: TaskId, subtask_id: SubtaskId) {
        let Some(task) = self.get_mut(task_id) else {
            debug!(task_id, subtask_id, "toggle_subtask: no such task, ignoring");
            return;
        };
        if !task.toggle_subtask(subtask_id) {
            debug!(task_id, subtask_id, "toggle_subtask: no such subtask, ignoring");
            return;
        }
        trace!(task_id, subtask_id, progress = task.progress(), "toggled subtask");
        self.bump();
    }

    /// Moves a task to another lifecycle state. Unknown ids are ignored.
    pub fn set_status(&mut self, id: TaskId, status: Status) {
        let Some(task) = self.get_mut(id) else {
            debug!(task_id = id, "set_status: no such task, ignoring");
            return;
        };
        if task.status == status {
            return;
        }
        task.status = status;
        trace!(task_id = id, status = status.as_str(), "status changed");
        self.bump();
    }

    /// Sets the progress of a task without subtasks.
    ///
    /// Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Propagates [`Task::set_progress`] errors for out-of-range values or
    /// tasks whose progress is derived.
    pub fn set_progress(&mut self, id: TaskId, progress: u8) -> Result<()> {
        let Some(task) = self.get_mut(id) else {
            debug!(task_id = id, "set_progress: no such task, ignoring");
            return Ok(());
        };
        task.set_progress(progress)?;
        self.bump();
        Ok(())
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
