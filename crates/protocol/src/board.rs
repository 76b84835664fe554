//! Kanban board types and structures.
//!
//! This module partitions a filtered, due-date-ordered task sequence into
//! the fixed board columns. The board borrows its tasks: it is a
//! presentation of the store, rebuilt whenever the filtered view changes.

use serde::{Deserialize, Serialize};

use crate::task::{Status, Task, TaskId};

/// A column on the Kanban board.
///
/// Columns mirror task statuses except `Deferred`, which has no column.
///
/// # Examples
///
/// ```
/// use triage_protocol::Column;
///
/// let column = Column::InProgress;
/// assert_eq!(column.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Tasks not started yet.
    #[default]
    Pending,
    /// Tasks being worked on.
    InProgress,
    /// Tasks awaiting review.
    Review,
    /// Finished tasks.
    Completed,
    /// Tasks that cannot move.
    Blocked,
}

impl Column {
    /// Number of columns on the board.
    pub const COUNT: usize = 5;

    /// Returns all columns in board order.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_protocol::Column;
    ///
    /// let columns = Column::all();
    /// assert_eq!(columns.len(), 5);
    /// assert_eq!(columns[0], Column::Pending);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::Pending,
            Self::InProgress,
            Self::Review,
            Self::Completed,
            Self::Blocked,
        ]
    }

    /// Returns a human-readable display name for the column.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.status().display_name()
    }

    /// Returns the status held by this column.
    #[must_use]
    pub const fn status(self) -> Status {
        match self {
            Self::Pending => Status::Pending,
            Self::InProgress => Status::InProgress,
            Self::Review => Status::Review,
            Self::Completed => Status::Completed,
            Self::Blocked => Status::Blocked,
        }
    }

    /// Returns the column for a status, or `None` for `Deferred`.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_protocol::{Column, Status};
    ///
    /// assert_eq!(Column::for_status(Status::Review), Some(Column::Review));
    /// assert_eq!(Column::for_status(Status::Deferred), None);
    /// ```
    #[must_use]
    pub const fn for_status(status: Status) -> Option<Self> {
        match status {
            Status::Pending => Some(Self::Pending),
            Status::InProgress => Some(Self::InProgress),
            Status::Review => Some(Self::Review),
            Status::Completed => Some(Self::Completed),
            Status::Blocked => Some(Self::Blocked),
            Status::Deferred => None,
        }
    }

    /// Returns the index of this column on the board (0-4).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Review => 2,
            Self::Completed => 3,
            Self::Blocked => 4,
        }
    }

    /// Creates a `Column` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 5).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Pending),
            1 => Some(Self::InProgress),
            2 => Some(Self::Review),
            3 => Some(Self::Completed),
            4 => Some(Self::Blocked),
            _ => None,
        }
    }
}

/// A single column of the board with its tasks in due-date order.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane<'a> {
    /// Which column this is.
    pub column: Column,
    /// Tasks in this column.
    pub tasks: Vec<&'a Task>,
}

impl<'a> Lane<'a> {
    /// Creates an empty lane.
    #[must_use]
    pub fn new(column: Column) -> Self {
        Self {
            column,
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the lane holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Task> {
        self.tasks.get(index).copied()
    }

    /// Returns the position of a task in this lane.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

/// The Kanban presentation of a filtered task sequence.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use triage_protocol::{Column, KanbanBoard, Status, Task};
///
/// let due = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
/// let tasks = vec![
///     Task::new(1, "Draft", due),
///     Task::new(2, "Parked", due).with_status(Status::Deferred),
///     Task::new(3, "Ship", due).with_status(Status::Completed),
/// ];
/// let visible: Vec<&Task> = tasks.iter().collect();
///
/// let board = KanbanBoard::partition(&visible);
/// assert_eq!(board.lane(Column::Pending).len(), 1);
/// assert_eq!(board.lane(Column::Completed).len(), 1);
/// assert_eq!(board.locate(2), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanBoard<'a> {
    /// The lanes, in [`Column::all`] order.
    pub lanes: [Lane<'a>; Column::COUNT],
}

impl<'a> KanbanBoard<'a> {
    /// Distributes `tasks` into columns by status, keeping their order.
    ///
    /// Deferred tasks have no column and are left out.
    #[must_use]
    pub fn partition(tasks: &[&'a Task]) -> Self {
        let mut lanes = Column::all().map(Lane::new);
        for &task in tasks {
            if let Some(column) = Column::for_status(task.status) {
                lanes[column.index()].tasks.push(task);
            }
        }
        Self { lanes }
    }

    /// Returns the lane for a column.
    #[must_use]
    pub fn lane(&self, column: Column) -> &Lane<'a> {
        &self.lanes[column.index()]
    }

    /// Finds the column and row of a task.
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<(Column, usize)> {
        self.lanes
            .iter()
            .find_map(|lane| lane.position(id).map(|row| (lane.column, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;
    use crate::test_utils::{arb_tasks, day_offset};
    use proptest::prelude::*;

    #[test]
    fn column_index_roundtrip() {
        for column in Column::all() {
            assert_eq!(Column::from_index(column.index()), Some(column));
            assert_eq!(Column::for_status(column.status()), Some(column));
        }
        assert_eq!(Column::from_index(5), None);
    }

    #[test]
    fn column_json_format() {
        let json = serde_json::to_string(&Column::InProgress).expect("serialize");
        assert_eq!(json, r#""in_progress""#);
    }

    #[test]
    fn partition_keeps_order_within_columns() {
        let tasks = vec![
            Task::new(1, "late review", day_offset(5)).with_status(Status::Review),
            Task::new(2, "early review", day_offset(1)).with_status(Status::Review),
            Task::new(3, "pending", day_offset(3)),
        ];
        let visible = Filter::new().apply(&tasks);
        let board = KanbanBoard::partition(&visible);

        let review: Vec<u32> = board.lane(Column::Review).tasks.iter().map(|t| t.id).collect();
        assert_eq!(review, vec![2, 1]);
        assert_eq!(board.locate(1), Some((Column::Review, 1)));
        assert_eq!(board.locate(3), Some((Column::Pending, 0)));
        assert_eq!(board.locate(42), None);
    }

    #[test]
    fn empty_board() {
        let board = KanbanBoard::partition(&[]);
        for (i, lane) in board.lanes.iter().enumerate() {
            assert_eq!(lane.column.index(), i);
            assert!(lane.is_empty());
        }
    }

    proptest! {
        /// Every non-deferred task lands in exactly one column.
        #[test]
        fn partition_is_complete(tasks in arb_tasks(16), query in "[a-z]?") {
            let visible = Filter::new().with_query(query).apply(&tasks);
            let board = KanbanBoard::partition(&visible);

            let expected: Vec<u32> = visible
                .iter()
                .filter(|t| t.status != Status::Deferred)
                .map(|t| t.id)
                .collect();
            let placed: usize = board.lanes.iter().map(Lane::len).sum();
            prop_assert_eq!(placed, expected.len());

            for id in expected {
                let hits = board
                    .lanes
                    .iter()
                    .filter(|lane| lane.position(id).is_some())
                    .count();
                prop_assert_eq!(hits, 1);
                let (column, _) = board.locate(id).expect("placed");
                let task = visible.iter().find(|t| t.id == id).expect("visible");
                prop_assert_eq!(column.status(), task.status);
            }
        }
    }
}
