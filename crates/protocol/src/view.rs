//! Derived views over the task store.
//!
//! [`FilteredView`] memoizes the output of the filter pipeline. The cache
//! key is the pair (store version, filter): any mutation of the store or
//! change of the filter invalidates it, so a read is never stale.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::filter::Filter;
use crate::store::TaskStore;
use crate::task::TaskId;

/// Which presentation of the filtered tasks is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// One row per task.
    #[default]
    List,
    /// Tasks grouped into status columns.
    Kanban,
}

impl ViewMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::List => Self::Kanban,
            Self::Kanban => Self::List,
        }
    }

    /// Returns a human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Kanban => "Kanban",
        }
    }
}

/// Memoized filter output, stored as task ids in display order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use triage_protocol::{Filter, FilteredView, Task, TaskStore};
///
/// let due = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
/// let mut store = TaskStore::new(vec![Task::new(1, "Budget", due)]).unwrap();
/// let mut view = FilteredView::default();
///
/// assert_eq!(view.ids(&store, &Filter::new()), &[1]);
/// assert!(view.ids(&store, &Filter::new().with_query("nothing")).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    key: Option<(u64, Filter)>,
    ids: Vec<TaskId>,
}

impl FilteredView {
    /// Returns the filtered ids, recomputing them if the store or filter changed.
    pub fn ids(&mut self, store: &TaskStore, filter: &Filter) -> &[TaskId] {
        let fresh = self
            .key
            .as_ref()
            .is_some_and(|(version, cached)| *version == store.version() && cached == filter);
        if !fresh {
            self.ids = filter.apply(store.tasks()).iter().map(|t| t.id).collect();
            self.key = Some((store.version(), filter.clone()));
            trace!(
                version = store.version(),
                visible = self.ids.len(),
                "recomputed filtered view"
            );
        }
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Selection;
    use crate::task::{Status, Subtask, Task};
    use crate::test_utils::day_offset;

    fn store() -> TaskStore {
        TaskStore::new(vec![
            Task::new(1, "Alpha", day_offset(3)),
            Task::new(2, "Beta", day_offset(1)).with_subtasks(vec![Subtask::new(1, "x", false)]),
            Task::new(3, "Gamma", day_offset(2)).with_status(Status::Completed),
        ])
        .expect("unique ids")
    }

    #[test]
    fn view_mode_toggles() {
        assert_eq!(ViewMode::default(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Kanban);
        assert_eq!(ViewMode::Kanban.toggled(), ViewMode::List);
    }

    #[test]
    fn recomputes_when_filter_changes() {
        let store = store();
        let mut view = FilteredView::default();
        assert_eq!(view.ids(&store, &Filter::new()), &[2, 3, 1]);

        let filter = Filter::new().with_status(Selection::Only(Status::Completed));
        assert_eq!(view.ids(&store, &filter), &[3]);
    }

    #[test]
    fn recomputes_when_store_changes() {
        let mut store = store();
        let filter = Filter::new().with_status(Selection::Only(Status::Pending));
        let mut view = FilteredView::default();
        assert_eq!(view.ids(&store, &filter), &[2, 1]);

        store.set_status(1, Status::Completed);
        assert_eq!(view.ids(&store, &filter), &[2]);
    }
}
