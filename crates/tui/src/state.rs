//! Application state management.
//!
//! This module defines the presentation state of the dashboard: which view
//! is shown, which task is selected or expanded, and the filter being
//! edited. Task data lives in the [`TaskStore`]; the state only refers to
//! tasks by id.

use chrono::NaiveDate;
use tracing::{debug, info};
use triage_config::Config;
use triage_protocol::{
    CURRENT_ACTOR, Category, Column, DEFAULT_UPCOMING_WINDOW, Filter, FilteredView, KanbanBoard,
    Priority, Stats, Status, Task, TaskId, TaskStore, ViewMode,
};

/// The application state.
///
/// At most one task is expanded at a time.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The task collection.
    pub store: TaskStore,
    /// The active filter.
    pub filter: Filter,
    /// Memoized filter output.
    view: FilteredView,
    /// List or Kanban presentation.
    pub view_mode: ViewMode,
    /// The expanded task, if any.
    pub expanded: Option<TaskId>,
    /// Selected row in the list view.
    pub selected_row: usize,
    /// Selected column in the Kanban view.
    pub selected_column: Column,
    /// Selected card within the Kanban column.
    pub selected_card: usize,
    /// Subtask cursor inside the expanded task.
    pub subtask_cursor: usize,
    /// Whether keystrokes are edited into the search query.
    pub search_editing: bool,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The reference date for due labels and overdue counts.
    pub today: NaiveDate,
    /// Assignee counted as "mine".
    pub actor: String,
    /// Days ahead shown as a relative countdown.
    pub window_days: u32,
}

impl AppState {
    /// Creates a new application state in list view with no filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use triage_protocol::TaskStore;
    /// use triage_tui::AppState;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    /// let state = AppState::new(TaskStore::default(), today);
    /// assert_eq!(state.selected_row, 0);
    /// assert!(state.expanded.is_none());
    /// ```
    #[must_use]
    pub fn new(store: TaskStore, today: NaiveDate) -> Self {
        Self {
            store,
            filter: Filter::new(),
            view: FilteredView::default(),
            view_mode: ViewMode::default(),
            expanded: None,
            selected_row: 0,
            selected_column: Column::default(),
            selected_card: 0,
            subtask_cursor: 0,
            search_editing: false,
            help_visible: false,
            today,
            actor: CURRENT_ACTOR.to_string(),
            window_days: DEFAULT_UPCOMING_WINDOW,
        }
    }

    /// Creates a new application state using the configured actor, window
    /// and starting view.
    #[must_use]
    pub fn with_config(store: TaskStore, today: NaiveDate, config: &Config) -> Self {
        Self {
            view_mode: config.default_view,
            actor: config.actor.clone(),
            window_days: config.upcoming_window_days,
            ..Self::new(store, today)
        }
    }

    /// Returns the ids of the tasks passing the filter, in display order.
    pub fn visible_ids(&mut self) -> Vec<TaskId> {
        self.view.ids(&self.store, &self.filter).to_vec()
    }

    /// Resolves `ids` against the store.
    #[must_use]
    pub fn tasks_for(&self, ids: &[TaskId]) -> Vec<&Task> {
        ids.iter().filter_map(|id| self.store.get(*id)).collect()
    }

    /// Returns the counters over the whole collection.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::collect_for(self.store.tasks(), self.today, &self.actor)
    }

    /// Returns the id of the selected task, if any.
    pub fn selected_id(&mut self) -> Option<TaskId> {
        let ids = self.visible_ids();
        match self.view_mode {
            ViewMode::List => ids.get(self.selected_row).copied(),
            ViewMode::Kanban => {
                let tasks = self.tasks_for(&ids);
                let board = KanbanBoard::partition(&tasks);
                board
                    .lane(self.selected_column)
                    .get(self.selected_card)
                    .map(|t| t.id)
            }
        }
    }

    /// Returns the expanded task, if any.
    #[must_use]
    pub fn expanded_task(&self) -> Option<&Task> {
        self.expanded.and_then(|id| self.store.get(id))
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn navigate_up(&mut self) {
        let len = self.current_len();
        let cursor = self.cursor_mut();
        *cursor = match (*cursor, len) {
            (_, 0) => 0,
            (0, len) => len - 1,
            (idx, _) => idx - 1,
        };
    }

    /// Moves the selection down, wrapping to the top.
    pub fn navigate_down(&mut self) {
        let len = self.current_len();
        let cursor = self.cursor_mut();
        *cursor = if len == 0 { 0 } else { (*cursor + 1) % len };
    }

    /// Moves to the previous Kanban column, wrapping around.
    pub fn navigate_left(&mut self) {
        if self.view_mode == ViewMode::Kanban {
            let idx = (self.selected_column.index() + Column::COUNT - 1) % Column::COUNT;
            self.selected_column = Column::from_index(idx).unwrap_or_default();
            self.clamp_selection();
        }
    }

    /// Moves to the next Kanban column, wrapping around.
    pub fn navigate_right(&mut self) {
        if self.view_mode == ViewMode::Kanban {
            let idx = (self.selected_column.index() + 1) % Column::COUNT;
            self.selected_column = Column::from_index(idx).unwrap_or_default();
            self.clamp_selection();
        }
    }

    /// Expands the selected task, or collapses it if it is already expanded.
    ///
    /// Expanding one task collapses any other.
    pub fn toggle_expand(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
        self.subtask_cursor = 0;
    }

    /// Collapses the expanded task.
    ///
    /// Returns `true` if a task was expanded.
    pub fn collapse(&mut self) -> bool {
        self.subtask_cursor = 0;
        self.expanded.take().is_some()
    }

    /// Stars or unstars the selected task.
    pub fn toggle_star(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle_star(id);
        }
    }

    /// Advances the subtask cursor of the expanded task, wrapping around.
    pub fn next_subtask(&mut self) {
        let count = self.expanded_task().map_or(0, |t| t.subtasks().len());
        self.subtask_cursor = if count == 0 {
            0
        } else {
            (self.subtask_cursor + 1) % count
        };
    }

    /// Toggles the subtask under the cursor of the expanded task.
    pub fn toggle_subtask(&mut self) {
        let Some(task) = self.expanded_task() else {
            return;
        };
        let task_id = task.id;
        if let Some(subtask_id) = task.subtasks().get(self.subtask_cursor).map(|s| s.id) {
            self.store.toggle_subtask(task_id, subtask_id);
        }
    }

    /// Switches between list and Kanban view.
    ///
    /// The selected task stays selected in the other view.
    pub fn toggle_view(&mut self) {
        let selected = self.selected_id();
        self.view_mode = self.view_mode.toggled();
        info!(view = self.view_mode.display_name(), "switched view");
        if let Some(id) = selected {
            self.select(id);
        }
        self.clamp_selection();
    }

    /// Moves the cursor of the current view onto `id`, if it is visible.
    fn select(&mut self, id: TaskId) {
        let ids = self.visible_ids();
        match self.view_mode {
            ViewMode::List => {
                if let Some(row) = ids.iter().position(|&visible| visible == id) {
                    self.selected_row = row;
                }
            }
            ViewMode::Kanban => {
                let tasks = self.tasks_for(&ids);
                if let Some((column, card)) = KanbanBoard::partition(&tasks).locate(id) {
                    self.selected_column = column;
                    self.selected_card = card;
                }
            }
        }
    }

    /// Starts editing the search query.
    pub fn start_search(&mut self) {
        self.search_editing = true;
    }

    /// Stops editing the search query, keeping its text.
    pub fn end_search(&mut self) {
        self.search_editing = false;
    }

    /// Appends a character to the search query.
    pub fn push_search_char(&mut self, ch: char) {
        self.filter.query.push(ch);
        self.filter_changed();
    }

    /// Deletes the last character of the search query.
    pub fn pop_search_char(&mut self) {
        if self.filter.query.pop().is_some() {
            self.filter_changed();
        }
    }

    /// Cycles the status filter through "all" and every status.
    pub fn cycle_status(&mut self) {
        self.filter.status = self.filter.status.cycle(&Status::all());
        self.filter_changed();
    }

    /// Cycles the priority filter through "all" and every priority.
    pub fn cycle_priority(&mut self) {
        self.filter.priority = self.filter.priority.cycle(&Priority::all());
        self.filter_changed();
    }

    /// Cycles the category filter through "all" and every category.
    pub fn cycle_category(&mut self) {
        self.filter.category = self.filter.category.cycle(&Category::all());
        self.filter_changed();
    }

    /// Resets the filter to match everything.
    pub fn clear_filters(&mut self) {
        if self.filter.is_active() {
            self.filter = Filter::new();
            self.filter_changed();
        }
    }

    fn filter_changed(&mut self) {
        debug!(
            query = %self.filter.query,
            status = %self.filter.status,
            priority = %self.filter.priority,
            category = %self.filter.category,
            "filter changed"
        );
        self.clamp_selection();
    }

    /// Number of selectable items under the active cursor.
    fn current_len(&mut self) -> usize {
        let ids = self.visible_ids();
        match self.view_mode {
            ViewMode::List => ids.len(),
            ViewMode::Kanban => {
                let tasks = self.tasks_for(&ids);
                KanbanBoard::partition(&tasks).lane(self.selected_column).len()
            }
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.view_mode {
            ViewMode::List => &mut self.selected_row,
            ViewMode::Kanban => &mut self.selected_card,
        }
    }

    /// Keeps the cursors in range and collapses a task that is no longer
    /// visible.
    fn clamp_selection(&mut self) {
        let ids = self.visible_ids();
        if let Some(id) = self.expanded
            && !ids.contains(&id)
        {
            self.collapse();
        }

        self.selected_row = self.selected_row.min(ids.len().saturating_sub(1));

        let tasks = self.tasks_for(&ids);
        let lane_len = KanbanBoard::partition(&tasks).lane(self.selected_column).len();
        self.selected_card = self.selected_card.min(lane_len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_protocol::{Selection, Subtask};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn state() -> AppState {
        let store = TaskStore::new(vec![
            Task::new(1, "Third by due date", day(20)),
            Task::new(2, "First by due date", day(16)).with_subtasks(vec![
                Subtask::new(1, "One", false),
                Subtask::new(2, "Two", false),
            ]),
            Task::new(3, "Second by due date", day(18)).with_status(Status::Review),
        ])
        .unwrap();
        AppState::new(store, today())
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = state();
        assert_eq!(state.view_mode, ViewMode::List);
        assert_eq!(state.selected_row, 0);
        assert_eq!(state.selected_column, Column::Pending);
        assert!(state.expanded.is_none());
        assert!(!state.search_editing);
        assert!(!state.help_visible);
        assert_eq!(state.actor, "You");
        assert_eq!(state.window_days, 7);
    }

    #[test]
    fn with_config_applies_settings() {
        let config = Config {
            actor: "Dana".to_string(),
            default_view: ViewMode::Kanban,
            upcoming_window_days: 14,
            log_file: None,
        };
        let state = AppState::with_config(TaskStore::default(), today(), &config);
        assert_eq!(state.view_mode, ViewMode::Kanban);
        assert_eq!(state.actor, "Dana");
        assert_eq!(state.window_days, 14);
    }

    #[test]
    fn list_selection_follows_due_date_order() {
        let mut state = state();
        assert_eq!(state.selected_id(), Some(2));

        state.navigate_down();
        assert_eq!(state.selected_id(), Some(3));

        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected_id(), Some(2), "wraps to the top");

        state.navigate_up();
        assert_eq!(state.selected_id(), Some(1), "wraps to the bottom");
    }

    #[test]
    fn navigation_in_empty_view() {
        let mut state = AppState::new(TaskStore::default(), today());
        state.navigate_up();
        state.navigate_down();
        assert_eq!(state.selected_row, 0);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn left_right_only_move_in_kanban() {
        let mut state = state();
        state.navigate_right();
        assert_eq!(state.selected_column, Column::Pending);

        state.toggle_view();
        state.navigate_left();
        assert_eq!(state.selected_column, Column::Blocked);
        state.navigate_right();
        state.navigate_right();
        assert_eq!(state.selected_column, Column::InProgress);
    }

    #[test]
    fn toggle_view_keeps_the_selected_task() {
        let mut state = state();
        state.navigate_down();
        assert_eq!(state.selected_id(), Some(3));

        state.toggle_view();
        assert_eq!(state.selected_column, Column::Review);
        assert_eq!(state.selected_card, 0);
        assert_eq!(state.selected_id(), Some(3));

        state.navigate_left();
        state.navigate_left();
        state.navigate_down();
        assert_eq!(state.selected_id(), Some(1));

        state.toggle_view();
        assert_eq!(state.selected_row, 2);
        assert_eq!(state.selected_id(), Some(1));
    }

    #[test]
    fn kanban_selection_uses_column_cursor() {
        let mut state = state();
        state.toggle_view();
        assert_eq!(state.selected_id(), Some(2));

        state.navigate_down();
        assert_eq!(state.selected_id(), Some(1));

        state.selected_column = Column::Review;
        state.selected_card = 0;
        assert_eq!(state.selected_id(), Some(3));
    }

    #[test]
    fn single_expansion() {
        let mut state = state();
        state.toggle_expand();
        assert_eq!(state.expanded, Some(2));

        state.navigate_down();
        state.toggle_expand();
        assert_eq!(state.expanded, Some(3), "expanding another collapses the first");

        state.toggle_expand();
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn toggle_star_targets_selection() {
        let mut state = state();
        state.toggle_star();
        assert!(state.store.get(2).unwrap().starred);
        assert!(!state.store.get(1).unwrap().starred);
    }

    #[test]
    fn subtask_cursor_and_toggle() {
        let mut state = state();
        state.toggle_subtask();
        assert_eq!(state.store.version(), 0, "nothing expanded");

        state.toggle_expand();
        state.next_subtask();
        assert_eq!(state.subtask_cursor, 1);
        state.toggle_subtask();

        let task = state.store.get(2).unwrap();
        assert!(!task.subtasks()[0].completed);
        assert!(task.subtasks()[1].completed);
        assert_eq!(task.progress(), 50);

        state.next_subtask();
        assert_eq!(state.subtask_cursor, 0, "wraps around");
    }

    #[test]
    fn search_editing_updates_query() {
        let mut state = state();
        state.start_search();
        assert!(state.search_editing);

        for ch in "second".chars() {
            state.push_search_char(ch);
        }
        assert_eq!(state.visible_ids(), vec![3]);

        state.pop_search_char();
        assert_eq!(state.filter.query, "secon");

        state.end_search();
        assert!(!state.search_editing);
        assert_eq!(state.filter.query, "secon");
    }

    #[test]
    fn filter_change_clamps_and_collapses() {
        let mut state = state();
        state.navigate_up();
        state.toggle_expand();
        assert_eq!(state.expanded, Some(1));
        assert_eq!(state.selected_row, 2);

        state.cycle_status();
        assert_eq!(state.filter.status, Selection::Only(Status::Pending));
        assert_eq!(state.visible_ids(), vec![2, 1]);
        assert_eq!(state.selected_row, 1);
        assert_eq!(state.expanded, Some(1));

        state.cycle_status();
        assert_eq!(state.filter.status, Selection::Only(Status::InProgress));
        assert!(state.visible_ids().is_empty());
        assert_eq!(state.selected_row, 0);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn cycle_filters_and_clear() {
        let mut state = state();
        state.cycle_priority();
        state.cycle_category();
        assert_eq!(state.filter.priority, Selection::Only(Priority::Urgent));
        assert_eq!(state.filter.category, Selection::Only(Category::Finance));
        assert!(state.filter.is_active());

        state.clear_filters();
        assert!(!state.filter.is_active());
        assert_eq!(state.visible_ids().len(), 3);
    }

    #[test]
    fn stats_ignore_filter() {
        let mut state = state();
        state.push_search_char('z');
        assert!(state.visible_ids().is_empty());
        assert_eq!(state.stats().total, 3);
    }

    #[test]
    fn dismiss_help() {
        let mut state = state();
        assert!(!state.dismiss_help());
        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }

    #[test]
    fn collapse_reports_expansion() {
        let mut state = state();
        assert!(!state.collapse());
        state.toggle_expand();
        assert!(state.collapse());
        assert!(state.expanded.is_none());
    }

    fn apply(state: &mut AppState, op: u8) {
        match op {
            0 => state.navigate_up(),
            1 => state.navigate_down(),
            2 => state.navigate_left(),
            3 => state.navigate_right(),
            4 => state.toggle_expand(),
            5 => state.toggle_view(),
            6 => state.cycle_status(),
            7 => state.cycle_priority(),
            8 => state.push_search_char('r'),
            9 => state.pop_search_char(),
            _ => state.clear_filters(),
        }
    }

    proptest::proptest! {
        #[test]
        fn cursors_stay_in_range(ops in proptest::collection::vec(0u8..11, 0..40)) {
            let mut state = state();
            for op in ops {
                apply(&mut state, op);

                let ids = state.visible_ids();
                proptest::prop_assert!(state.selected_row < ids.len().max(1));
                if let Some(id) = state.expanded {
                    proptest::prop_assert!(ids.contains(&id));
                }
                let tasks = state.tasks_for(&ids);
                let lane_len = KanbanBoard::partition(&tasks).lane(state.selected_column).len();
                proptest::prop_assert!(state.selected_card < lane_len.max(1));
            }
        }
    }
}
