//! End-to-end scenarios over the seeded workload.

use chrono::NaiveDate;
use triage_protocol::{
    Filter, FilteredView, Message, Priority, Selection, Stats, Status, TaskStore, seed::seed_store,
};
use triage_tui::App;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn store() -> TaskStore {
    seed_store(today()).unwrap()
}

#[test]
fn contract_search_orders_by_due_date() {
    let store = store();
    let filter = Filter::default().with_query("CONTRACT");

    let ids: Vec<_> = filter.apply(store.tasks()).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 5]);
}

#[test]
fn seed_stats_flag_overdue_and_urgent_work() {
    let stats = Stats::collect(store().tasks(), today());

    assert_eq!(stats.total, 8);
    assert!(stats.overdue >= 1);
    assert!(stats.urgent >= 1);
    assert!(stats.mine >= 1);
}

#[test]
fn stats_ignore_the_filter() {
    let store = store();
    let before = Stats::collect(store.tasks(), today());

    let filtered = Filter::default().with_status(Selection::Only(Status::Completed));
    assert_eq!(filtered.apply(store.tasks()).len(), 1);

    assert_eq!(Stats::collect(store.tasks(), today()), before);
}

#[test]
fn filtered_view_tracks_store_mutations() {
    let mut store = store();
    let filter = Filter::default().with_priority(Selection::Only(Priority::Urgent));
    let mut view = FilteredView::default();

    assert_eq!(view.ids(&store, &filter), &[2, 6]);

    store.set_status(6, Status::Completed);
    // Completing a task keeps it visible; it only changes its column.
    assert_eq!(view.ids(&store, &filter), &[2, 6]);

    let completed = filter
        .clone()
        .with_status(Selection::Only(Status::Completed));
    assert_eq!(view.ids(&store, &completed), &[6]);
}

#[test]
fn keyboard_session_updates_the_store() {
    let mut app = App::new(store(), today());

    // Search for the overdue contract renewal and expand it.
    app.update(Message::StartSearch);
    for ch in "carrier".chars() {
        app.update(Message::SearchInput { ch });
    }
    app.update(Message::EndSearch);
    app.update(Message::ToggleExpand);
    assert_eq!(app.state().expanded, Some(2));

    // Tick the second subtask and star the task.
    app.update(Message::NextSubtask);
    app.update(Message::ToggleSubtask);
    app.update(Message::ToggleStar);

    let task = app.state().store.get(2).unwrap();
    assert_eq!(task.completed_subtasks(), 2);
    assert_eq!(task.progress(), 67);
    assert!(task.starred);

    // Clearing the filters keeps the expansion, since the task is still visible.
    app.update(Message::ClearFilters);
    assert_eq!(app.state().expanded, Some(2));

    app.update(Message::Quit);
    assert!(app.should_quit());
}
