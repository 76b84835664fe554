//! Rendering tests over the seeded workload.
//!
//! These render whole widgets, mostly from the seed store, and check what a
//! user would read off the screen. Small fixed layouts are pinned with insta
//! snapshots.

use chrono::NaiveDate;
use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use triage_protocol::{
    Column, Filter, KanbanBoard, Priority, Stats, Status, Task, TaskStore, seed::seed_store,
};

use super::{
    BoardCursor, ListCursor, render_board, render_filter_bar, render_help_overlay,
    render_stats_bar, render_task_list,
};
use crate::test_utils::buffer_to_string;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

fn store() -> TaskStore {
    seed_store(today()).unwrap()
}

fn row_of(buf: &Buffer, needle: &str) -> Option<u16> {
    let content = buffer_to_string(buf);
    content
        .lines()
        .position(|line| line.contains(needle))
        .and_then(|y| u16::try_from(y).ok())
}

#[test]
fn list_orders_seed_by_due_date() {
    let store = store();
    let visible = Filter::default().apply(store.tasks());
    let area = Rect::new(0, 0, 140, 12);
    let mut buf = Buffer::empty(area);

    render_task_list(&visible, ListCursor::default(), today(), 7, area, &mut buf);

    let rows: Vec<u16> = [
        "Draft 2027 growth plan",
        "Renew carrier appointment",
        "Launch final-expense lead",
        "Approve Q3 commission",
        "Annual state licensing",
        "Quarterly leadership offsite",
        "Onboard three new field",
        "Migrate CRM",
    ]
    .iter()
    .map(|title| row_of(&buf, title).unwrap_or_else(|| panic!("missing {title}")))
    .collect();

    assert!(rows.windows(2).all(|w| w[0] < w[1]), "rows out of order: {rows:?}");
    assert!(buffer_to_string(&buf).contains("Tasks (8)"));
}

#[test]
fn list_labels_use_urgency_colors() {
    let store = store();
    let visible = Filter::default().apply(store.tasks());
    let area = Rect::new(0, 0, 140, 12);
    let mut buf = Buffer::empty(area);

    render_task_list(&visible, ListCursor::default(), today(), 7, area, &mut buf);

    let content = buffer_to_string(&buf);
    let y = row_of(&buf, "2 days overdue").expect("overdue row");
    let line = content.lines().nth(usize::from(y)).expect("line");
    let x = line
        .find("2 days overdue")
        .map(|byte| line[..byte].chars().count())
        .expect("label position");
    let cell = buf
        .cell((u16::try_from(x).expect("fits"), y))
        .expect("cell should exist");
    assert_eq!(cell.fg, Color::Red);

    assert!(content.contains("Today"));
    assert!(content.contains("Tomorrow"));
    assert!(content.contains("3 days"));
}

#[test]
fn search_narrows_list_and_filter_bar_count() {
    let store = store();
    let filter = Filter::default().with_query("contract");
    let visible = filter.apply(store.tasks());
    assert_eq!(visible.len(), 2);

    let area = Rect::new(0, 0, 140, 8);
    let mut buf = Buffer::empty(area);
    render_task_list(&visible, ListCursor::default(), today(), 7, area, &mut buf);
    let content = buffer_to_string(&buf);
    assert!(content.contains("Renew carrier appointment contracts"));
    assert!(content.contains("Onboard three new field agents"));
    assert!(!content.contains("Draft 2027 growth plan"));

    let area = Rect::new(0, 0, 100, 1);
    let mut buf = Buffer::empty(area);
    render_filter_bar(&filter, false, visible.len(), store.len(), area, &mut buf);
    assert!(buffer_to_string(&buf).contains("2 of 8"));
}

#[test]
fn board_places_seed_in_status_columns() {
    let store = store();
    let visible: Vec<&Task> = Filter::default().apply(store.tasks());
    let board = KanbanBoard::partition(&visible);
    let area = Rect::new(0, 0, 150, 30);
    let mut buf = Buffer::empty(area);

    render_board(&board, BoardCursor::default(), today(), 7, area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Pending (2)"));
    assert!(content.contains("In Progress (2)"));
    assert!(content.contains("Review (1)"));
    assert!(content.contains("Completed (1)"));
    assert!(content.contains("Blocked (1)"));
    // Deferred work has no column.
    assert!(!content.contains("Migrate CRM"));
}

#[test]
fn board_cursor_highlights_focused_column() {
    let store = store();
    let visible: Vec<&Task> = Filter::default().apply(store.tasks());
    let board = KanbanBoard::partition(&visible);
    let area = Rect::new(0, 0, 150, 30);
    let mut buf = Buffer::empty(area);
    let cursor = BoardCursor {
        column: Column::Review,
        card: 0,
    };

    render_board(&board, cursor, today(), 7, area, &mut buf);

    let content = buffer_to_string(&buf);
    let first_line = content.lines().next().expect("title row");
    let x = first_line
        .find("Review (1)")
        .map(|byte| first_line[..byte].chars().count())
        .expect("review title");
    let cell = buf
        .cell((u16::try_from(x).expect("fits"), 0))
        .expect("cell should exist");
    assert_eq!(cell.fg, Color::Cyan);
}

#[test]
fn stats_bar_matches_seed_counters() {
    let store = store();
    let stats = Stats::collect(store.tasks(), today());
    let area = Rect::new(0, 0, 100, 1);
    let mut buf = Buffer::empty(area);

    render_stats_bar(&stats, area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Total 8"));
    assert!(content.contains("Overdue 1"));
    assert!(content.contains("Urgent 2"));
}

#[test]
fn help_overlay_draws_over_content() {
    let store = store();
    let visible = Filter::default().apply(store.tasks());
    let area = Rect::new(0, 0, 120, 30);
    let mut buf = Buffer::empty(area);

    render_task_list(&visible, ListCursor::default(), today(), 7, area, &mut buf);
    render_help_overlay(area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Help"));
    assert!(content.contains("Cycle priority"));
}

#[test]
fn list_rows_snapshot() {
    let tasks = vec![
        Task::new(1, "Renew carrier contracts", NaiveDate::from_ymd_opt(2026, 3, 13).unwrap())
            .with_priority(Priority::Urgent)
            .with_star(true),
        Task::new(2, "Draft offsite agenda", NaiveDate::from_ymd_opt(2026, 3, 18).unwrap())
            .with_status(Status::InProgress)
            .with_progress(40),
    ];
    let visible: Vec<&Task> = tasks.iter().collect();
    let area = Rect::new(0, 0, 70, 5);
    let mut buf = Buffer::empty(area);

    render_task_list(&visible, ListCursor::default(), today(), 7, area, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf), @r"
    ╭ Tasks (2) ─────────────────────────────────────────────────────────╮
    │›★ URG  Renew carrier contracts     Pending     2 days overdue    0%│
    │ ☆ MED  Draft offsite agenda        In Progress 3 days           40%│
    │                                                                    │
    ╰────────────────────────────────────────────────────────────────────╯
    ");
}

#[test]
fn help_overlay_snapshot() {
    let area = Rect::new(0, 0, 42, 27);
    let mut buf = Buffer::empty(area);

    render_help_overlay(area, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf), @r"
    ╭ Help ──────────────────────────────────╮
    │                                        │
    │  Navigation                            │
    │  ↑ ↓        Select previous / next     │
    │  ← →        Previous / next column     │
    │  v          Switch list / board        │
    │                                        │
    │  Tasks                                 │
    │  Enter Space Expand / collapse         │
    │  Tab        Next subtask               │
    │  x          Toggle subtask             │
    │  *          Star / unstar              │
    │                                        │
    │  Filters                               │
    │  /          Search                     │
    │  s          Cycle status               │
    │  p          Cycle priority             │
    │  c          Cycle category             │
    │  0          Clear filters              │
    │                                        │
    │  General                               │
    │  Esc        Close / collapse           │
    │  ?          Toggle help                │
    │  Ctrl+C     Quit                       │
    │                                        │
    │  Press any key to close                │
    ╰────────────────────────────────────────╯
    ");
}
