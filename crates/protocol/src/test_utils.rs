//! Test utilities for the protocol crate.
//!
//! Shared helpers and proptest strategies used by the unit and property
//! tests of the filter, stats, board and store modules.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use crate::task::{Category, Priority, Status, Subtask, Task, TaskId};

/// Builds a date, panicking on invalid input (tests only).
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// The fixed "today" used by property tests.
pub(crate) fn today() -> NaiveDate {
    date(2026, 3, 15)
}

/// Returns `today()` shifted by `offset` days.
pub(crate) fn day_offset(offset: i64) -> NaiveDate {
    let base = today();
    if offset >= 0 {
        base + Days::new(offset.unsigned_abs())
    } else {
        base - Days::new(offset.unsigned_abs())
    }
}

impl Arbitrary for Priority {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::sample::select(Priority::all().to_vec()).boxed()
    }
}

impl Arbitrary for Status {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::sample::select(Status::all().to_vec()).boxed()
    }
}

impl Arbitrary for Category {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> <Category as Arbitrary>::Strategy {
        prop::sample::select(Category::all().to_vec()).boxed()
    }
}

prop_compose! {
    /// A task with the given id and arbitrary content. Due dates fall in a
    /// narrow window around `today()` so that ties are common.
    pub(crate) fn arb_task(id: TaskId)(
        title in "[a-zA-Z][a-zA-Z ]{0,20}",
        description in "[a-zA-Z ]{0,40}",
        priority in any::<Priority>(),
        status in any::<Status>(),
        category in any::<Category>(),
        mine in any::<bool>(),
        due in -5i64..10,
        starred in any::<bool>(),
        subtasks in prop::collection::vec(any::<bool>(), 0..5),
    ) -> Task {
        let checklist = subtasks
            .into_iter()
            .enumerate()
            .map(|(i, done)| Subtask::new(i as u32 + 1, format!("step {i}"), done))
            .collect();
        Task::new(id, title, day_offset(due))
            .with_description(description)
            .with_priority(priority)
            .with_status(status)
            .with_category(category)
            .assigned_to(if mine { "You" } else { "Alex" })
            .with_star(starred)
            .with_subtasks(checklist)
    }
}

/// A collection of up to `max` tasks with unique ids `1..=n`.
pub(crate) fn arb_tasks(max: usize) -> impl Strategy<Value = Vec<Task>> {
    (0..=max).prop_flat_map(|len| {
        (1..=len as TaskId)
            .map(arb_task)
            .collect::<Vec<_>>()
    })
}
