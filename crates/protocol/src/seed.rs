//! Built-in task data for the executive dashboard.
//!
//! The board starts from a fixed set of eight tasks, one per category. Dates
//! are expressed relative to "today" so that the seed always shows a mix of
//! overdue, due-today and upcoming work.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use triage_protocol::seed::seed_store;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
//! let store = seed_store(today).unwrap();
//! assert_eq!(store.len(), 8);
//! ```

use chrono::{Days, NaiveDate};

use crate::error::Result;
use crate::store::TaskStore;
use crate::task::{Category, Priority, Status, Subtask, Task};

/// Shifts `today` by a signed number of days.
fn offset(today: NaiveDate, days: i64) -> NaiveDate {
    let span = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        today.checked_add_days(span)
    } else {
        today.checked_sub_days(span)
    };
    shifted.unwrap_or(today)
}

/// Builds a checklist from `(title, completed)` pairs, numbering from 1.
fn checklist(items: &[(&str, bool)]) -> Vec<Subtask> {
    items
        .iter()
        .zip(1..)
        .map(|(&(title, done), id)| Subtask::new(id, title, done))
        .collect()
}

/// Returns the seed tasks, dated relative to `today`.
///
/// The set contains exactly one urgent, pending task owned by the current
/// actor that is two days overdue.
#[must_use]
pub fn seed_tasks(today: NaiveDate) -> Vec<Task> {
    let day = |days| offset(today, days);

    vec![
        Task::new(1, "Approve Q3 commission payouts", day(1))
            .with_description("Sign off on producer commission statements before payroll closes.")
            .with_priority(Priority::High)
            .with_status(Status::InProgress)
            .with_category(Category::Finance)
            .created_on(day(-10))
            .with_activity(4, 2)
            .with_star(true)
            .with_subtasks(checklist(&[
                ("Reconcile carrier statements", true),
                ("Review chargebacks", true),
                ("Approve override bonuses", false),
                ("Send to payroll", false),
            ]))
            .with_tags(["commissions", "payroll"])
            .with_hours(Some(6.0), Some(3.5)),
        Task::new(2, "Renew carrier appointment contracts", day(-2))
            .with_description("Two carrier agreements lapse this month; renewal paperwork is outstanding.")
            .with_priority(Priority::Urgent)
            .with_status(Status::Pending)
            .with_category(Category::Contracts)
            .created_on(day(-21))
            .with_activity(7, 5)
            .with_subtasks(checklist(&[
                ("Collect signed addenda", true),
                ("Negotiate compensation grid", false),
                ("Submit to carrier portal", false),
            ]))
            .with_tags(["carriers", "legal"])
            .with_hours(Some(10.0), Some(4.0)),
        Task::new(3, "Quarterly leadership offsite agenda", day(5))
            .with_description("Finalize agenda, speakers and breakout sessions for the managers' offsite.")
            .with_priority(Priority::Medium)
            .with_status(Status::Review)
            .with_category(Category::Leadership)
            .assigned_to("Sarah Chen")
            .created_on(day(-14))
            .with_activity(3, 1)
            .with_progress(80)
            .with_tags(["offsite", "planning"])
            .with_hours(Some(8.0), Some(6.5)),
        Task::new(4, "Launch final-expense lead campaign", day(0))
            .with_description("Go live with the direct-mail and landing page campaign for seniors.")
            .with_priority(Priority::High)
            .with_status(Status::InProgress)
            .with_category(Category::Marketing)
            .assigned_to("Marcus Reed")
            .created_on(day(-12))
            .with_activity(9, 6)
            .with_star(true)
            .with_subtasks(checklist(&[
                ("Approve mailer copy", true),
                ("Publish landing page", true),
                ("Configure lead routing", true),
                ("Brief call center", false),
                ("Set up attribution report", false),
            ]))
            .with_tags(["leads", "seniors", "direct-mail"])
            .with_hours(Some(16.0), Some(11.0)),
        Task::new(5, "Onboard three new field agents", day(9))
            .with_description("Blocked on background checks; contracting packets are still with the carrier.")
            .with_priority(Priority::Medium)
            .with_status(Status::Blocked)
            .with_category(Category::HR)
            .created_on(day(-7))
            .with_activity(2, 3)
            .with_subtasks(checklist(&[
                ("Background checks", true),
                ("Licensing verification", false),
                ("Product training", false),
                ("CRM accounts", false),
            ]))
            .with_tags(["hiring", "agents"])
            .with_hours(Some(12.0), None),
        Task::new(6, "Annual state licensing audit", day(3))
            .with_description("Verify every producer license and CE credit ahead of the regulator review.")
            .with_priority(Priority::Urgent)
            .with_status(Status::Pending)
            .with_category(Category::Compliance)
            .assigned_to("Dana Whitfield")
            .created_on(day(-30))
            .with_activity(5, 8)
            .with_progress(10)
            .with_tags(["audit", "licensing"])
            .with_hours(Some(20.0), Some(2.0)),
        Task::new(7, "Migrate CRM to new policy admin system", day(21))
            .with_description("Move client records and policy data once the vendor finishes the import tool.")
            .with_priority(Priority::Low)
            .with_status(Status::Deferred)
            .with_category(Category::Operations)
            .assigned_to("IT Team")
            .created_on(day(-45))
            .with_activity(1, 0)
            .with_tags(["crm", "systems"]),
        Task::new(8, "Draft 2027 growth plan", day(-6))
            .with_description("Set recruiting, premium and retention targets for next year.")
            .with_priority(Priority::Medium)
            .with_status(Status::Completed)
            .with_category(Category::Strategy)
            .created_on(day(-40))
            .with_activity(12, 4)
            .with_subtasks(checklist(&[
                ("Market analysis", true),
                ("Revenue model", true),
                ("Board presentation", true),
            ]))
            .with_tags(["planning", "2027"])
            .with_hours(Some(24.0), Some(26.0)),
    ]
}

/// Returns the seed tasks wrapped in a [`TaskStore`].
///
/// # Errors
///
/// Only fails if the seed itself contains duplicate ids.
pub fn seed_store(today: NaiveDate) -> Result<TaskStore> {
    TaskStore::new(seed_tasks(today))
}
