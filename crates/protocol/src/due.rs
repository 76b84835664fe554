//! Relative due-date classification.
//!
//! Maps a due date to a human-relative bucket ("Today", "Tomorrow",
//! "3 days overdue", "5 days", "Apr 2") and an urgency tier used to color
//! the label. Classification is a pure function of the target date and
//! "today", so callers re-evaluate it on every render.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of days ahead that are still shown as a relative countdown.
pub const DEFAULT_UPCOMING_WINDOW: u32 = 7;

/// How pressing a due date is, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// The due date has passed.
    Critical,
    /// Due today.
    High,
    /// Due tomorrow.
    Medium,
    /// Due within the upcoming window.
    Info,
    /// Due later than the upcoming window.
    Neutral,
}

/// The relative bucket a due date falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueBucket {
    /// Same calendar day as today.
    Today,
    /// The day after today.
    Tomorrow,
    /// In the past by this many days (always at least 1).
    Overdue(u32),
    /// In the future by this many days, within the upcoming window.
    Upcoming(u32),
    /// Beyond the upcoming window.
    Later(NaiveDate),
}

impl DueBucket {
    /// Returns the urgency tier of this bucket.
    #[must_use]
    pub const fn urgency(self) -> Urgency {
        match self {
            Self::Overdue(_) => Urgency::Critical,
            Self::Today => Urgency::High,
            Self::Tomorrow => Urgency::Medium,
            Self::Upcoming(_) => Urgency::Info,
            Self::Later(_) => Urgency::Neutral,
        }
    }
}

impl fmt::Display for DueBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str("Today"),
            Self::Tomorrow => f.write_str("Tomorrow"),
            Self::Overdue(days) => write!(f, "{days} days overdue"),
            Self::Upcoming(days) => write!(f, "{days} days"),
            Self::Later(date) => write!(f, "{}", date.format("%b %-d")),
        }
    }
}

/// A classified due date: the bucket plus its urgency tier.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use triage_protocol::{DueDate, Urgency};
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let due = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
///
/// let classified = DueDate::classify(due, today);
/// assert_eq!(classified.label(), "3 days overdue");
/// assert_eq!(classified.urgency(), Urgency::Critical);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DueDate {
    bucket: DueBucket,
}

impl DueDate {
    /// Classifies `target` relative to `today` with the default 7-day window.
    #[must_use]
    pub fn classify(target: NaiveDate, today: NaiveDate) -> Self {
        Self::classify_within(target, today, DEFAULT_UPCOMING_WINDOW)
    }

    /// Classifies `target` relative to `today`, showing dates up to
    /// `window_days` ahead as a countdown.
    #[must_use]
    pub fn classify_within(target: NaiveDate, today: NaiveDate, window_days: u32) -> Self {
        let diff = target.signed_duration_since(today).num_days();
        let bucket = match diff {
            0 => DueBucket::Today,
            1 => DueBucket::Tomorrow,
            d if d < 0 => DueBucket::Overdue(saturating_days(-d)),
            d if d <= i64::from(window_days) => DueBucket::Upcoming(saturating_days(d)),
            _ => DueBucket::Later(target),
        };
        Self { bucket }
    }

    /// Returns the bucket.
    #[must_use]
    pub const fn bucket(self) -> DueBucket {
        self.bucket
    }

    /// Returns the urgency tier.
    #[must_use]
    pub const fn urgency(self) -> Urgency {
        self.bucket.urgency()
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(self) -> String {
        self.bucket.to_string()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bucket.fmt(f)
    }
}

fn saturating_days(days: i64) -> u32 {
    u32::try_from(days).unwrap_or(u32::MAX)
}
