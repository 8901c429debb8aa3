//! Calendar-day source for streak computations.
//!
//! Everything date-dependent goes through a [`Clock`], so tests can pin
//! "today" instead of touching the real system clock.

use chrono::{Datelike, Duration, Local, NaiveDate};
use std::sync::atomic::{AtomicI32, Ordering};

/// The two days every streak decision is made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDays {
    pub today: NaiveDate,
    pub yesterday: NaiveDate,
}

impl CalendarDays {
    pub fn for_day(today: NaiveDate) -> Self {
        Self {
            today,
            yesterday: today - Duration::days(1),
        }
    }
}

pub trait Clock: Send + Sync {
    /// Current calendar day in the user's local timezone.
    fn today(&self) -> NaiveDate;

    fn yesterday(&self) -> NaiveDate {
        self.days().yesterday
    }

    fn days(&self) -> CalendarDays {
        CalendarDays::for_day(self.today())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a day that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    days_from_ce: AtomicI32,
}

impl FixedClock {
    pub fn new(day: NaiveDate) -> Self {
        Self {
            days_from_ce: AtomicI32::new(day.num_days_from_ce()),
        }
    }

    pub fn set(&self, day: NaiveDate) {
        self.days_from_ce
            .store(day.num_days_from_ce(), Ordering::SeqCst);
    }

    pub fn advance(&self, days: i32) {
        self.days_from_ce.fetch_add(days, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        let days = self.days_from_ce.load(Ordering::SeqCst);
        NaiveDate::from_num_days_from_ce_opt(days).unwrap_or_default()
    }
}
