use crate::clock::CalendarDays;
use chrono::NaiveDate;

/// The persisted streak fields of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakState {
    pub last_check_in: Option<NaiveDate>,
    pub streak: u32,
    pub best_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckIn {
    Recorded(StreakState),
    AlreadyCheckedIn,
}

/// Applies a check-in on `days.today`.
///
/// The streak only continues when the previous check-in was exactly
/// yesterday; any other history restarts it at 1.
pub fn compute_check_in(state: StreakState, days: CalendarDays) -> CheckIn {
    if state.last_check_in == Some(days.today) {
        return CheckIn::AlreadyCheckedIn;
    }

    let streak = if state.last_check_in == Some(days.yesterday) {
        state.streak.saturating_add(1)
    } else {
        1
    };

    CheckIn::Recorded(StreakState {
        last_check_in: Some(days.today),
        streak,
        best_streak: streak.max(state.best_streak),
    })
}

/// Streak to show on screen. A gap of two or more days reads as 0 but the
/// stored value is left alone until the next check-in.
pub fn display_streak(last_check_in: Option<NaiveDate>, streak: u32, days: CalendarDays) -> u32 {
    match last_check_in {
        Some(day) if day != days.today && day != days.yesterday => 0,
        _ => streak,
    }
}
