use crate::clock::CalendarDays;
use crate::streak::{display_streak, StreakState};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Displayed streaks at or above this count are rendered "on fire".
pub const ON_FIRE_STREAK: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(String);

impl HabitId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HabitId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    #[serde(default)]
    pub last_check_in: Option<NaiveDate>,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub best_streak: u32,
}

impl Habit {
    pub fn new(name: &str) -> Self {
        Self {
            id: HabitId::generate(),
            name: name.trim().to_owned(),
            last_check_in: None,
            streak: 0,
            best_streak: 0,
        }
    }

    pub fn streak_state(&self) -> StreakState {
        StreakState {
            last_check_in: self.last_check_in,
            streak: self.streak,
            best_streak: self.best_streak,
        }
    }

    pub fn apply(&mut self, state: StreakState) {
        self.last_check_in = state.last_check_in;
        self.streak = state.streak;
        self.best_streak = state.best_streak;
    }

    pub fn view(&self, days: CalendarDays) -> HabitView {
        let streak = display_streak(self.last_check_in, self.streak, days);
        HabitView {
            id: self.id.clone(),
            name: self.name.clone(),
            streak,
            best_streak: self.best_streak,
            last_check_in: self.last_check_in,
            checked_today: self.last_check_in == Some(days.today),
            on_fire: streak >= ON_FIRE_STREAK,
        }
    }
}

/// Render-ready snapshot of a habit for one calendar day. Field names follow
/// the stored `Habit` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitView {
    pub id: HabitId,
    pub name: String,
    pub streak: u32,
    pub best_streak: u32,
    pub last_check_in: Option<NaiveDate>,
    pub checked_today: bool,
    pub on_fire: bool,
}

impl HabitView {
    pub fn days_label(&self) -> &'static str {
        if self.streak == 1 { "day" } else { "days" }
    }
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitsResponse {
    pub date: NaiveDate,
    pub habits: Vec<HabitView>,
}
