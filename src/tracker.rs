//! Habit lifecycle: create, rename, delete and check in.
//!
//! The tracker owns the in-memory collection. Every operation that changes
//! it writes the whole collection back through the [`HabitStore`]. Invalid
//! requests (blank names, unknown ids, a second check-in on the same day)
//! are absorbed without touching storage.

use crate::clock::{CalendarDays, Clock};
use crate::models::{Habit, HabitId, HabitView};
use crate::storage::HabitStore;
use crate::streak::{compute_check_in, CheckIn};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    Recorded { streak: u32, best_streak: u32 },
    AlreadyCheckedIn,
    UnknownHabit,
}

pub struct HabitTracker {
    store: Box<dyn HabitStore>,
    clock: Arc<dyn Clock>,
    habits: Vec<Habit>,
}

impl HabitTracker {
    pub fn open(store: Box<dyn HabitStore>, clock: Arc<dyn Clock>) -> Self {
        let habits = store.load();
        info!(count = habits.len(), "loaded habits");
        Self {
            store,
            clock,
            habits,
        }
    }

    pub fn list(&self) -> &[Habit] {
        &self.habits
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Render-ready habits for the current day.
    pub fn views(&self) -> Vec<HabitView> {
        self.views_for(self.clock.days())
    }

    pub fn views_for(&self, days: CalendarDays) -> Vec<HabitView> {
        self.habits.iter().map(|habit| habit.view(days)).collect()
    }

    pub fn create(&mut self, name: &str) -> Option<HabitId> {
        if name.trim().is_empty() {
            debug!("ignoring habit with blank name");
            return None;
        }

        let habit = Habit::new(name);
        let id = habit.id.clone();
        info!(%id, name = %habit.name, "created habit");
        self.habits.push(habit);
        self.persist();
        Some(id)
    }

    pub fn rename(&mut self, id: &HabitId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!(%id, "ignoring rename to blank name");
            return false;
        }
        let Some(habit) = self.find_mut(id) else {
            debug!(%id, "ignoring rename of unknown habit");
            return false;
        };

        habit.name = name.to_owned();
        info!(%id, name, "renamed habit");
        self.persist();
        true
    }

    pub fn delete(&mut self, id: &HabitId) -> bool {
        let Some(index) = self.habits.iter().position(|habit| &habit.id == id) else {
            debug!(%id, "ignoring delete of unknown habit");
            return false;
        };

        self.habits.remove(index);
        info!(%id, "deleted habit");
        self.persist();
        true
    }

    pub fn check_in(&mut self, id: &HabitId) -> CheckInOutcome {
        let days = self.clock.days();
        let Some(habit) = self.find_mut(id) else {
            debug!(%id, "ignoring check-in of unknown habit");
            return CheckInOutcome::UnknownHabit;
        };

        let state = match compute_check_in(habit.streak_state(), days) {
            CheckIn::Recorded(state) => state,
            CheckIn::AlreadyCheckedIn => {
                debug!(%id, "already checked in today");
                return CheckInOutcome::AlreadyCheckedIn;
            }
        };

        habit.apply(state);
        info!(%id, streak = state.streak, best = state.best_streak, "checked in");
        self.persist();
        CheckInOutcome::Recorded {
            streak: state.streak,
            best_streak: state.best_streak,
        }
    }

    fn find_mut(&mut self, id: &HabitId) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|habit| &habit.id == id)
    }

    // The in-memory collection stays authoritative when a write fails; the
    // next successful save carries the change.
    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.habits) {
            error!("failed to persist habits: {err}");
        }
    }
}
