use crate::errors::StoreError;
use crate::models::{Habit, HabitId};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// Whole-collection persistence for habits.
///
/// `load` never fails: missing or unreadable data yields an empty list.
/// `save` replaces everything that was stored before.
pub trait HabitStore: Send {
    fn load(&self) -> Vec<Habit>;
    fn save(&mut self, habits: &[Habit]) -> Result<(), StoreError>;
}

/// Habits kept as a pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "habits.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HabitStore for JsonFileStore {
    fn load(&self) -> Vec<Habit> {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<Vec<Habit>>(&bytes) {
                Ok(habits) => normalize(habits),
                Err(err) => {
                    error!("failed to parse habit file {}: {err}", self.path.display());
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                error!("failed to read habit file {}: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    fn save(&mut self, habits: &[Habit]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(habits)?;
        let temp = self.temp_path();
        fs::write(&temp, payload)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-process store, handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    habits: Vec<Habit>,
}

impl MemoryStore {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self {
            habits: normalize(habits),
        }
    }
}

impl HabitStore for MemoryStore {
    fn load(&self) -> Vec<Habit> {
        self.habits.clone()
    }

    fn save(&mut self, habits: &[Habit]) -> Result<(), StoreError> {
        self.habits = habits.to_vec();
        Ok(())
    }
}

/// Repairs records that break the habit invariants. Valid collections pass
/// through untouched.
pub fn normalize(habits: Vec<Habit>) -> Vec<Habit> {
    let mut seen: HashSet<HabitId> = HashSet::with_capacity(habits.len());
    let mut out = Vec::with_capacity(habits.len());

    for mut habit in habits {
        let trimmed = habit.name.trim();
        if trimmed.is_empty() {
            warn!(id = %habit.id, "dropping habit with empty name");
            continue;
        }
        if trimmed.len() != habit.name.len() {
            let trimmed = trimmed.to_owned();
            habit.name = trimmed;
        }
        if !seen.insert(habit.id.clone()) {
            warn!(id = %habit.id, "dropping habit with duplicate id");
            continue;
        }
        if habit.last_check_in.is_none() && habit.streak != 0 {
            warn!(id = %habit.id, streak = habit.streak, "clearing streak without a check-in");
            habit.streak = 0;
        }
        if habit.last_check_in.is_some() && habit.streak == 0 {
            warn!(id = %habit.id, "raising streak of checked-in habit to 1");
            habit.streak = 1;
        }
        if habit.best_streak < habit.streak {
            warn!(id = %habit.id, best = habit.best_streak, streak = habit.streak, "raising best streak");
            habit.best_streak = habit.streak;
        }
        out.push(habit);
    }

    out
}
