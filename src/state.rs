use crate::errors::AppError;
use crate::tracker::HabitTracker;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<HabitTracker>>,
}

impl AppState {
    pub fn new(tracker: HabitTracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Runs a tracker operation on the blocking pool, since every change
    /// ends in a synchronous file write. The lock is held for the whole call.
    pub async fn mutate<T, F>(&self, op: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(&mut HabitTracker) -> T + Send + 'static,
    {
        let mut tracker = Arc::clone(&self.tracker).lock_owned().await;
        let result = tokio::task::spawn_blocking(move || op(&mut *tracker)).await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn state() -> AppState {
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
        AppState::new(HabitTracker::open(Box::new(MemoryStore::default()), clock))
    }

    #[tokio::test(flavor = "current_thread")]
    async fn mutate_runs_off_the_runtime_thread() {
        let state = state();
        let runtime_thread = std::thread::current().id();

        let (id, worker_thread) = state
            .mutate(|tracker| (tracker.create("Run"), std::thread::current().id()))
            .await
            .unwrap();

        assert!(id.is_some());
        assert_ne!(worker_thread, runtime_thread);
        assert_eq!(state.tracker.lock().await.list().len(), 1);
    }

    #[tokio::test]
    async fn mutate_serializes_changes() {
        let state = state();
        let mut tasks = Vec::new();
        for n in 0..8 {
            let state = state.clone();
            tasks.push(tokio::spawn(async move {
                state.mutate(move |tracker| tracker.create(&format!("Habit {n}"))).await
            }));
        }
        for task in tasks {
            assert!(task.await.unwrap().unwrap().is_some());
        }
        assert_eq!(state.tracker.lock().await.list().len(), 8);
    }

    #[tokio::test]
    async fn panicking_operation_surfaces_as_internal_error() {
        let state = state();
        let err = state
            .mutate(|_tracker| -> bool { panic!("boom") })
            .await
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
