pub mod app;
pub mod clock;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod streak;
pub mod tracker;
pub mod ui;
pub mod state;

pub use app::router;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use state::AppState;
pub use storage::{HabitStore, JsonFileStore, MemoryStore};
pub use tracker::{CheckInOutcome, HabitTracker};
