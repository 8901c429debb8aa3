use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits", post(handlers::form_create))
        .route("/habits/:id/check-in", post(handlers::form_check_in))
        .route("/habits/:id/rename", post(handlers::form_rename))
        .route("/habits/:id/delete", post(handlers::form_delete))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/api/habits/:id", put(handlers::rename_habit).delete(handlers::delete_habit))
        .route("/api/habits/:id/check-in", post(handlers::check_in))
        .with_state(state)
}
