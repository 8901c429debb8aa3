use crate::errors::AppError;
use crate::models::{HabitId, HabitsResponse, NameRequest};
use crate::state::AppState;
use crate::tracker::HabitTracker;
use crate::ui::render_index;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{Html, Redirect},
    Form, Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    let days = tracker.clock().days();
    Html(render_index(days.today, &tracker.views_for(days)))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<HabitsResponse> {
    let tracker = state.tracker.lock().await;
    Json(to_response(&tracker))
}

pub async fn create_habit(
    State(state): State<AppState>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<HabitsResponse>, AppError> {
    let Json(payload) = payload?;
    let response = state
        .mutate(move |tracker| {
            tracker.create(&payload.name);
            to_response(tracker)
        })
        .await?;
    Ok(Json(response))
}

pub async fn rename_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<HabitsResponse>, AppError> {
    let Json(payload) = payload?;
    let response = state
        .mutate(move |tracker| {
            tracker.rename(&HabitId::from(id.as_str()), &payload.name);
            to_response(tracker)
        })
        .await?;
    Ok(Json(response))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HabitsResponse>, AppError> {
    let response = state
        .mutate(move |tracker| {
            tracker.delete(&HabitId::from(id.as_str()));
            to_response(tracker)
        })
        .await?;
    Ok(Json(response))
}

pub async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HabitsResponse>, AppError> {
    let response = state
        .mutate(move |tracker| {
            tracker.check_in(&HabitId::from(id.as_str()));
            to_response(tracker)
        })
        .await?;
    Ok(Json(response))
}

pub async fn form_create(
    State(state): State<AppState>,
    Form(payload): Form<NameRequest>,
) -> Result<Redirect, AppError> {
    state
        .mutate(move |tracker| tracker.create(&payload.name))
        .await?;
    Ok(Redirect::to("/"))
}

pub async fn form_rename(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(payload): Form<NameRequest>,
) -> Result<Redirect, AppError> {
    state
        .mutate(move |tracker| tracker.rename(&HabitId::from(id.as_str()), &payload.name))
        .await?;
    Ok(Redirect::to("/"))
}

pub async fn form_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    state
        .mutate(move |tracker| tracker.delete(&HabitId::from(id.as_str())))
        .await?;
    Ok(Redirect::to("/"))
}

pub async fn form_check_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    state
        .mutate(move |tracker| tracker.check_in(&HabitId::from(id.as_str())))
        .await?;
    Ok(Redirect::to("/"))
}

// One clock read per response keeps `date` and the view flags on the same day.
fn to_response(tracker: &HabitTracker) -> HabitsResponse {
    let days = tracker.clock().days();
    HabitsResponse {
        date: days.today,
        habits: tracker.views_for(days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use std::sync::Arc;

    #[test]
    fn response_date_matches_view_flags() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let clock = Arc::new(FixedClock::new(day));
        let mut tracker = HabitTracker::open(Box::new(MemoryStore::default()), clock.clone());
        let id = tracker.create("Run").unwrap();
        tracker.check_in(&id);

        let response = to_response(&tracker);
        assert_eq!(response.date, day);
        assert!(response.habits[0].checked_today);

        clock.advance(1);
        let response = to_response(&tracker);
        assert_eq!(response.date, day.succ_opt().unwrap());
        assert!(!response.habits[0].checked_today);
        assert_eq!(response.habits[0].streak, 1);
    }
}
