use crate::errors::AppError;
use crate::models::{DashboardQuery, DashboardResponse, Mood, MoodEntry, SubmitMoodRequest};
use crate::state::AppState;
use crate::stats::build_dashboard;
use crate::ui::{render_dashboard, render_hero, Notice};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use tracing::info;

const SELECT_MOOD: &str = "Please select a mood";

pub async fn hero() -> Html<String> {
    Html(render_hero())
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let repo = state.repo.lock().await;
    let view = build_dashboard(repo.entries());
    let notice = query.notice.as_deref().and_then(Notice::from_param);
    Html(render_dashboard(&view, notice))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    let repo = state.repo.lock().await;
    Json(repo.entries().to_vec())
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let repo = state.repo.lock().await;
    Json(build_dashboard(repo.entries()))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<SubmitMoodRequest>,
) -> Result<(StatusCode, Json<MoodEntry>), AppError> {
    let entry = entry_from(payload)?;
    let saved = record(&state, entry).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(payload): Form<SubmitMoodRequest>,
) -> Result<Redirect, AppError> {
    if payload.mood.is_none() {
        return Ok(Redirect::to(Notice::SelectMood.location()));
    }
    let entry = entry_from(payload)?;
    record(&state, entry).await?;
    Ok(Redirect::to(Notice::Recorded.location()))
}

fn entry_from(payload: SubmitMoodRequest) -> Result<MoodEntry, AppError> {
    let Some(value) = payload.mood else {
        return Err(AppError::bad_request(SELECT_MOOD));
    };
    let mood = Mood::new(value)?;
    Ok(MoodEntry::new(mood, payload.note.unwrap_or_default()))
}

async fn record(state: &AppState, entry: MoodEntry) -> Result<MoodEntry, AppError> {
    let mut repo = state.repo.lock().await;
    let saved = repo.append_and_persist(entry).await?.clone();
    info!(
        mood = saved.mood.value(),
        total = repo.entries().len(),
        "recorded mood entry"
    );
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_without_mood_is_rejected() {
        let err = entry_from(SubmitMoodRequest { mood: None, note: Some("hi".into()) }).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, SELECT_MOOD);
    }

    #[test]
    fn submission_out_of_range_is_rejected() {
        let err = entry_from(SubmitMoodRequest { mood: Some(6), note: None }).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_note_becomes_empty() {
        let entry = entry_from(SubmitMoodRequest { mood: Some(3), note: None }).unwrap();
        assert_eq!(entry.mood.value(), 3);
        assert_eq!(entry.note, "");
    }
}
