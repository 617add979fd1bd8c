use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hero))
        .route("/dashboard", get(handlers::dashboard))
        .route("/mood", post(handlers::submit_form))
        .route("/api/entries", get(handlers::list_entries).post(handlers::create_entry))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .with_state(state)
}
