mod practice;
mod profile;
mod skills;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/practice/next", post(practice::next))
        .route("/api/skills/update", post(skills::update))
        .route("/api/skills/:user_id", get(skills::list))
        .route(
            "/api/profile/:user_id",
            get(profile::get_profile).put(profile::upsert_profile),
        )
        .route("/api/activity/log", post(profile::log_activity))
        .route("/api/progress/:user_id", get(profile::progress))
        .with_state(state)
}

#[derive(Serialize)]
struct RootResponse {
    ok: bool,
    service: &'static str,
    uptime_seconds: u64,
}

async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(RootResponse {
        ok: true,
        service: "tutor-backend",
        uptime_seconds: state.uptime_seconds(),
    })
}
