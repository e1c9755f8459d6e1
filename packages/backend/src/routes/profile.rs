use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::response::AppError;
use crate::state::AppState;
use crate::store::ProfileInput;

#[derive(Debug, Deserialize)]
pub(crate) struct LogActivityRequest {
    #[serde(default = "default_user")]
    user_id: String,
    #[serde(default = "default_context")]
    context: String,
    #[serde(default = "default_minutes")]
    minutes: u32,
    #[serde(default = "default_turns")]
    turns: u32,
}

fn default_user() -> String {
    "demo".to_string()
}

fn default_context() -> String {
    "Airport".to_string()
}

fn default_minutes() -> u32 {
    1
}

fn default_turns() -> u32 {
    1
}

#[derive(Serialize)]
struct OkResponse {
    ok: bool,
}

const MAX_ACTIVITY_MINUTES: u32 = 480;
const MAX_ACTIVITY_TURNS: u32 = 500;

pub async fn get_profile(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let profile = state.store().profile_for(&user_id, Utc::now());
    Json(profile).into_response()
}

pub async fn upsert_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<ProfileInput>,
) -> Response {
    if payload.daily_minutes_goal == 0 || payload.weekly_minutes_goal == 0 {
        return AppError::validation("minute goals must be at least 1").into_response();
    }

    let profile = state.store().upsert_profile(&user_id, &payload, Utc::now());
    Json(profile).into_response()
}

pub async fn log_activity(
    State(state): State<AppState>,
    Json(payload): Json<LogActivityRequest>,
) -> Response {
    if payload.minutes > MAX_ACTIVITY_MINUTES || payload.turns > MAX_ACTIVITY_TURNS {
        return AppError::validation("activity entry out of range").into_response();
    }

    state.store().log_activity(
        &payload.user_id,
        &payload.context,
        payload.minutes,
        payload.turns,
        Utc::now(),
    );
    Json(OkResponse { ok: true }).into_response()
}

pub async fn progress(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let progress = state.store().progress(&user_id, Utc::now());
    Json(progress).into_response()
}
