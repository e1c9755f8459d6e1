use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use tutor_algo::compose_plan;

use crate::response::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct PracticeNextRequest {
    #[serde(default = "default_user")]
    user_id: String,
    #[serde(default = "default_context")]
    context: String,
    #[serde(default = "default_level")]
    level: String,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_user() -> String {
    "demo".to_string()
}

fn default_context() -> String {
    "Airport".to_string()
}

fn default_level() -> String {
    "Beginner".to_string()
}

fn default_limit() -> usize {
    6
}

pub async fn next(
    State(state): State<AppState>,
    Json(payload): Json<PracticeNextRequest>,
) -> Response {
    // One clock reading per planning request.
    let now = Utc::now();
    let skills = state.store().skills_for(&payload.user_id);

    match compose_plan(&skills, payload.limit, &payload.context, now) {
        Ok(plan) => {
            tracing::debug!(
                user_id = %payload.user_id,
                context = %payload.context,
                level = %payload.level,
                due = plan.due.len(),
                weak = plan.weak.len(),
                "practice plan composed"
            );
            Json(plan).into_response()
        }
        Err(err) => AppError::validation(err.to_string()).into_response(),
    }
}
