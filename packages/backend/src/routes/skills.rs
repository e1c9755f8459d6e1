use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use tutor_algo::Observation;

use crate::store::SkillRecord;
use crate::state::AppState;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateSkillsRequest {
    #[serde(default = "default_user")]
    user_id: String,
    updates: Vec<Observation>,
}

fn default_user() -> String {
    "demo".to_string()
}

/// Apply a batch of graded observations for one learner. Quality scores
/// outside [0, 5] are clamped by the engine, never rejected.
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSkillsRequest>,
) -> Response {
    // One clock reading for the whole batch keeps due/overdue judgments
    // consistent across its updates.
    let now = Utc::now();

    let records: Vec<SkillRecord> = payload
        .updates
        .iter()
        .map(|observation| {
            state.store().apply_observation(
                &payload.user_id,
                &observation.skill_id,
                observation.quality,
                now,
            )
        })
        .collect();

    tracing::debug!(
        user_id = %payload.user_id,
        updated = records.len(),
        "skill observations applied"
    );

    Json(SuccessResponse {
        success: true,
        data: records,
    })
    .into_response()
}

pub async fn list(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let records = state.store().list_records(&user_id);
    Json(records).into_response()
}
