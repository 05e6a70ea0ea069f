//! Score endpoint - conditional high score raise

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ScoreAck, ScoreUpdateRequest};

/// POST /update-score
///
/// Always `{"success": true}` unless the store fails; a lower score and an
/// unknown name look the same to the caller.
async fn update_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreUpdateRequest>, JsonRejection>,
) -> Result<Json<ScoreAck>, ApiError> {
    let Json(req) = payload?;
    let changed = state
        .store
        .raise_high_score(req.name.as_deref(), req.score.as_ref())
        .await?;

    tracing::debug!(name = ?req.name, score = ?req.score, changed, "Score submitted");

    Ok(Json(ScoreAck::ok()))
}

/// Score routes
pub fn router() -> Router<AppState> {
    Router::new().route("/update-score", post(update_score))
}
