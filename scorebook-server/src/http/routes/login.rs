//! Login endpoint - find-or-create by name and count the visit

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{LoginRequest, UserRecord};

/// POST /login
///
/// Responds with the full user row: the pre-visit snapshot for a returning
/// user, the new row for a first visit.
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserRecord>, ApiError> {
    let Json(req) = payload?;
    let outcome = state
        .store
        .login(req.name.as_deref(), req.relation.as_deref())
        .await?;

    tracing::info!(
        user_id = outcome.record.id,
        name = %outcome.record.name,
        created = outcome.created,
        "Login"
    );

    Ok(Json(outcome.record))
}

/// Login routes
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
