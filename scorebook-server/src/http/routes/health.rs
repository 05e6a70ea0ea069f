//! Health check endpoint
//!
//! Reports the process as up and whether the store answers a round trip.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
}

/// GET /health - 503 when the store does not answer
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, store) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!("Health check: store unavailable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: if status.is_success() { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            store,
        }),
    )
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::db::{LoginOutcome, MemoryUserStore, StoreError, UserStore};
    use crate::models::{Score, UserRecord};

    struct DownStore;

    #[async_trait]
    impl UserStore for DownStore {
        async fn login(
            &self,
            _: Option<&str>,
            _: Option<&str>,
        ) -> Result<LoginOutcome, StoreError> {
            Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
        }

        async fn raise_high_score(
            &self,
            _: Option<&str>,
            _: Option<&Score>,
        ) -> Result<u64, StoreError> {
            Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
        }

        async fn find(&self, _: &str) -> Result<Option<UserRecord>, StoreError> {
            Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
        }
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let state = AppState::new(Arc::new(MemoryUserStore::new()));
        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.store, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn unreachable_store_is_503() {
        let state = AppState::new(Arc::new(DownStore));
        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.store, "unavailable");
    }
}
