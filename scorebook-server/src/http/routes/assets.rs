//! Static assets
//!
//! `GET /` is the entry page; any path the API does not claim resolves
//! against the asset directory.

use std::path::Path;

use axum::{routing::get_service, Router};
use tower_http::services::{ServeDir, ServeFile};

/// Entry page served at `/`
pub const INDEX_FILE: &str = "index.html";

/// Asset routes rooted at `public_dir`
pub fn router<S>(public_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get_service(ServeFile::new(public_dir.join(INDEX_FILE))))
        .fallback_service(ServeDir::new(public_dir))
}
