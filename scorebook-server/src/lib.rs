//! scorebook-server: visitor login and high score persistence over HTTP
//!
//! Two JSON endpoints backed by a single `users` table:
//! - `POST /login` records a visit, creating the user on first sight
//! - `POST /update-score` raises a stored high score, never lowers it
//!
//! Everything else is served from a static asset directory.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseSettings};
pub use db::{LoginOutcome, MemoryUserStore, MySqlUserStore, StoreError, UserStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::{Score, UserRecord};
