//! Database layer - connection pool, bootstrap and user stores
//!
//! # Design Principles
//!
//! - Pool is owned by the store, handed to handlers through `AppState`
//! - Rely on the UNIQUE(name) constraint for upserts - no check-then-insert
//! - Conditional writes in a single statement (`... AND high_score < ?`)
//! - Retry only at bootstrap, never per request

pub mod bootstrap;
pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use bootstrap::{bootstrap, retry_forever, DEFAULT_RETRY_DELAY};
pub use memory::MemoryUserStore;
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::MySqlUserStore;
pub use store::{LoginOutcome, StoreError, UserStore};
