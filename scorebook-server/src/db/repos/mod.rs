//! MySQL-backed store implementations
//!
//! - Upserts via ON DUPLICATE KEY UPDATE (no check-then-insert)
//! - Read-back inside the same transaction as the write

pub mod users;

pub use users::MySqlUserStore;
