//! User store trait - the login and score services
//!
//! Implemented by [`MySqlUserStore`](super::MySqlUserStore) for production
//! and [`MemoryUserStore`](super::MemoryUserStore) for tests and local runs.

use async_trait::async_trait;

use crate::models::{Score, UserRecord};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    /// A NOT NULL column was given no value
    #[error("Column '{column}' cannot be null")]
    NullColumn { column: &'static str },

    /// A string value exceeds the column's VARCHAR length
    #[error("Data too long for column '{column}' at row 1")]
    DataTooLong { column: &'static str },

    /// A number outside the range of an INT column
    #[error("Out of range value for column '{column}' at row 1")]
    OutOfRange { column: &'static str },

    /// Text that cannot be stored in a numeric column
    #[error("Incorrect integer value: '{value}' for column '{column}' at row 1")]
    IncorrectValue { column: &'static str, value: String },
}

/// Result of a login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Existing user: the row as it was before this visit was counted.
    /// New user: the freshly inserted row.
    pub record: UserRecord,
    pub created: bool,
}

/// Persistence operations behind the HTTP endpoints (testable)
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find-or-create by name and count the visit, atomically.
    ///
    /// A `None` name is passed through and rejected by the NOT NULL
    /// constraint. The stored relation of an existing user is never changed.
    async fn login(
        &self,
        name: Option<&str>,
        relation: Option<&str>,
    ) -> Result<LoginOutcome, StoreError>;

    /// Set `high_score = score` only where `high_score < score`.
    ///
    /// Returns the number of rows changed. A `None` on either side matches
    /// nothing, the same as SQL NULL comparison. Non-integer scores are
    /// converted by the store, not rejected up front.
    async fn raise_high_score(
        &self,
        name: Option<&str>,
        score: Option<&Score>,
    ) -> Result<u64, StoreError>;

    /// Look up a user without counting a visit.
    async fn find(&self, name: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Round trip to the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}
