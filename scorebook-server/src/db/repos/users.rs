//! User repository
//!
//! - login: INSERT ... ON DUPLICATE KEY UPDATE, then read back under the
//!   row lock the write took
//! - raise_high_score: one conditional UPDATE

use async_trait::async_trait;
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool};

use crate::db::store::{LoginOutcome, StoreError, UserStore};
use crate::models::{Score, UserRecord};

/// MySQL affected-row count for an ON DUPLICATE KEY UPDATE that inserted
const ROWS_AFFECTED_INSERTED: u64 = 1;

const UPSERT_VISIT: &str = r#"
INSERT INTO users (name, relation) VALUES (?, ?)
ON DUPLICATE KEY UPDATE visit_count = visit_count + 1
"#;

const SELECT_BY_NAME: &str = r#"
SELECT id, name, relation, visit_count, high_score
FROM users
WHERE name = ?
ORDER BY id DESC
LIMIT 1
"#;

const RAISE_HIGH_SCORE: &str = r#"
UPDATE users SET high_score = ?
WHERE name = ? AND high_score < ?
"#;

/// User store over a MySQL pool
#[derive(Clone)]
pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn login(
        &self,
        name: Option<&str>,
        relation: Option<&str>,
    ) -> Result<LoginOutcome, StoreError> {
        let mut tx = self.pool.begin().await?;

        let upsert = sqlx::query(UPSERT_VISIT)
            .bind(name)
            .bind(relation)
            .execute(&mut *tx)
            .await?;

        let record: UserRecord = sqlx::query_as(SELECT_BY_NAME)
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(login_outcome(record, upsert.rows_affected()))
    }

    async fn raise_high_score(
        &self,
        name: Option<&str>,
        score: Option<&Score>,
    ) -> Result<u64, StoreError> {
        let query = bind_score(sqlx::query(RAISE_HIGH_SCORE), score);
        let query = bind_score(query.bind(name), score);
        let result = query.execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn find(&self, name: &str) -> Result<Option<UserRecord>, StoreError> {
        let record = sqlx::query_as(SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Build the login result from the upsert's affected-row count and the row
/// read back in the same transaction.
///
/// An update (count 2) leaves the row lock held until commit, so the read-back
/// shows exactly this visit's increment; subtracting it gives the row as it
/// was before.
fn login_outcome(mut record: UserRecord, rows_affected: u64) -> LoginOutcome {
    let created = rows_affected == ROWS_AFFECTED_INSERTED;
    if !created {
        record.visit_count -= 1;
    }
    LoginOutcome { record, created }
}

/// Bind a score in the type it arrived as; MySQL does the conversion.
fn bind_score<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    score: Option<&'q Score>,
) -> Query<'q, MySql, MySqlArguments> {
    match score {
        Some(Score::Int(v)) => query.bind(*v),
        Some(Score::Float(v)) => query.bind(*v),
        Some(Score::Text(v)) => query.bind(v.as_str()),
        None => query.bind(None::<i64>),
    }
}
