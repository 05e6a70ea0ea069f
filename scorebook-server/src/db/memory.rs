//! In-memory user store
//!
//! Follows the MySQL store for the cases callers can observe: the NOT NULL
//! name column, NULL comparisons that never match, VARCHAR lengths, the INT
//! range of `high_score`, and case-insensitive name matching. Other collation
//! rules (accent folding, trailing-space padding) and MySQL's partial parsing
//! of text like `"60abc"` are not reproduced. Used by tests and `--in-memory`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::store::{LoginOutcome, StoreError, UserStore};
use crate::models::{Score, UserRecord};

/// `VARCHAR(255)`
const NAME_MAX_CHARS: usize = 255;
/// `VARCHAR(50)`
const RELATION_MAX_CHARS: usize = 50;

/// Lookup key: names compare case-insensitively, as under a `_ci` collation
fn name_key(name: &str) -> String {
    name.to_lowercase()
}

fn check_length(column: &'static str, value: &str, max: usize) -> Result<(), StoreError> {
    if value.chars().count() > max {
        return Err(StoreError::DataTooLong { column });
    }
    Ok(())
}

/// Convert a score for the `high_score INT` column
fn high_score_value(score: &Score) -> Result<i64, StoreError> {
    let value = score.to_column_value().ok_or_else(|| StoreError::IncorrectValue {
        column: "high_score",
        value: match score {
            Score::Text(s) => s.clone(),
            other => other.as_f64().to_string(),
        },
    })?;

    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(StoreError::OutOfRange { column: "high_score" });
    }
    Ok(value as i64)
}

#[derive(Debug, Default)]
struct Users {
    last_id: i64,
    by_name: HashMap<String, UserRecord>,
}

/// User store held in process memory
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Users>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.lock().await.by_name.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn login(
        &self,
        name: Option<&str>,
        relation: Option<&str>,
    ) -> Result<LoginOutcome, StoreError> {
        let name = name.ok_or(StoreError::NullColumn { column: "name" })?;
        check_length("name", name, NAME_MAX_CHARS)?;
        if let Some(relation) = relation {
            check_length("relation", relation, RELATION_MAX_CHARS)?;
        }

        let key = name_key(name);
        let mut users = self.users.lock().await;

        if let Some(existing) = users.by_name.get_mut(&key) {
            let before = existing.clone();
            existing.visit_count += 1;
            return Ok(LoginOutcome {
                record: before,
                created: false,
            });
        }

        users.last_id += 1;
        let record = UserRecord {
            id: users.last_id,
            name: name.to_owned(),
            relation: relation.map(str::to_owned),
            visit_count: 1,
            high_score: 0,
        };
        users.by_name.insert(key, record.clone());

        Ok(LoginOutcome {
            record,
            created: true,
        })
    }

    async fn raise_high_score(
        &self,
        name: Option<&str>,
        score: Option<&Score>,
    ) -> Result<u64, StoreError> {
        let (Some(name), Some(score)) = (name, score) else {
            return Ok(0);
        };

        let mut users = self.users.lock().await;
        match users.by_name.get_mut(&name_key(name)) {
            // Compared as a double; the conversion only happens on a match
            Some(user) if (user.high_score as f64) < score.as_f64() => {
                user.high_score = high_score_value(score)?;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn find(&self, name: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.lock().await.by_name.get(&name_key(name)).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
