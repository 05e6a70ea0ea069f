//! `users` table DDL

use sqlx::MySqlConnection;

/// Created on bootstrap if absent. `name` is the lookup key and is unique.
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    relation VARCHAR(50),
    visit_count INT DEFAULT 1,
    high_score INT DEFAULT 0,
    UNIQUE KEY uq_users_name (name)
)
"#;

const NAME_IS_UNIQUE: &str = r#"
SELECT COUNT(*)
FROM information_schema.STATISTICS
WHERE TABLE_SCHEMA = DATABASE()
  AND TABLE_NAME = 'users'
  AND COLUMN_NAME = 'name'
  AND NON_UNIQUE = 0
"#;

/// Create the `users` table if needed.
///
/// Returns whether `name` carries a unique index. A table created by an
/// older deployment may lack it; that is reported, not migrated.
pub async fn ensure_users_table(conn: &mut MySqlConnection) -> Result<bool, sqlx::Error> {
    sqlx::query(CREATE_USERS_TABLE).execute(&mut *conn).await?;

    let unique: i64 = sqlx::query_scalar(NAME_IS_UNIQUE)
        .fetch_one(&mut *conn)
        .await?;

    Ok(unique > 0)
}
