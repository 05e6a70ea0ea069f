//! Startup bootstrap: connect and create the schema, retrying forever
//!
//! The only retry loop in the system. Per-request failures are returned to
//! the caller, never retried.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use sqlx::MySqlPool;

use super::schema;

/// Fixed delay between bootstrap attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Run `op` until it succeeds, sleeping `delay` after each failure.
///
/// No backoff growth and no attempt limit. `op` receives the 1-based
/// attempt number.
pub async fn retry_forever<T, E, F, Fut>(delay: Duration, mut op: F) -> T
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return value,
            Err(e) => {
                tracing::error!(
                    attempt,
                    retry_in_secs = delay.as_secs(),
                    "Database bootstrap failed: {}",
                    e
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Acquire a connection and ensure the `users` table exists.
///
/// Does not return until the database is reachable.
pub async fn bootstrap(pool: &MySqlPool, delay: Duration) {
    retry_forever(delay, |attempt| async move {
        let mut conn = pool.acquire().await?;
        tracing::info!(attempt, "MySQL connected");

        let name_unique = schema::ensure_users_table(&mut conn).await?;
        if name_unique {
            tracing::info!("Users table is ready");
        } else {
            tracing::warn!(
                "users.name has no unique index; logins for the same name may create duplicate rows"
            );
        }
        Ok::<_, sqlx::Error>(())
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn retries_with_fixed_delay_until_success() {
        let calls = Arc::new(AtomicU64::new(0));
        let started = Instant::now();

        let value = retry_forever(DEFAULT_RETRY_DELAY, |attempt| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                if attempt < 4 {
                    Err(format!("attempt {attempt} refused"))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(value, 4);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        // Three failures, three fixed 5s waits, no growth
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(15), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(16), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn first_success_does_not_sleep() {
        let started = Instant::now();
        let value: &str = retry_forever(DEFAULT_RETRY_DELAY, |_| async {
            Ok::<_, String>("ready")
        })
        .await;

        assert_eq!(value, "ready");
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_retrying_without_limit() {
        let calls = Arc::new(AtomicU64::new(0));
        let counter = calls.clone();

        let never = retry_forever(Duration::from_secs(1), move |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>("down")
            }
        });

        let timed_out = tokio::time::timeout(Duration::from_secs(100), never).await;
        assert!(timed_out.is_err());
        assert!(calls.load(Ordering::SeqCst) >= 100);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn bootstrap_creates_table() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = MySqlPool::connect_lazy(&url).expect("invalid DATABASE_URL");

        bootstrap(&pool, Duration::from_secs(1)).await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .expect("users table missing");
        assert!(count >= 0);
    }
}
