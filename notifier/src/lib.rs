//! Outbox delivery worker for the external AI processor.
//!
//! The upload transaction writes one `notification_outbox` row per order;
//! this worker delivers them over HTTP with retry, so a slow or briefly
//! unreachable processor never stalls an upload request or loses a paid
//! order announcement.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use common::env_config::AiServerConfig;
use common::error::Res;

/// Rows that failed this many times stop being retried and stay in the table
/// for operator inspection.
pub const MAX_ATTEMPTS: i32 = 10;

const BATCH_SIZE: i64 = 16;

/// Delay before a row becomes eligible again after a failed attempt,
/// doubling per attempt and capped at five minutes.
pub fn backoff_delay(attempts: i32) -> Duration {
    let capped = attempts.clamp(0, 9) as u32;
    Duration::from_secs((1u64 << capped).min(300))
}

/// Runs forever; spawned once from the server binary.
pub async fn run(pool: Arc<PgPool>, config: AiServerConfig) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .expect("Failed to build notifier HTTP client");

    let mut tick = tokio::time::interval(Duration::from_secs(config.outbox_poll_secs));
    loop {
        tick.tick().await;
        if let Err(error) = deliver_batch(&pool, &client, &config.url).await {
            log::error!("Outbox scan failed: {}", error);
        }
    }
}

async fn deliver_batch(pool: &PgPool, client: &reqwest::Client, url: &str) -> Res<()> {
    let pending = db::outbox::fetch_pending(pool, MAX_ATTEMPTS, BATCH_SIZE).await?;

    let now = chrono::Utc::now().naive_utc();
    for entry in pending {
        // A failed row waits out its backoff before the next try.
        if let Some(last_attempt) = entry.last_attempt_at {
            let elapsed = (now - last_attempt).num_seconds().max(0) as u64;
            if elapsed < backoff_delay(entry.attempts).as_secs() {
                continue;
            }
        }

        match client.post(url).json(&entry.payload).send().await {
            Ok(response) if response.status().is_success() => {
                db::outbox::mark_delivered(pool, entry.id).await?;
                log::info!("Order notification delivered for order {}", entry.order_id);
            }
            Ok(response) => {
                db::outbox::record_attempt(pool, entry.id).await?;
                log::warn!(
                    "AI server rejected notification for order {} with status {}",
                    entry.order_id,
                    response.status()
                );
            }
            Err(error) => {
                db::outbox::record_attempt(pool, entry.id).await?;
                log::warn!(
                    "Failed to notify AI server for order {}: {}",
                    entry.order_id,
                    error
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_and_caps() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(1), Duration::from_secs(2));
        assert_eq!(backoff_delay(4), Duration::from_secs(16));
        assert_eq!(backoff_delay(9), Duration::from_secs(300));
        assert_eq!(backoff_delay(100), Duration::from_secs(300));
    }

    #[test]
    fn retry_budget_is_finite() {
        assert!(MAX_ATTEMPTS > 0);
        assert!(backoff_delay(MAX_ATTEMPTS) <= Duration::from_secs(300));
    }
}
