use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use sqlx::types::JsonValue;
use uuid::Uuid;

use crate::models::outbox::OutboxEntry;

pub async fn enqueue<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_id: Uuid,
    payload: JsonValue,
) -> Res<()> {
    sqlx::query("INSERT INTO notification_outbox (order_id, payload) VALUES ($1, $2)")
        .bind(order_id)
        .bind(payload)
        .execute(executor)
        .await
        .map_err(AppError::from)?;
    Ok(())
}

/// Undelivered notifications that have not exhausted their retry budget,
/// oldest first.
pub async fn fetch_pending<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    max_attempts: i32,
    limit: i64,
) -> Res<Vec<OutboxEntry>> {
    sqlx::query_as::<_, OutboxEntry>(
        r#"
        SELECT * FROM notification_outbox
        WHERE delivered_at IS NULL AND attempts < $1
        ORDER BY created_at ASC
        LIMIT $2
        "#,
    )
    .bind(max_attempts)
    .bind(limit)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn mark_delivered<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
) -> Res<()> {
    sqlx::query("UPDATE notification_outbox SET delivered_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await
        .map_err(AppError::from)?;
    Ok(())
}

pub async fn record_attempt<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
) -> Res<()> {
    sqlx::query(
        "UPDATE notification_outbox SET attempts = attempts + 1, last_attempt_at = NOW() WHERE id = $1",
    )
        .bind(id)
        .execute(executor)
        .await
        .map_err(AppError::from)?;
    Ok(())
}
