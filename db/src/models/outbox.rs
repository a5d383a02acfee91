use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::types::JsonValue;
use uuid::Uuid;

/// A pending notification to the external AI processor, written in the same
/// transaction as the order it announces.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct OutboxEntry {
    pub id: Uuid,
    pub order_id: Uuid,
    pub payload: JsonValue,
    pub attempts: i32,
    pub last_attempt_at: Option<NaiveDateTime>,
    pub delivered_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}
