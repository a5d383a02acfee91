use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// An immutable ledger line for one (file, service) charge.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct BillingRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub order_id: Uuid,
    pub service_id: Uuid,
    pub credits_used: i32,
    pub created_at: NaiveDateTime,
}

/// A billing ledger line joined with its service name, as returned by the
/// transaction-history query.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct BillingLine {
    pub id: Uuid,
    pub order_id: Uuid,
    pub service_name: String,
    pub credits_used: i32,
    pub created_at: NaiveDateTime,
}
