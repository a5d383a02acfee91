use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::types::JsonValue;
use uuid::Uuid;

/// A purchasable credit bundle.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PricingPlan {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub credits: i32,
    pub validity_days: i32,
    pub features: Option<JsonValue>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
