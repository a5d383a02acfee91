use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub payment_number: String,
    pub credits_purchased: i32,
    pub amount_paid: f64,
    pub created_at: NaiveDateTime,
}
