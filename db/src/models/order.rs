use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// One upload batch tying together files, selected services, and billing.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct OrderFile {
    pub id: Uuid,
    pub order_id: Uuid,
    pub file_name: String,
    pub file_path: String,
    pub created_at: NaiveDateTime,
}
