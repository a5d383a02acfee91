use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub google_id: Option<String>,
    pub email: String,
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub phone_number: Option<String>,
    pub number_verified: bool,
    pub role: String,
    pub plan: String,
    pub credits: i32,
    pub total_credit_usage: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
