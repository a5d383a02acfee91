use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A priced image-processing capability. Reference data, seeded by migration.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub cost: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
