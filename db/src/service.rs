use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::service::Service;

pub async fn list_services<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<Service>> {
    sqlx::query_as::<_, Service>("SELECT * FROM services ORDER BY cost ASC")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

/// Fetches the services matching `ids`. Unknown ids simply produce a shorter
/// result set; the caller compares lengths to detect them.
pub async fn get_services_by_ids<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    ids: &[Uuid],
) -> Res<Vec<Service>> {
    sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}
