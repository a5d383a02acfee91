use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::models::plan::PricingPlan;

pub async fn list_plans<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<PricingPlan>> {
    sqlx::query_as::<_, PricingPlan>("SELECT * FROM pricing_plans ORDER BY price ASC")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}
