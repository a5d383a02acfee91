use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::billing::BillingLine;

pub async fn insert_billing_record<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    order_id: Uuid,
    service_id: Uuid,
    credits_used: i32,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO billing_records (user_id, order_id, service_id, credits_used)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user_id)
    .bind(order_id)
    .bind(service_id)
    .bind(credits_used)
    .execute(executor)
    .await
    .map_err(AppError::from)?;
    Ok(())
}

/// Billing ledger lines for one user, newest last so groups come out in
/// charge order, optionally bounded by a date range.
pub async fn list_billing_lines<'e, E>(
    executor: E,
    user_id: Uuid,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Res<Vec<BillingLine>>
where
    E: Executor<'e, Database = Postgres>,
{
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
        "SELECT b.id, b.order_id, s.name AS service_name, b.credits_used, b.created_at \
         FROM billing_records b \
         JOIN services s ON s.id = b.service_id \
         WHERE b.user_id = ",
    );
    qb.push_bind(user_id);

    if let Some(start) = start {
        qb.push(" AND b.created_at >= ").push_bind(start);
    }
    if let Some(end) = end {
        qb.push(" AND b.created_at <= ").push_bind(end);
    }

    qb.push(" ORDER BY b.created_at ASC");

    qb.build_query_as::<BillingLine>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}
