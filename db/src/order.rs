use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::order::{Order, OrderFile};

pub async fn insert_order<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_id: Uuid,
    user_id: Uuid,
) -> Res<Order> {
    sqlx::query_as::<_, Order>(
        "INSERT INTO orders (id, user_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(order_id)
    .bind(user_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_order_service<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_id: Uuid,
    service_id: Uuid,
) -> Res<()> {
    sqlx::query("INSERT INTO order_services (order_id, service_id) VALUES ($1, $2)")
        .bind(order_id)
        .bind(service_id)
        .execute(executor)
        .await
        .map_err(AppError::from)?;
    Ok(())
}

pub async fn insert_file<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_id: Uuid,
    file_name: &str,
    file_path: &str,
) -> Res<OrderFile> {
    sqlx::query_as::<_, OrderFile>(
        r#"
        INSERT INTO files (order_id, file_name, file_path)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(order_id)
    .bind(file_name)
    .bind(file_path)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_incoming<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    file_id: Uuid,
    order_id: Uuid,
) -> Res<()> {
    sqlx::query(
        "INSERT INTO incoming (file_id, order_id, processed) VALUES ($1, $2, FALSE)",
    )
    .bind(file_id)
    .bind(order_id)
    .execute(executor)
    .await
    .map_err(AppError::from)?;
    Ok(())
}

/// Fetches an order only when it belongs to `user_id`, so callers cannot poll
/// someone else's order.
pub async fn get_order_for_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_id: Uuid,
    user_id: Uuid,
) -> Res<Order> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 AND user_id = $2")
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            AppError::NotFound("Order not found or user not authorized".to_string())
        })
}
