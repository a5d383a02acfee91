use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::user::{NewUser, ProfileUpdate},
    models::user::User,
};

pub async fn exists_user_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_user_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<User> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_user_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<User> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Looks up a user by the identity provider's subject id.
/// Returns `NotFound` when no account is linked to that subject.
pub async fn get_user_by_subject<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    subject: &str,
) -> Res<User> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE google_id = $1")
        .bind(subject)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("User not found in the database".to_string()))
}

pub async fn insert_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: NewUser,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, password_hash, phone_number, google_id, role, plan)
        VALUES ($1, $2, $3, $4, $5, 'User', 'Free')
        RETURNING *
        "#,
    )
    .bind(&data.email)
    .bind(&data.name)
    .bind(&data.password_hash)
    .bind(&data.phone_number)
    .bind(&data.google_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_profile<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    update: ProfileUpdate,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = COALESCE($2, name),
            phone_number = COALESCE($3, phone_number),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&update.name)
    .bind(&update.phone_number)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Atomically debits `cost` credits and books the same amount as usage.
/// The `credits >= cost` guard makes the read-modify-write race-free: when two
/// uploads compete for the same balance, at most one can win.
/// Returns `false` when the balance was insufficient (zero rows updated).
pub async fn debit_credits<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    cost: i32,
) -> Res<bool> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET credits = credits - $2,
            total_credit_usage = total_credit_usage + $2,
            updated_at = NOW()
        WHERE id = $1 AND credits >= $2
        "#,
    )
    .bind(user_id)
    .bind(cost)
    .execute(executor)
    .await
    .map_err(AppError::from)?;

    Ok(result.rows_affected() == 1)
}

pub async fn credit_purchase<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    credits: i32,
) -> Res<()> {
    sqlx::query(
        "UPDATE users SET credits = credits + $2, updated_at = NOW() WHERE id = $1",
    )
    .bind(user_id)
    .bind(credits)
    .execute(executor)
    .await
    .map_err(AppError::from)?;
    Ok(())
}
