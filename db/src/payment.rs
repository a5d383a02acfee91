use common::error::{AppError, Res};
use sqlx::error::DatabaseError;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::payment::Payment;

pub async fn exists_payment_number<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    payment_number: &str,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM payments WHERE payment_number = $1)",
    )
    .bind(payment_number)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_payment<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    payment_number: &str,
    credits_purchased: i32,
    amount_paid: f64,
) -> Res<Payment> {
    sqlx::query_as::<_, Payment>(
        r#"
        INSERT INTO payments (user_id, payment_number, credits_purchased, amount_paid)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(payment_number)
    .bind(credits_purchased)
    .bind(amount_paid)
    .fetch_one(executor)
    .await
    .map_err(map_insert_error)
}

/// Two concurrent submissions of the same payment number can both pass the
/// duplicate pre-check; the loser hits the unique constraint on
/// `payment_number` and must still surface as a client error, not a 500.
fn map_insert_error(error: sqlx::Error) -> AppError {
    match &error {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::BadRequest("Payment number already exists".to_string())
        }
        _ => AppError::from(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::ErrorKind;
    use std::error::Error as StdError;

    #[derive(Debug)]
    struct ConstraintViolation {
        unique: bool,
    }

    impl std::fmt::Display for ConstraintViolation {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "constraint violation")
        }
    }

    impl StdError for ConstraintViolation {}

    impl DatabaseError for ConstraintViolation {
        fn message(&self) -> &str {
            "constraint violation"
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::ForeignKeyViolation
            }
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }
    }

    fn db_error(unique: bool) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ConstraintViolation { unique }))
    }

    #[test]
    fn duplicate_payment_number_is_a_client_error() {
        let mapped = map_insert_error(db_error(true));
        assert!(matches!(mapped, AppError::BadRequest(_)));
        assert!(mapped.to_string().contains("Payment number already exists"));
    }

    #[test]
    fn other_database_errors_stay_internal() {
        let mapped = map_insert_error(db_error(false));
        assert!(matches!(mapped, AppError::Database(_)));
    }
}

