use std::sync::Arc;

use actix_web::{Responder, post, web};
use sqlx::PgPool;

use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;

use crate::dtos::billing::{CreatePaymentRequest, PaymentSummary};

/// Records a completed external payment and credits the purchased amount.
/// The payment row and the balance increment commit in one transaction, and
/// the unique payment number makes retries idempotent at the ledger level.
#[post("/create")]
async fn post_create(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<CreatePaymentRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let req = req.into_inner();
    let pg_pool: &PgPool = &pool;

    if req.payment_number.is_empty() {
        return Err(AppError::BadRequest(
            "Missing or invalid required fields".to_string(),
        ));
    }
    if req.credits_purchased <= 0 || req.amount_paid < 0.0 {
        return Err(AppError::BadRequest(
            "Credits purchased must be positive and amount paid cannot be negative".to_string(),
        ));
    }

    let user = db::user::get_user_by_subject(pg_pool, &claims.sub).await?;

    if db::payment::exists_payment_number(pg_pool, &req.payment_number).await? {
        return Err(AppError::BadRequest(
            "Payment number already exists".to_string(),
        ));
    }

    let mut tx = pg_pool.begin().await.map_err(AppError::from)?;
    let payment = db::payment::insert_payment(
        &mut *tx,
        user.id,
        &req.payment_number,
        req.credits_purchased,
        req.amount_paid,
    )
    .await?;
    db::user::credit_purchase(&mut *tx, user.id, req.credits_purchased).await?;
    tx.commit().await.map_err(AppError::from)?;

    Success::created(serde_json::json!({
        "message": "Payment record created successfully",
        "payment": PaymentSummary {
            id: payment.id,
            payment_number: payment.payment_number,
            credits_purchased: payment.credits_purchased,
            amount_paid: payment.amount_paid,
            created_at: payment.created_at,
        },
    }))
}
