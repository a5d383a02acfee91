use std::sync::Arc;

use actix_web::{Responder, get, patch, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;

use crate::dtos::auth::{ProfileResponse, UpdateProfileRequest};

/// Returns the authenticated user's profile, including the credit balance and
/// lifetime usage the dashboard renders.
#[get("/profile")]
async fn get_profile(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let user = db::user::get_user_by_subject(pg_pool, &claims.sub).await?;

    Success::ok(ProfileResponse {
        id: user.google_id.unwrap_or_else(|| user.id.to_string()),
        email: user.email,
        phone_number: user.phone_number.unwrap_or_default(),
        join_date: user.created_at.and_utc().to_rfc3339(),
        name: user.name.unwrap_or_default(),
        credits: user.credits,
        number_verified: user.number_verified,
        usage: user.total_credit_usage,
        role: user.role,
        plan: user.plan,
    })
}

/// Updates name and/or phone number; at least one must be provided.
#[patch("/profile")]
async fn patch_profile(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<UpdateProfileRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let req = req.into_inner();
    let pg_pool: &PgPool = &pool;

    if req.name.is_none() && req.phone_number.is_none() {
        return Err(AppError::BadRequest(
            "At least one field (name or phoneNumber) must be provided".to_string(),
        ));
    }

    let user = db::user::get_user_by_subject(pg_pool, &claims.sub).await?;
    let updated = db::user::update_profile(
        pg_pool,
        user.id,
        db::dtos::user::ProfileUpdate {
            name: req.name,
            phone_number: req.phone_number,
        },
    )
    .await?;

    Success::ok(serde_json::json!({
        "id": updated.id,
        "email": updated.email,
        "name": updated.name.unwrap_or_default(),
        "phoneNumber": updated.phone_number.unwrap_or_default(),
    }))
}
