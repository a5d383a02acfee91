use std::sync::Arc;

use actix_web::{Responder, post, web};
use common::env_config::{Config, JwtConfig};
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::{self, ClaimsSpec};
use sqlx::PgPool;

use crate::dtos::auth::{CreateUserRequest, CreateUserResponse, ResetPasswordRequest};
use crate::services;

/// Registers a new account.
///
/// # Input
/// - JSON body: email, password, confirm_password (required); name,
///   phone_number, google_id (optional)
///
/// # Output
/// - 201 Created with the new account id
/// - 200 "Welcome Back!" when the email is already registered
/// - 400 on validation failures (missing fields, password mismatch, malformed
///   email or phone number)
#[post("/create")]
async fn post_create(
    req: web::Json<CreateUserRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let req = req.into_inner();
    let pg_pool: &PgPool = &pool;

    if req.email.is_empty() || req.password.is_empty() || req.confirm_password.is_empty() {
        return Err(AppError::BadRequest(
            "Email, password, and confirm_password are required".to_string(),
        ));
    }
    if req.password != req.confirm_password {
        return Err(AppError::BadRequest("Passwords do not match".to_string()));
    }
    if !services::user::validate_email(&req.email) {
        return Err(AppError::BadRequest("Invalid email format".to_string()));
    }
    if let Some(phone) = &req.phone_number {
        if !services::user::validate_phone_number(phone) {
            return Err(AppError::BadRequest(
                "Invalid phone number format".to_string(),
            ));
        }
    }

    if db::user::exists_user_by_email(pg_pool, &req.email).await? {
        return Success::ok(serde_json::json!({ "message": "Welcome Back!" }));
    }

    let password_hash = services::user::hash_password(&req.password)?;
    let user = db::user::insert_user(
        pg_pool,
        db::dtos::user::NewUser {
            email: req.email,
            name: req.name,
            password_hash,
            phone_number: req.phone_number,
            google_id: req.google_id,
        },
    )
    .await?;

    Success::created(CreateUserResponse {
        user_id: user.google_id.unwrap_or_else(|| user.id.to_string()),
        message: "User created successfully".to_string(),
    })
}

/// Issues a password-reset link for an account.
///
/// The response wording is identical whether or not the account exists, so
/// the endpoint cannot be used to probe for registered addresses. The link
/// itself is delivered out-of-band; here it is handed to the mail collaborator
/// via the log.
#[post("/reset-password")]
async fn post_reset_password(
    req: web::Json<ResetPasswordRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let email = req.into_inner().email;
    let pg_pool: &PgPool = &pool;

    if email.is_empty() {
        return Err(AppError::BadRequest(
            "Email is required in the request body".to_string(),
        ));
    }
    if !services::user::validate_email(&email) {
        return Err(AppError::BadRequest("Invalid email format".to_string()));
    }

    if db::user::exists_user_by_email(pg_pool, &email).await? {
        let reset_link = build_reset_link(&email, &config.client_url, &config.jwt_config)?;
        // The SMTP relay picks reset links up from here; no inline mailer.
        log::info!("Password reset link generated for {}: {}", email, reset_link);
    }

    Success::ok(serde_json::json!({
        "message": "If an account exists for this address, a reset link has been sent"
    }))
}

/// Short-lived token embedded in the reset link; one hour regardless of the
/// session expiry configured for login tokens.
fn build_reset_link(email: &str, client_url: &str, jwt_config: &JwtConfig) -> Res<String> {
    let reset_config = JwtConfig {
        secret: jwt_config.secret.clone(),
        expiration_hours: 1,
    };
    let token = jwt::generate_jwt(
        ClaimsSpec {
            sub: format!("reset:{}", email),
            email: email.to_string(),
            role: None,
        },
        &reset_config,
    )?;
    Ok(format!("{}/reset-password?token={}", client_url, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_link_points_at_client() {
        let config = JwtConfig {
            secret: "s".to_string(),
            expiration_hours: 24,
        };
        let link =
            build_reset_link("user@example.com", "https://app.example.com", &config).unwrap();
        assert!(link.starts_with("https://app.example.com/reset-password?token="));
    }
}
