use actix_web::{HttpMessage, HttpResponse, dev::ServiceRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    env_config::JwtConfig,
    error::{AppError, Res},
};

/// Claims carried by the bearer token of the external identity bridge.
/// `sub` is the identity provider's subject id, stored on the user row
/// as `google_id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JwtClaims {
    pub sub: String,
    pub email: String,
    pub role: Option<String>,
    pub exp: usize,
}

pub struct ClaimsSpec {
    pub sub: String,
    pub email: String,
    pub role: Option<String>,
}

/// Generates JWT token based on the identity spec and JWT configuration options
pub fn generate_jwt(spec: ClaimsSpec, config: &JwtConfig) -> Res<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(config.expiration_hours))
        .expect("valid timestamp")
        .timestamp();

    let claims = JwtClaims {
        sub: spec.sub,
        email: spec.email,
        role: spec.role,
        exp: expiration as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(AppError::from)
}

/// Extracts claims object from JWT token.
/// Requires JWT secret.
pub fn validate_jwt(token: &str, secret: &str) -> Res<JwtClaims> {
    let token_data = jsonwebtoken::decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

pub fn get_jwt_claims_or_error(req: &ServiceRequest) -> Result<JwtClaims, HttpResponse> {
    if let Some(jwt_claims_res) = req.extensions().get::<Res<JwtClaims>>() {
        match jwt_claims_res {
            Ok(claims) => Ok(claims.clone()),
            Err(app_error) => Err(app_error.to_http_response()),
        }
    } else {
        Err(
            AppError::Unauthorized("No authorization token provided".to_string())
                .to_http_response(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret".to_string(),
            expiration_hours: 1,
        }
    }

    #[test]
    fn generate_and_validate_round_trip() {
        let config = test_config();
        let token = generate_jwt(
            ClaimsSpec {
                sub: "firebase-uid-123".to_string(),
                email: "user@example.com".to_string(),
                role: Some("User".to_string()),
            },
            &config,
        )
        .unwrap();

        let claims = validate_jwt(&token, &config.secret).unwrap();
        assert_eq!(claims.sub, "firebase-uid-123");
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.role.as_deref(), Some("User"));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_config();
        let token = generate_jwt(
            ClaimsSpec {
                sub: "abc".to_string(),
                email: "a@b.c".to_string(),
                role: None,
            },
            &config,
        )
        .unwrap();

        assert!(validate_jwt(&token, "another-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = JwtConfig {
            secret: "unit-test-secret".to_string(),
            expiration_hours: -1,
        };
        let token = generate_jwt(
            ClaimsSpec {
                sub: "abc".to_string(),
                email: "a@b.c".to_string(),
                role: None,
            },
            &config,
        )
        .unwrap();

        assert!(validate_jwt(&token, &config.secret).is_err());
    }
}
