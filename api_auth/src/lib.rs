use actix_web::web;
use middleware::auth::AuthMiddleware;

pub mod middleware {
    pub mod auth;
}

pub mod routes {
    pub mod auth;
    pub mod user;
}

mod services {
    pub(crate) mod user;
}

mod dtos {
    pub(crate) mod auth;
}

/// Guard for the protected scope: rejects requests whose bearer token the
/// extractor could not validate.
pub fn auth_middleware() -> AuthMiddleware {
    AuthMiddleware::new()
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_create)
        .service(routes::auth::post_reset_password)
}

pub fn mount_users() -> actix_web::Scope {
    web::scope("/users")
        .service(routes::user::get_profile)
        .service(routes::user::patch_profile)
}
