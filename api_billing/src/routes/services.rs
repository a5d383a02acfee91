use std::sync::Arc;

use actix_web::{Responder, get, web};
use sqlx::PgPool;

use common::error::Res;
use common::http::Success;

#[get("/fetchServices")]
async fn get_services(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let services = db::service::list_services(pg_pool).await?;

    Success::ok(serde_json::json!({
        "message": "Services retrieved successfully",
        "services": services,
    }))
}
