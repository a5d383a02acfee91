use std::sync::Arc;

use actix_web::{Responder, get, web};
use sqlx::PgPool;

use common::error::Res;
use common::http::Success;

#[get("/fetchPlans")]
async fn get_plans(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let plans = db::plan::list_plans(pg_pool).await?;

    Success::ok(serde_json::json!({
        "message": "Pricing plans retrieved successfully",
        "plans": plans,
    }))
}
