use std::sync::Arc;

use actix_web::{Responder, get, web};
use sqlx::PgPool;

use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;

use crate::dtos::billing::DateRangeQuery;
use crate::services::transactions::{group_by_order, parse_date_bound};

/// Billing history for the caller, optionally bounded by `startDate` and
/// `endDate`, grouped by order.
#[get("/fetchTransactions")]
async fn get_transactions(
    claims: web::ReqData<JwtClaims>,
    query: web::Query<DateRangeQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let user = db::user::get_user_by_subject(pg_pool, &claims.sub).await?;

    let start = query
        .start_date
        .as_deref()
        .map(|raw| parse_date_bound(raw, false))
        .transpose()?;
    let end = query
        .end_date
        .as_deref()
        .map(|raw| parse_date_bound(raw, true))
        .transpose()?;

    let lines = db::billing::list_billing_lines(pg_pool, user.id, start, end).await?;

    Success::ok(serde_json::json!({
        "message": "Billing records retrieved successfully",
        "billingRecords": group_by_order(lines),
    }))
}
