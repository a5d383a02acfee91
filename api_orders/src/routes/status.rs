use std::sync::Arc;

use actix_web::{Responder, get, web};
use sqlx::PgPool;
use uuid::Uuid;

use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;
use storage::Storage;

use crate::dtos::order::{DownloadableFile, OrderStatusResponse};
use crate::services::status::status_of;

/// Polling endpoint: reports `processing` until the external processor has
/// written artifacts under the order's outgoing prefix, then `completed`
/// with one signed download URL per artifact. Stateless read-through over
/// the object-storage listing.
#[get("/{orderId}")]
async fn get_order_status(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
    storage: web::Data<Storage>,
) -> Res<impl Responder> {
    let order_id = path.into_inner();
    let pg_pool: &PgPool = &pool;

    let user = db::user::get_user_by_subject(pg_pool, &claims.sub).await?;
    let order = db::order::get_order_for_user(pg_pool, order_id, user.id).await?;

    let outgoing = storage
        .list_keys(&storage::keys::outgoing_prefix(user.id, order.id))
        .await?;

    let status = status_of(&outgoing);
    let mut files = Vec::with_capacity(outgoing.len());
    for key in &outgoing {
        files.push(DownloadableFile {
            file_name: storage::keys::file_name_of(key).to_string(),
            download_url: storage.presign_get(key).await?,
        });
    }

    Success::ok(OrderStatusResponse {
        order_id,
        status,
        files,
    })
}
