use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{Responder, post, web};
use futures::StreamExt;
use sqlx::PgPool;
use uuid::Uuid;

use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use storage::Storage;

use crate::dtos::order::{UploadResponse, UploadedFile};
use crate::services::upload::{
    IncomingFile, parse_service_ids, record_order, sanitize_file_name, total_cost,
};

/// Credit-metered upload: buffers the multipart files, validates in the
/// contractual order (auth, file presence, service ids, credit sufficiency),
/// uploads to object storage, then books everything in one transaction.
///
/// # Input
/// Multipart form with repeated `files` parts and one `serviceIds` text part
/// holding a JSON array of service id strings.
///
/// # Output
/// - 200 with order id, stored file paths, selected services and total cost
/// - 400 no files / bad service ids / insufficient credits
/// - 404 caller has no account row
#[post("")]
async fn post_upload(
    claims: web::ReqData<JwtClaims>,
    payload: Multipart,
    pool: web::Data<Arc<PgPool>>,
    storage: web::Data<Storage>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let user = db::user::get_user_by_subject(pg_pool, &claims.sub).await?;

    let (files, raw_service_ids) = read_multipart(payload).await?;

    if files.is_empty() {
        return Err(AppError::BadRequest("No files uploaded".to_string()));
    }

    let service_ids = match raw_service_ids {
        Some(raw) => parse_service_ids(&raw)?,
        None => Vec::new(),
    };
    if service_ids.is_empty() {
        return Err(AppError::BadRequest("No service IDs provided".to_string()));
    }

    let services = db::service::get_services_by_ids(pg_pool, &service_ids).await?;
    if services.len() != service_ids.len() {
        return Err(AppError::BadRequest(
            "One or more service IDs are invalid".to_string(),
        ));
    }

    let cost = total_cost(&services, files.len());
    // Early rejection for the common case; the transaction's conditional
    // debit remains the authoritative guard under concurrency.
    if user.credits < cost {
        return Err(AppError::BadRequest(
            "Insufficient credits for this order".to_string(),
        ));
    }

    storage.ensure_user_prefixes(user.id).await?;

    let order_id = Uuid::new_v4();
    let mut stored: Vec<(String, String)> = Vec::with_capacity(files.len());
    for file in files {
        let key = storage::keys::file_key(user.id, order_id, &file.file_name);
        storage
            .put_file(&key, file.bytes, &file.content_type)
            .await?;
        stored.push((file.file_name, key));
    }

    record_order(pg_pool, user.id, order_id, &services, &stored, cost).await?;

    Success::ok(UploadResponse {
        message: "Files uploaded successfully".to_string(),
        order_id,
        files: stored
            .into_iter()
            .map(|(file_name, file_path)| UploadedFile {
                file_name,
                file_path,
            })
            .collect(),
        services: service_ids,
        total_cost: cost,
    })
}

/// Buffers every `files` part and the `serviceIds` text field. Multipart
/// parts arrive in client order, so the field may show up before or after the
/// files.
async fn read_multipart(mut payload: Multipart) -> Res<(Vec<IncomingFile>, Option<String>)> {
    let mut files = Vec::new();
    let mut raw_service_ids = None;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?;

        let file_name = field
            .content_disposition()
            .get_filename()
            .map(sanitize_file_name);
        let field_name = field.name().to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?;
            bytes.extend_from_slice(&chunk);
        }

        match file_name {
            Some(file_name) if !file_name.is_empty() => {
                let content_type = field
                    .content_type()
                    .map(|mime| mime.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                files.push(IncomingFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ if field_name == "serviceIds" => {
                raw_service_ids = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
            _ => {} // unknown text fields are ignored
        }
    }

    Ok((files, raw_service_ids))
}
