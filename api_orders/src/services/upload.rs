use common::error::{AppError, Res};
use db::models::service::Service;
use sqlx::PgPool;
use uuid::Uuid;

/// One uploaded multipart file, already buffered.
pub struct IncomingFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Parses the `serviceIds` form field: a JSON array of service id strings.
/// Whitespace around ids is tolerated; anything that is not a JSON string
/// array is a format error, anything that is not a UUID is an unknown id.
pub fn parse_service_ids(raw: &str) -> Res<Vec<Uuid>> {
    let values: Vec<String> = serde_json::from_str(raw).map_err(|_| {
        AppError::BadRequest(
            "Invalid serviceIds format: must be a JSON array of strings".to_string(),
        )
    })?;

    values
        .iter()
        .map(|id| {
            Uuid::parse_str(id.trim()).map_err(|_| {
                AppError::BadRequest("One or more service IDs are invalid".to_string())
            })
        })
        .collect()
}

/// Order cost: the sum of each selected service's per-file cost, charged once
/// per uploaded file.
pub fn total_cost(services: &[Service], file_count: usize) -> i32 {
    let per_file: i32 = services.iter().map(|service| service.cost).sum();
    per_file * file_count as i32
}

/// Strips anything that could break the object-key layout out of a client
/// supplied file name.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '.' || *c == '_' || *c == '-')
        .collect()
}

/// One pending ledger row: a service charged against one uploaded file.
pub struct ChargeLine<'a> {
    pub file_name: &'a str,
    pub service_id: Uuid,
    pub credits_used: i32,
}

/// Expands the (file, service) grid into the ledger rows an order books:
/// every uploaded file is charged once per selected service, so the plan
/// always holds `fileCount x serviceCount` lines.
pub fn charge_plan<'a>(
    files: &'a [(String, String)],
    services: &'a [Service],
) -> Vec<ChargeLine<'a>> {
    files
        .iter()
        .flat_map(|(file_name, _)| {
            services.iter().map(move |service| ChargeLine {
                file_name,
                service_id: service.id,
                credits_used: service.cost,
            })
        })
        .collect()
}

/// Creates all order bookkeeping in one database transaction: the order, its
/// service links, file + incoming rows, one billing record per charge-plan
/// line, the conditional credit debit, and the outbox row announcing the
/// order to the external processor.
///
/// The debit runs last with a `credits >= cost` guard; if a concurrent upload
/// drained the balance after the handler's pre-check, the whole transaction
/// rolls back and nothing is charged or recorded.
pub async fn record_order(
    pool: &PgPool,
    user_id: Uuid,
    order_id: Uuid,
    services: &[Service],
    files: &[(String, String)], // (file_name, file_path)
    cost: i32,
) -> Res<()> {
    let mut tx = pool.begin().await.map_err(AppError::from)?;

    db::order::insert_order(&mut *tx, order_id, user_id).await?;

    for service in services {
        db::order::insert_order_service(&mut *tx, order_id, service.id).await?;
    }

    for (file_name, file_path) in files {
        let file = db::order::insert_file(&mut *tx, order_id, file_name, file_path).await?;
        db::order::insert_incoming(&mut *tx, file.id, order_id).await?;
    }

    for line in charge_plan(files, services) {
        db::billing::insert_billing_record(
            &mut *tx,
            user_id,
            order_id,
            line.service_id,
            line.credits_used,
        )
        .await?;
    }

    if !db::user::debit_credits(&mut *tx, user_id, cost).await? {
        tx.rollback().await.map_err(AppError::from)?;
        return Err(AppError::BadRequest(
            "Insufficient credits for this order".to_string(),
        ));
    }

    let service_names: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();
    db::outbox::enqueue(
        &mut *tx,
        order_id,
        serde_json::json!({
            "services": service_names,
            "orderId": order_id,
            "order_path": storage::keys::incoming_prefix(user_id, order_id),
        }),
    )
    .await?;

    tx.commit().await.map_err(AppError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service(cost: i32) -> Service {
        let now = Utc::now().naive_utc();
        Service {
            id: Uuid::new_v4(),
            name: format!("service-{}", cost),
            cost,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn cost_is_service_sum_times_file_count() {
        // 100-credit user, services at 10 and 15, three files: the canonical
        // scenario works out to 75 credits.
        let services = vec![service(10), service(15)];
        assert_eq!(total_cost(&services, 3), 75);
        assert_eq!(100 - total_cost(&services, 3), 25);
    }

    #[test]
    fn charge_plan_books_one_row_per_file_service_pair() {
        let services = vec![service(10), service(15)];
        let files: Vec<(String, String)> = ["a.png", "b.png", "c.png"]
            .iter()
            .map(|name| (name.to_string(), format!("user/files/incoming/order/{}", name)))
            .collect();

        let plan = charge_plan(&files, &services);
        assert_eq!(plan.len(), 6);

        // each file carries one line per service, at that service's cost
        for (file_name, _) in &files {
            let lines: Vec<_> = plan
                .iter()
                .filter(|line| line.file_name == file_name.as_str())
                .collect();
            assert_eq!(lines.len(), services.len());
        }

        // the plan's total matches what the user is debited
        let planned: i32 = plan.iter().map(|line| line.credits_used).sum();
        assert_eq!(planned, total_cost(&services, files.len()));
    }

    #[test]
    fn charge_plan_is_empty_without_files() {
        let services = vec![service(10)];
        assert!(charge_plan(&[], &services).is_empty());
    }

    #[test]
    fn cost_of_zero_files_is_zero() {
        let services = vec![service(10)];
        assert_eq!(total_cost(&services, 0), 0);
    }

    #[test]
    fn service_ids_parse_with_whitespace() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let raw = format!(r#"[" {} ", "{}"]"#, a, b);
        assert_eq!(parse_service_ids(&raw).unwrap(), vec![a, b]);
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        let err = parse_service_ids("not json").unwrap_err();
        assert!(err.to_string().contains("Invalid serviceIds format"));
    }

    #[test]
    fn non_uuid_entry_is_an_invalid_id() {
        let err = parse_service_ids(r#"["not-a-uuid"]"#).unwrap_err();
        assert!(err.to_string().contains("service IDs are invalid"));
    }

    #[test]
    fn empty_array_parses_to_empty() {
        assert!(parse_service_ids("[]").unwrap().is_empty());
    }

    #[test]
    fn file_names_are_sanitized() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "....etcpasswd");
        assert_eq!(sanitize_file_name("photo (1).png"), "photo1.png");
        assert_eq!(sanitize_file_name("ok_name-2.jpeg"), "ok_name-2.jpeg");
    }
}
