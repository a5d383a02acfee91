use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use db::models::billing::BillingLine;
use uuid::Uuid;

use crate::dtos::billing::TransactionEntry;

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates; bare end dates
/// are inclusive of the whole day.
pub fn parse_date_bound(raw: &str, end_of_day: bool) -> Res<NaiveDateTime> {
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.naive_utc());
    }

    let date = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date: {}", raw)))?;

    let time = if end_of_day {
        chrono::NaiveTime::from_hms_opt(23, 59, 59).unwrap()
    } else {
        chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap()
    };
    Ok(date.and_time(time))
}

/// Groups ledger lines by order id, preserving the charge order inside each
/// group (the query returns lines sorted by creation time).
pub fn group_by_order(lines: Vec<BillingLine>) -> BTreeMap<Uuid, Vec<TransactionEntry>> {
    let mut grouped: BTreeMap<Uuid, Vec<TransactionEntry>> = BTreeMap::new();
    for line in lines {
        grouped.entry(line.order_id).or_default().push(TransactionEntry {
            id: line.id,
            service_name: line.service_name,
            credits_used: line.credits_used,
            created_at: line.created_at,
        });
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn line(order_id: Uuid, service_name: &str, credits: i32) -> BillingLine {
        BillingLine {
            id: Uuid::new_v4(),
            order_id,
            service_name: service_name.to_string(),
            credits_used: credits,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn groups_by_order_and_keeps_line_order() {
        let order_a = Uuid::new_v4();
        let order_b = Uuid::new_v4();
        let lines = vec![
            line(order_a, "Background Removal", 10),
            line(order_b, "Image Upscaling", 15),
            line(order_a, "Image Upscaling", 15),
        ];

        let grouped = group_by_order(lines);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&order_a].len(), 2);
        assert_eq!(grouped[&order_a][0].service_name, "Background Removal");
        assert_eq!(grouped[&order_a][1].service_name, "Image Upscaling");
        assert_eq!(grouped[&order_b].len(), 1);
    }

    #[test]
    fn rfc3339_and_bare_dates_both_parse() {
        assert!(parse_date_bound("2026-08-30T10:00:00Z", false).is_ok());

        let start = parse_date_bound("2026-08-30", false).unwrap();
        let end = parse_date_bound("2026-08-30", true).unwrap();
        assert!(start < end);
        assert_eq!(start.format("%H:%M:%S").to_string(), "00:00:00");
        assert_eq!(end.format("%H:%M:%S").to_string(), "23:59:59");
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert!(parse_date_bound("yesterday", false).is_err());
    }
}
