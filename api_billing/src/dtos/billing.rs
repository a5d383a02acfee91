use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    #[serde(rename = "paymentNumber")]
    pub payment_number: String,
    #[serde(rename = "creditsPurchased")]
    pub credits_purchased: i32,
    #[serde(rename = "amountPaid")]
    pub amount_paid: f64,
}

#[derive(Debug, Serialize)]
pub struct PaymentSummary {
    pub id: Uuid,
    #[serde(rename = "paymentNumber")]
    pub payment_number: String,
    #[serde(rename = "creditsPurchased")]
    pub credits_purchased: i32,
    #[serde(rename = "amountPaid")]
    pub amount_paid: f64,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

/// One charge line inside a grouped order history entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionEntry {
    pub id: Uuid,
    #[serde(rename = "serviceName")]
    pub service_name: String,
    #[serde(rename = "creditsUsed")]
    pub credits_used: i32,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}
