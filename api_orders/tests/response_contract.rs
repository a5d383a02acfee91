//! The SPA consumes these payloads verbatim, so the camelCase field names are
//! part of the API contract.

use serde_json::json;
use uuid::Uuid;

use api_orders::{DownloadableFile, OrderStatusResponse, UploadResponse, UploadedFile};

#[test]
fn upload_response_uses_client_field_names() {
    let order_id = Uuid::new_v4();
    let service_id = Uuid::new_v4();
    let response = UploadResponse {
        message: "Files uploaded successfully".to_string(),
        order_id,
        files: vec![UploadedFile {
            file_name: "photo.png".to_string(),
            file_path: format!("user/files/incoming/{}/photo.png", order_id),
        }],
        services: vec![service_id],
        total_cost: 75,
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["orderId"], json!(order_id));
    assert_eq!(value["totalCost"], json!(75));
    assert_eq!(value["files"][0]["fileName"], json!("photo.png"));
    assert!(value["files"][0]["filePath"]
        .as_str()
        .unwrap()
        .contains("/files/incoming/"));
}

#[test]
fn status_response_exposes_signed_urls_per_artifact() {
    let order_id = Uuid::new_v4();
    let response = OrderStatusResponse {
        order_id,
        status: "completed",
        files: vec![
            DownloadableFile {
                file_name: "result-1.png".to_string(),
                download_url: "https://bucket.example/signed-1".to_string(),
            },
            DownloadableFile {
                file_name: "result-2.png".to_string(),
                download_url: "https://bucket.example/signed-2".to_string(),
            },
        ],
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["status"], json!("completed"));
    assert_eq!(value["files"].as_array().unwrap().len(), 2);
    assert_eq!(value["files"][1]["downloadUrl"], json!("https://bucket.example/signed-2"));
}

#[test]
fn processing_status_carries_no_files() {
    let response = OrderStatusResponse {
        order_id: Uuid::new_v4(),
        status: "processing",
        files: vec![],
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["status"], json!("processing"));
    assert!(value["files"].as_array().unwrap().is_empty());
}
