use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct UploadedFile {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(rename = "orderId")]
    pub order_id: Uuid,
    pub files: Vec<UploadedFile>,
    pub services: Vec<Uuid>,
    #[serde(rename = "totalCost")]
    pub total_cost: i32,
}

#[derive(Debug, Serialize)]
pub struct DownloadableFile {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

#[derive(Debug, Serialize)]
pub struct OrderStatusResponse {
    #[serde(rename = "orderId")]
    pub order_id: Uuid,
    pub status: &'static str,
    pub files: Vec<DownloadableFile>,
}
