use actix_web::web;

pub mod routes {
    pub mod status;
    pub mod upload;
}

pub mod services {
    pub mod status;
    pub mod upload;
}

mod dtos {
    pub(crate) mod order;
}

pub use dtos::order::{DownloadableFile, OrderStatusResponse, UploadResponse, UploadedFile};

pub fn mount_upload() -> actix_web::Scope {
    web::scope("/fileUpload").service(routes::upload::post_upload)
}

pub fn mount_status() -> actix_web::Scope {
    web::scope("/checkOrderStatus").service(routes::status::get_order_status)
}
