use actix_web::web;

pub mod routes {
    pub mod payment;
    pub mod plans;
    pub mod services;
    pub mod transactions;
}

pub mod services {
    pub mod transactions;
}

mod dtos {
    pub(crate) mod billing;
}

pub fn mount_payment() -> actix_web::Scope {
    web::scope("/payment").service(routes::payment::post_create)
}

pub fn mount_plans() -> actix_web::Scope {
    web::scope("/plans").service(routes::plans::get_plans)
}

pub fn mount_services() -> actix_web::Scope {
    web::scope("/services").service(routes::services::get_services)
}

pub fn mount_transactions() -> actix_web::Scope {
    web::scope("/transactions").service(routes::transactions::get_transactions)
}
