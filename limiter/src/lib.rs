use middleware::global::GlobalThrottle;

pub mod middleware {
    pub mod global;
}

pub fn global_middleware(permits_per_sec: u32) -> GlobalThrottle {
    GlobalThrottle::new(permits_per_sec)
}
