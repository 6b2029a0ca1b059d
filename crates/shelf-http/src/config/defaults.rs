//! Default configuration values

pub struct HttpDefaults;

impl HttpDefaults {
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    pub const MAX_REQUEST_SIZE: usize = 64 * 1024; // 64KB, far above any form post
    pub const ENABLE_TRACING: bool = true;
    pub const HEALTH_CHECK_PATH: &'static str = "/health";
    pub const SESSION_COOKIE_NAME: &'static str = "shelf_session";
    pub const SESSION_IDLE_TIMEOUT_SECS: u64 = 24 * 60;
    pub const MAX_SESSIONS: usize = 10_000;
    /// Paths served by built-in routes, unavailable for the health check
    pub const RESERVED_PATHS: [&'static str; 2] = ["/", "/api/resources"];
}
