pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_HTML: &str = "text/html; charset=utf-8";

pub const DEFAULT_HTTP_RESPONSE_CODE: u16 = 503;
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const X_REAL_IP: &str = "X-Real-Ip";
pub const X_FORWARDED_FOR: &str = "X-Forwarded-For";
pub const X_FORWARDED_URI: &str = "X-Forwarded-Uri";
