#[derive(Clone)]
pub struct AppConfig {
    pub order_base_url: String,
    pub checkout_base_url: String,
    pub payment_base_url: String,
    pub poll_interval_ms: u64,
    pub error_backoff_ms: u64,
    pub max_error_backoff_ms: u64,
    pub source_cooldown_ms: u64,
    pub request_timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            order_base_url: std::env::var("ORDER_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            checkout_base_url: std::env::var("CHECKOUT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
            payment_base_url: std::env::var("PAYMENT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8083".to_string()),
            poll_interval_ms: env_u64("POLL_INTERVAL_MS", 4_000),
            error_backoff_ms: env_u64("ERROR_BACKOFF_MS", 15_000),
            max_error_backoff_ms: env_u64("MAX_ERROR_BACKOFF_MS", 60_000),
            source_cooldown_ms: env_u64("SOURCE_COOLDOWN_MS", 30_000),
            request_timeout_ms: env_u64("REQUEST_TIMEOUT_MS", 2_500),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}
