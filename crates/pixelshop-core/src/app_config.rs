/// Application configuration for the catalog browser.
///
/// Everything has a default: the binary comes up against the public demo
/// catalog with no environment at all. No field is secret, so the derived
/// `Debug` is fine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote catalog source.
    pub source_url: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Per-request timeout for catalog fetches.
    pub request_timeout_secs: u64,
    /// `User-Agent` sent with catalog fetches.
    pub user_agent: String,
    /// Additional retry attempts after the first failed fetch.
    pub max_retries: u32,
    /// Base delay for exponential retry backoff: `base * 2^attempt` seconds.
    pub retry_backoff_base_secs: u64,
    /// Quiet period in milliseconds before debounced text filters commit.
    pub debounce_quiet_ms: u64,
}
