use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let source_url = or_default("PIXELSHOP_SOURCE_URL", "https://dummyjson.com");
    let log_level = or_default("PIXELSHOP_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("PIXELSHOP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PIXELSHOP_USER_AGENT", "pixelshop/0.1 (catalog-browser)");
    let max_retries = parse_u32("PIXELSHOP_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("PIXELSHOP_RETRY_BACKOFF_BASE_SECS", "5")?;
    let debounce_quiet_ms = parse_u64("PIXELSHOP_DEBOUNCE_QUIET_MS", "500")?;

    Ok(AppConfig {
        source_url,
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        debounce_quiet_ms,
    })
}
