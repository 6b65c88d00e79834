use crate::app_config::AppConfig;
use crate::pipeline::CategoryTabIds;
use crate::ConfigError;

pub const DEFAULT_SOURCE_URL: &str =
    "https://static.satisfactory-calculator.com/data/json/mapData/en-Stable.json?v=1759732267";

pub const DEFAULT_SOURCE_REFERER: &str = "https://satisfactory-calculator.com/";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// development configuration.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let bind_addr = parse_addr("SFMAP_BIND_ADDR", "0.0.0.0:8080")?;
    let log_level = or_default("SFMAP_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("SFMAP_DATA_DIR", "./static/data"));

    let source_url = or_default("SFMAP_SOURCE_URL", DEFAULT_SOURCE_URL);
    let source_referer = or_default("SFMAP_SOURCE_REFERER", DEFAULT_SOURCE_REFERER);
    let fetch_user_agent = or_default("SFMAP_FETCH_USER_AGENT", DEFAULT_USER_AGENT);
    let fetch_timeout_secs = parse_u64("SFMAP_FETCH_TIMEOUT_SECS", "30")?;
    let fetch_max_retries = parse_u32("SFMAP_FETCH_MAX_RETRIES", "3")?;
    let fetch_retry_backoff_base_ms = parse_u64("SFMAP_FETCH_RETRY_BACKOFF_BASE_MS", "1000")?;

    let defaults = CategoryTabIds::default();
    let tab_ids = CategoryTabIds {
        resources: or_default("SFMAP_TAB_RESOURCES", &defaults.resources),
        collectibles: or_default("SFMAP_TAB_COLLECTIBLES", &defaults.collectibles),
        artifacts: or_default("SFMAP_TAB_ARTIFACTS", &defaults.artifacts),
        wells: or_default("SFMAP_TAB_WELLS", &defaults.wells),
    };

    Ok(AppConfig {
        bind_addr,
        log_level,
        data_dir,
        source_url,
        source_referer,
        fetch_user_agent,
        fetch_timeout_secs,
        fetch_max_retries,
        fetch_retry_backoff_base_ms,
        tab_ids,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
