use std::path::PathBuf;

use crate::app_config::{AppConfig, DEFAULT_API_BASE_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
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
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Session variables are optional here: a missing merchant id or cookie is
/// reported by the collector as an unauthenticated run, not as bad config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
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

    let api_base_url = or_default("CATMIG_API_BASE_URL", DEFAULT_API_BASE_URL);
    let merchant_id = optional("CATMIG_MERCHANT_ID");
    let session_cookie = optional("CATMIG_SESSION_COOKIE");

    let page_limit = parse_u32("CATMIG_PAGE_LIMIT", "200")?;
    if page_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CATMIG_PAGE_LIMIT".to_string(),
            reason: "page limit must be at least 1".to_string(),
        });
    }

    let request_timeout_secs = parse_u64("CATMIG_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CATMIG_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    let user_agent = or_default("CATMIG_USER_AGENT", "catmig/0.1 (catalog-migration)");
    let output_dir = PathBuf::from(or_default("CATMIG_OUTPUT_DIR", "."));
    let log_level = or_default("CATMIG_LOG_LEVEL", "info");

    Ok(AppConfig {
        api_base_url,
        merchant_id,
        session_cookie,
        page_limit,
        request_timeout_secs,
        user_agent,
        output_dir,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
