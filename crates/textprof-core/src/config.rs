use crate::app_config::{AppConfig, OutputFormat};
use crate::ConfigError;

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
/// Every variable is optional; absent values fall back to [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let log_level = lookup("TEXTPROF_LOG_LEVEL").unwrap_or(defaults.log_level);
    let top_n = parse_usize("TEXTPROF_TOP_N", defaults.top_n)?;
    let detail_limit = parse_usize("TEXTPROF_DETAIL_LIMIT", defaults.detail_limit)?;
    let format = match lookup("TEXTPROF_FORMAT") {
        Ok(raw) => parse_format(&raw)?,
        Err(_) => defaults.format,
    };

    Ok(AppConfig {
        log_level,
        top_n,
        detail_limit,
        format,
    })
}

/// Parse a string into an `OutputFormat` variant (case-insensitive).
fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TEXTPROF_FORMAT".to_string(),
            reason: format!("expected 'text' or 'json', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
