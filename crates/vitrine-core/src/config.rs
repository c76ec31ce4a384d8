use crate::app_config::{AppConfig, Environment};
use crate::template::TemplateKey;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Parse and validate configuration through an env-var lookup function, so
/// tests can drive it from a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::str::FromStr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        raw.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    }

    let database_url = require("DATABASE_URL")?;

    let env = parse_environment(&or_default("VITRINE_ENV", "development"))?;

    let bind_addr: SocketAddr =
        parse_as("VITRINE_BIND_ADDR", &or_default("VITRINE_BIND_ADDR", "0.0.0.0:3000"))?;
    let log_level = or_default("VITRINE_LOG_LEVEL", "info");

    let db_max_connections: u32 = parse_as(
        "VITRINE_DB_MAX_CONNECTIONS",
        &or_default("VITRINE_DB_MAX_CONNECTIONS", "10"),
    )?;
    let db_min_connections: u32 = parse_as(
        "VITRINE_DB_MIN_CONNECTIONS",
        &or_default("VITRINE_DB_MIN_CONNECTIONS", "1"),
    )?;
    let db_acquire_timeout_secs: u64 = parse_as(
        "VITRINE_DB_ACQUIRE_TIMEOUT_SECS",
        &or_default("VITRINE_DB_ACQUIRE_TIMEOUT_SECS", "10"),
    )?;

    let default_template: TemplateKey = parse_as(
        "VITRINE_DEFAULT_TEMPLATE",
        &or_default("VITRINE_DEFAULT_TEMPLATE", "sidebar-right"),
    )?;

    let save_limit_per_minute: usize = parse_as(
        "VITRINE_SAVE_LIMIT_PER_MINUTE",
        &or_default("VITRINE_SAVE_LIMIT_PER_MINUTE", "30"),
    )?;
    if save_limit_per_minute == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VITRINE_SAVE_LIMIT_PER_MINUTE".to_string(),
            reason: "must allow at least one save per minute".to_string(),
        });
    }

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        default_template,
        save_limit_per_minute,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VITRINE_ENV".to_string(),
            reason: format!("expected development, test or production, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
