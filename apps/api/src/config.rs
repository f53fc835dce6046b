use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::matching::DEFAULT_TOP_N;

/// 5 MiB, matching the upload limit of the original form handler.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_PARSE_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub default_top_n: usize,
    pub max_upload_bytes: usize,
    pub resume_parse_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_top_n: DEFAULT_TOP_N,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            resume_parse_timeout: Duration::from_secs(DEFAULT_PARSE_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            default_top_n: env_or("RECOMMENDATION_TOP_N", defaults.default_top_n)?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            resume_parse_timeout: Duration::from_secs(env_or(
                "RESUME_PARSE_TIMEOUT_SECS",
                DEFAULT_PARSE_TIMEOUT_SECS,
            )?),
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_when_unset() {
        let value: u16 = env_or("JOBMATCH_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_env_or_rejects_malformed_value() {
        std::env::set_var("JOBMATCH_TEST_BAD_PORT", "eighty");
        let err = env_or::<u16>("JOBMATCH_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("JOBMATCH_TEST_BAD_PORT"));
    }

    #[test]
    fn test_env_or_parses_trimmed_value() {
        std::env::set_var("JOBMATCH_TEST_TOP_N", " 7 ");
        assert_eq!(env_or::<usize>("JOBMATCH_TEST_TOP_N", 5).unwrap(), 7);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_top_n, 5);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    }
}
