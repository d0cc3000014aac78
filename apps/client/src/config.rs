//! Client configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::errors::domain::{DomainError, ValidationKind};

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TICK_MILLIS: u64 = 1000;

/// Runtime configuration for the HTTP transport and the session ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the quiz API, without a trailing slash.
    pub base_url: String,
    pub request_timeout: Duration,
    /// Period of the elapsed-time ticker while a session is Active.
    pub tick_period: Duration,
}

impl ClientConfig {
    /// Builds a config from environment variables, falling back to local
    /// development defaults:
    ///
    /// - `QUIZ_API_BASE_URL` (default `http://localhost:5000/api`)
    /// - `QUIZ_API_TIMEOUT_SECS` (default 30)
    /// - `QUIZ_TICK_MILLIS` (default 1000)
    pub fn from_env() -> Result<Self, DomainError> {
        let base_url = env::var("QUIZ_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout =
            Duration::from_secs(parse_var("QUIZ_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?);
        let tick_period =
            Duration::from_millis(parse_var("QUIZ_TICK_MILLIS", DEFAULT_TICK_MILLIS)?);

        Ok(Self {
            base_url,
            request_timeout,
            tick_period,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            tick_period: Duration::from_millis(DEFAULT_TICK_MILLIS),
        }
    }
}

fn parse_var(name: &str, default: u64) -> Result<u64, DomainError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse::<u64>().map_err(|_| {
            DomainError::validation(
                ValidationKind::Other(name.to_string()),
                format!("{name} must be a non-negative integer, got '{raw}'"),
            )
        }),
    }
}
