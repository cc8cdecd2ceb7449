use std::net::IpAddr;
use std::time::Duration;

use axelin_postgrest::config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT};
use axelin_postgrest::PostgrestConfig;
use axum::http::HeaderValue;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the Supabase URL and key has a default suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// Inbound request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upstream PostgREST connection settings.
    pub postgrest: PostgrestConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                         | Default                 |
    /// |---------------------------------|-------------------------|
    /// | `SUPABASE_URL`                  | required                |
    /// | `SUPABASE_KEY`                  | required                |
    /// | `SUPABASE_CONNECT_TIMEOUT_SECS` | `5`                     |
    /// | `SUPABASE_REQUEST_TIMEOUT_SECS` | `15`                    |
    /// | `HOST`                          | `0.0.0.0`               |
    /// | `PORT`                          | `8080`                  |
    /// | `CORS_ORIGINS`                  | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase_url = lookup("SUPABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        if !supabase_url.starts_with("http://") && !supabase_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                var: "SUPABASE_URL",
                reason: format!("'{supabase_url}' is not an http(s) URL"),
            });
        }

        let supabase_key = lookup("SUPABASE_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_KEY"))?;

        let connect_timeout = parse_secs(
            &lookup,
            "SUPABASE_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT.as_secs(),
        )?;
        let upstream_timeout = parse_secs(
            &lookup,
            "SUPABASE_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT.as_secs(),
        )?;

        let host: IpAddr = parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port: u16 = parse_or(&lookup, "PORT", 8080)?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    reason: format!("'{origin}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_secs(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let postgrest = PostgrestConfig::new(supabase_url, supabase_key).with_timeouts(
            Duration::from_secs(connect_timeout),
            Duration::from_secs(upstream_timeout),
        );

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            postgrest,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}

/// A timeout in whole seconds. Zero would fail every request, so it is
/// rejected.
fn parse_secs<F>(lookup: &F, var: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, var, default)? {
        0 => Err(ConfigError::Invalid {
            var,
            reason: "must be at least 1 second".to_string(),
        }),
        secs => Ok(secs),
    }
}
