//! Server configuration parsed from environment variables.

use crate::services::profile::ProfileTimeouts;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROFILE_API_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PROFILE_API_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing config: env var {0} not set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("config parse failed: {key}={value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the profile service, without a trailing slash.
    pub profile_api_url: String,
    pub timeouts: ProfileTimeouts,
    /// Redirect app pages to the maintenance placeholder.
    pub maintenance_mode: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `PROFILE_API_URL`: base URL of the profile service
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PROFILE_API_TIMEOUT_SECS`: default 15
    /// - `PROFILE_API_CONNECT_TIMEOUT_SECS`: default 5
    /// - `MAINTENANCE_MODE`: `1/true/yes/on` or `0/false/no/off`, default off
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is missing or any
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let profile_api_url = get("PROFILE_API_URL").ok_or(ConfigError::Missing("PROFILE_API_URL"))?;
        if !(profile_api_url.starts_with("http://") || profile_api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { key: "PROFILE_API_URL", value: profile_api_url });
        }
        let profile_api_url = profile_api_url.trim_end_matches('/').to_owned();

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let timeouts = ProfileTimeouts {
            request_secs: parse_or(
                "PROFILE_API_TIMEOUT_SECS",
                get("PROFILE_API_TIMEOUT_SECS"),
                DEFAULT_PROFILE_API_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "PROFILE_API_CONNECT_TIMEOUT_SECS",
                get("PROFILE_API_CONNECT_TIMEOUT_SECS"),
                DEFAULT_PROFILE_API_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let maintenance_mode = match get("MAINTENANCE_MODE") {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "MAINTENANCE_MODE", value: raw })?,
        };

        Ok(Self { port, profile_api_url, timeouts, maintenance_mode })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
