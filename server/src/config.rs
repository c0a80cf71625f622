//! Server configuration parsed from environment variables.
//!
//! A `.env` file in the working directory is loaded first (if present) via
//! `dotenvy`; real environment variables win over it.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPLOAD_CLIENT: &str = "dashboard";
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Where and how image uploads are relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Upload worker base URL, without trailing slash.
    pub endpoint: String,
    /// `client` form value used when the browser does not send one.
    pub client: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub upload: UploadConfig,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Required:
    /// - `UPLOAD_ENDPOINT`: upload worker base URL (`http://` or `https://`)
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPLOAD_CLIENT`: default `dashboard`
    /// - `UPLOAD_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "ignoring unreadable .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let endpoint = lookup("UPLOAD_ENDPOINT")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("UPLOAD_ENDPOINT"))?;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "UPLOAD_ENDPOINT", value: endpoint });
        }

        let client = lookup("UPLOAD_CLIENT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_UPLOAD_CLIENT.to_owned());
        let timeout_secs = parse_or("UPLOAD_TIMEOUT_SECS", lookup("UPLOAD_TIMEOUT_SECS"), DEFAULT_UPLOAD_TIMEOUT_SECS)?;

        Ok(Self { port, upload: UploadConfig { endpoint, client, timeout_secs } })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
