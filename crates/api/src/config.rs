//! Startup configuration, loaded once from the environment.

use std::net::SocketAddr;

use thiserror::Error;

use expenses_observability::LogFormat;

const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Immutable process configuration.
///
/// Built once in `main` and handed to the components that need it; nothing
/// below the server bootstrap reads the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub auth_token: String,
    pub max_db_connections: u32,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from process environment variables.
    ///
    /// Required: `PORT`, `DATABASE_URL`, `AUTH_TOKEN`.
    /// Optional: `DB_MAX_CONNECTIONS` (default 5), `LOG_FORMAT` (`json`/`pretty`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port = parse_port(&required("PORT")?)?;
        let database_url = required("DATABASE_URL")?;
        let auth_token = required("AUTH_TOKEN")?;

        let max_db_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => parse_max_connections(&raw)?,
            None => DEFAULT_MAX_DB_CONNECTIONS,
        };

        let log_format = lookup("LOG_FORMAT")
            .map(|raw| LogFormat::parse(&raw))
            .unwrap_or_default();

        Ok(Self {
            port,
            database_url,
            auth_token,
            max_db_connections,
            log_format,
        })
    }

    /// Listen on all interfaces at the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl core::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("database_url", &"<redacted>")
            .field("auth_token", &"<redacted>")
            .field("max_db_connections", &self.max_db_connections)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Accepts `2565` as well as the `:2565` listen-address form.
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(':').unwrap_or(trimmed);
    digits.parse::<u16>().map_err(|e| ConfigError::Invalid {
        name: "PORT",
        reason: format!("{raw:?}: {e}"),
    })
}

fn parse_max_connections(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err(ConfigError::Invalid {
            name: "DB_MAX_CONNECTIONS",
            reason: "must be at least 1".to_string(),
        }),
        Err(e) => Err(ConfigError::Invalid {
            name: "DB_MAX_CONNECTIONS",
            reason: format!("{raw:?}: {e}"),
        }),
    }
}
