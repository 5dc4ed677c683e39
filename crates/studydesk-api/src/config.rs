//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `postgres://localhost/studydesk` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `5000` |
//! | `UPLOADS_DIR` | `./uploads` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `DB_CONNECT_TIMEOUT_SECS` | `30` |
//! | `ALLOWED_ORIGINS` | `http://localhost:3000` (`*` allows any origin) |
//! | `MAX_BODY_BYTES` | `10485760` |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use tracing::warn;

use studydesk_core::defaults;
use studydesk_db::pool::PoolConfig;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin, without credentials.
    Any,
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parse a comma-separated origin list. `*` anywhere in the list means any
    /// origin. Entries that are not valid header values are skipped; an empty
    /// result falls back to the default list.
    pub fn parse(raw: &str) -> Self {
        if raw.split(',').any(|s| s.trim() == "*") {
            return CorsOrigins::Any;
        }

        let origins: Vec<HeaderValue> = raw
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                match trimmed.parse::<HeaderValue>() {
                    Ok(v) => Some(v),
                    Err(e) => {
                        warn!("Invalid CORS origin '{}': {}", trimmed, e);
                        None
                    }
                }
            })
            .collect();

        if origins.is_empty() {
            return CorsOrigins::List(vec![HeaderValue::from_static(DEFAULT_ALLOWED_ORIGINS)]);
        }
        CorsOrigins::List(origins)
    }
}

impl Default for CorsOrigins {
    fn default() -> Self {
        CorsOrigins::parse(DEFAULT_ALLOWED_ORIGINS)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub uploads_dir: PathBuf,
    pub db_max_connections: u32,
    pub db_connect_timeout_secs: u64,
    pub allowed_origins: CorsOrigins,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: defaults::DATABASE_URL.to_string(),
            host: defaults::SERVER_HOST.to_string(),
            port: defaults::SERVER_PORT,
            uploads_dir: PathBuf::from(defaults::UPLOADS_DIR),
            db_max_connections: defaults::DB_MAX_CONNECTIONS,
            db_connect_timeout_secs: defaults::DB_CONNECT_TIMEOUT_SECS,
            allowed_origins: CorsOrigins::default(),
            max_body_bytes: defaults::MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Missing keys take
    /// their defaults; unparseable numbers are logged and replaced by the
    /// default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(d.database_url),
            host: lookup("HOST").unwrap_or(d.host),
            port: parse_or(&lookup, "PORT", d.port),
            uploads_dir: lookup("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or(d.uploads_dir),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", d.db_max_connections),
            db_connect_timeout_secs: parse_or(
                &lookup,
                "DB_CONNECT_TIMEOUT_SECS",
                d.db_connect_timeout_secs,
            ),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|raw| CorsOrigins::parse(&raw))
                .unwrap_or(d.allowed_origins),
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", d.max_body_bytes),
        }
    }

    /// Address string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new()
            .max_connections(self.db_max_connections)
            .connect_timeout(Duration::from_secs(self.db_connect_timeout_secs))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Invalid numeric setting, using default");
            default
        }),
    }
}
