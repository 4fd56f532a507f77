//! Process configuration, read once at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Fallback signing secret for local development. Deployments must override
/// it with `JWT_SECRET`.
pub const DEV_JWT_SECRET: &str = "dev-secret-change-me";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_DATA_FILE: &str = "data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub jwt_secret: String,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jwt_secret: DEV_JWT_SECRET.to_string(),
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Load from the process environment (`JWT_SECRET`, `PORT`, `BIND_ADDR`, `DATA_FILE`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unset or unparsable values fall back
    /// to defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set; using insecure dev default");
                defaults.jwt_secret
            }
        };

        let port = parse_or(lookup("PORT"), "PORT", defaults.port);
        let bind_addr = parse_or(lookup("BIND_ADDR"), "BIND_ADDR", defaults.bind_addr);
        let data_file = lookup("DATA_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        Self {
            jwt_secret,
            bind_addr,
            port,
            data_file,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> T
where
    T: core::str::FromStr + core::fmt::Display,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, fallback = %default, "invalid config value; using default");
            default
        }),
    }
}
