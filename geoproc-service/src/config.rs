//! Service configuration from environment variables.
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GEOPROC_HOST` | Bind address | `0.0.0.0` |
//! | `GEOPROC_PORT` | HTTP server port | `8000` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default bind address.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Where the HTTP server listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Read `GEOPROC_HOST` and `GEOPROC_PORT` from the process environment.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or_default(&lookup, "GEOPROC_HOST", DEFAULT_HOST);
        let port = parse_or_default(&lookup, "GEOPROC_PORT", DEFAULT_PORT);
        Self { host, port }
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    key = key,
                    value = %raw,
                    default = %default,
                    "Could not parse environment variable, using default"
                );
                default
            }
        },
        None => default,
    }
}
