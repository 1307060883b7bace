//! Process configuration.
//!
//! The service always listens on `0.0.0.0:8090`. The only knob is the log
//! filter, read from `RUST_LOG`.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

pub const PORT: u16 = 8090;
pub const DEFAULT_LOG_FILTER: &str = "info,todo_server=debug,todo_core=debug,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `tracing` filter directives (`RUST_LOG`)
    pub log_filter: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("RUST_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Fixed listen address.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
