use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// `ip[:port]` entries; IPv6 with a port must be bracketed.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    /// Seconds to wait for an upstream reply.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl UpstreamConfig {
    pub fn endpoints(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.servers.iter().map(|s| parse_endpoint(s)).collect()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_servers() -> Vec<String> {
    vec!["8.8.8.8".to_string(), "8.8.4.4".to_string()]
}

fn default_query_timeout() -> u64 {
    2
}

/// Parses `ip`, `ip:port`, `[ipv6]` or `[ipv6]:port`; the port defaults to 53.
pub fn parse_endpoint(value: &str) -> Result<SocketAddr, ConfigError> {
    let value = value.trim();
    let invalid = || ConfigError::InvalidEndpoint(value.to_string());

    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let host = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    host.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| invalid())
}

/// Splits a comma-separated endpoint list, skipping blank entries.
pub fn parse_endpoint_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
