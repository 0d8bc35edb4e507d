use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// `[host]:port`; a bare `:port` listens on all IPv4 interfaces.
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    /// Seconds to let in-flight requests finish after a shutdown signal.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        let addr = &self.listen_address;
        if addr.starts_with(':') {
            format!("0.0.0.0{}", addr).parse().ok()
        } else {
            addr.parse().ok()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

fn default_listen_address() -> String {
    ":80".to_string()
}

fn default_shutdown_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_port_listens_everywhere() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr(), Some("0.0.0.0:80".parse().unwrap()));
    }

    #[test]
    fn test_explicit_listen_address() {
        let config = ServerConfig {
            listen_address: "[::1]:8053".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), Some("[::1]:8053".parse().unwrap()));
    }

    #[test]
    fn test_unparseable_listen_address() {
        let config = ServerConfig {
            listen_address: "localhost".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), None);
    }
}
