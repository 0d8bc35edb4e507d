use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::http::HttpConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "revop.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/revop/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listen address and shutdown behaviour
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream DNS endpoints
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Response headers
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. revop.toml in current directory
    /// 3. /etc/revop/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.listen_address {
            self.server.listen_address = listen;
        }
        if let Some(timeout) = overrides.shutdown_timeout {
            self.server.shutdown_timeout = timeout;
        }
        if let Some(servers) = overrides.upstream_servers {
            self.upstream.servers = servers;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.upstream.query_timeout = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.json_content_type {
            self.http.json_content_type = true;
        }
        if let Some(server_header) = overrides.server_header {
            self.http.server_header = Some(server_header);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.socket_addr().is_none() {
            return Err(ConfigError::Validation(format!(
                "Invalid listen address '{}'",
                self.server.listen_address
            )));
        }

        if self.upstream.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }
        self.upstream.endpoints()?;

        if self.upstream.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Upstream query timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen_address: Option<String>,
    pub shutdown_timeout: Option<u64>,
    pub upstream_servers: Option<Vec<String>>,
    pub query_timeout: Option<u64>,
    pub log_level: Option<String>,
    pub json_content_type: bool,
    pub server_header: Option<String>,
}
