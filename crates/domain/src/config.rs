pub mod errors;
pub mod http;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::{parse_endpoint, parse_endpoint_list, UpstreamConfig, DEFAULT_DNS_PORT};
