//! revop domain layer
pub mod client_subnet;
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod query_params;
pub mod question;

pub use client_subnet::{AddressFamily, ClientSubnet, SUBNET_DISABLED_SENTINEL};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_question::DnsQuestion;
pub use dns_record::{DnsRr, RecordType};
pub use dns_response::DnsResponse;
pub use errors::DomainError;
pub use query_params::QueryParams;
pub use question::ResolveRequest;
