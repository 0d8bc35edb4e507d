pub mod endpoint_pool;
pub mod forwarding;
pub mod provider;
pub mod transport;

pub use endpoint_pool::{EndpointPool, EndpointSelector};
pub use provider::DnsUpstreamProvider;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
