use async_trait::async_trait;
use revop_domain::{DnsResponse, DomainError, ResolveRequest};

/// Anything that can answer a DNS question, normally by forwarding it to
/// an upstream server.
///
/// Implementations perform at most one upstream exchange per call and
/// report every failure as [`DomainError::UpstreamFailure`].
#[async_trait]
pub trait UpstreamProvider: Send + Sync {
    async fn query(&self, request: &ResolveRequest) -> Result<DnsResponse, DomainError>;
}
