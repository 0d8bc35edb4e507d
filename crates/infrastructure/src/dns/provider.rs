use super::endpoint_pool::EndpointPool;
use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::DnsTransport;
use async_trait::async_trait;
use revop_application::ports::UpstreamProvider;
use revop_domain::{DnsResponse, DomainError, ResolveRequest};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Forwards each request to one upstream server over a [`DnsTransport`].
///
/// Exactly one exchange is attempted per request. Timeouts, socket errors,
/// undecodable replies and replies with the wrong id all surface as
/// [`DomainError::UpstreamFailure`].
pub struct DnsUpstreamProvider {
    pool: EndpointPool,
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
}

impl DnsUpstreamProvider {
    pub fn new(pool: EndpointPool, transport: Arc<dyn DnsTransport>, timeout: Duration) -> Self {
        Self {
            pool,
            transport,
            timeout,
        }
    }
}

#[async_trait]
impl UpstreamProvider for DnsUpstreamProvider {
    async fn query(&self, request: &ResolveRequest) -> Result<DnsResponse, DomainError> {
        let server = self.pool.select();
        let (id, query_bytes) = MessageBuilder::build_query_with_id(request)?;
        let start = Instant::now();

        let reply = self
            .transport
            .send(server, &query_bytes, self.timeout)
            .await?;

        let message = ResponseParser::decode(&reply.bytes)?;
        if message.id() != id {
            return Err(DomainError::UpstreamFailure(format!(
                "reply id {} from {} does not match query id {}",
                message.id(),
                server,
                id
            )));
        }

        debug!(
            server = %server,
            protocol = self.transport.protocol_name(),
            domain = %request.question.name,
            record_type = request.question.record_type,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Upstream exchange completed"
        );

        Ok(ResponseParser::to_dns_response(&message))
    }
}
