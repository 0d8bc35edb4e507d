use crate::ports::UpstreamProvider;
use revop_domain::{DnsResponse, DomainError, QueryParams, ResolveRequest};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// The request that was sent upstream together with what came back.
#[derive(Debug, Clone)]
pub struct ResolvedQuery {
    pub request: ResolveRequest,
    pub response: DnsResponse,
}

pub struct ResolveQueryUseCase {
    provider: Arc<dyn UpstreamProvider>,
}

impl ResolveQueryUseCase {
    pub fn new(provider: Arc<dyn UpstreamProvider>) -> Self {
        Self { provider }
    }

    /// Validates the query parameters and forwards the resulting question.
    ///
    /// Validation failures come back before the provider is touched.
    pub async fn execute(
        &self,
        params: &QueryParams,
        remote_addr: Option<&str>,
    ) -> Result<ResolvedQuery, DomainError> {
        let request = ResolveRequest::from_params(params, remote_addr)?;

        let start = Instant::now();
        let response = self.provider.query(&request).await?;

        debug!(
            name = %request.question.name,
            record_type = request.question.record_type,
            rcode = response.response_code,
            answers = response.answer.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Upstream answered"
        );

        Ok(ResolvedQuery { request, response })
    }
}
