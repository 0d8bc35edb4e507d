#![allow(dead_code)]

use async_trait::async_trait;
use revop_application::ports::UpstreamProvider;
use revop_domain::{DnsResponse, DomainError, ResolveRequest};
use std::sync::{Arc, Mutex};

/// Records every request it receives and answers with a scripted result.
#[derive(Clone)]
pub struct MockUpstreamProvider {
    result: Arc<Mutex<Result<DnsResponse, DomainError>>>,
    received: Arc<Mutex<Vec<ResolveRequest>>>,
}

impl MockUpstreamProvider {
    pub fn responding(response: DnsResponse) -> Self {
        Self::with_result(Ok(response))
    }

    pub fn failing(error: DomainError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<DnsResponse, DomainError>) -> Self {
        Self {
            result: Arc::new(Mutex::new(result)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<ResolveRequest> {
        self.received.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl UpstreamProvider for MockUpstreamProvider {
    async fn query(&self, request: &ResolveRequest) -> Result<DnsResponse, DomainError> {
        self.received.lock().unwrap().push(request.clone());
        self.result.lock().unwrap().clone()
    }
}
