use revop_domain::ConfigError;
use std::net::SocketAddr;
use std::sync::Arc;

/// Picks an index in `0..len` for each query.
pub type EndpointSelector = Arc<dyn Fn(usize) -> usize + Send + Sync>;

/// The fixed set of upstream servers, chosen uniformly at random per query.
#[derive(Clone)]
pub struct EndpointPool {
    endpoints: Arc<[SocketAddr]>,
    selector: EndpointSelector,
}

impl EndpointPool {
    pub fn new(endpoints: Vec<SocketAddr>) -> Result<Self, ConfigError> {
        if endpoints.is_empty() {
            return Err(ConfigError::Validation(
                "At least one upstream server must be configured".into(),
            ));
        }

        Ok(Self {
            endpoints: endpoints.into(),
            selector: Arc::new(|len| fastrand::usize(..len)),
        })
    }

    /// Replace the random selector, e.g. with a fixed sequence in tests.
    pub fn with_selector(mut self, selector: EndpointSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn select(&self) -> SocketAddr {
        let len = self.endpoints.len();
        self.endpoints[(self.selector)(len) % len]
    }

    pub fn endpoints(&self) -> &[SocketAddr] {
        &self.endpoints
    }
}

impl std::fmt::Debug for EndpointPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointPool")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
