use revop_api::AppState;
use revop_application::use_cases::ResolveQueryUseCase;
use revop_domain::Config;
use revop_infrastructure::dns::{DnsUpstreamProvider, EndpointPool, UdpTransport};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Wire the upstream provider, the use case and the HTTP state together.
pub fn build_app_state(config: &Config) -> anyhow::Result<AppState> {
    let pool = EndpointPool::new(config.upstream.endpoints()?)?;

    info!(
        servers = ?pool.endpoints(),
        query_timeout_secs = config.upstream.query_timeout,
        "Upstream DNS servers configured"
    );

    let provider = Arc::new(DnsUpstreamProvider::new(
        pool,
        Arc::new(UdpTransport::new()),
        Duration::from_secs(config.upstream.query_timeout),
    ));

    let resolve = Arc::new(ResolveQueryUseCase::new(provider));

    Ok(AppState::new(resolve, &config.http)?)
}
