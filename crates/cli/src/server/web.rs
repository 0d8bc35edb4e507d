use axum::Router;
use revop_api::{create_api_routes, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Serve until SIGINT/SIGTERM, then give in-flight requests
/// `shutdown_timeout` to finish.
pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    shutdown_timeout: Duration,
) -> anyhow::Result<()> {
    info!(bind_address = %bind_addr, "Starting web server");

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    let drain = Arc::new(Notify::new());
    let drain_signal = drain.clone();
    let serve = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move { drain_signal.notified().await });

    let mut server = tokio::spawn(async move { serve.await });

    tokio::select! {
        result = &mut server => {
            result??;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    info!(
        timeout_secs = shutdown_timeout.as_secs(),
        "Shutdown signal received, draining connections"
    );
    drain.notify_one();

    match tokio::time::timeout(shutdown_timeout, server).await {
        Ok(result) => result??,
        Err(_) => warn!("Graceful shutdown timed out, dropping remaining connections"),
    }

    Ok(())
}

fn create_app(state: AppState) -> Router {
    create_api_routes(state).layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
