use clap::Parser;
use revop_domain::config::parse_endpoint_list;
use revop_domain::CliOverrides;
use std::time::Duration;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "revop")]
#[command(version)]
#[command(about = "revop - DNS JSON API gateway speaking Google's DNS-over-HTTPS JSON format")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address, [host]:port (default :80)
    #[arg(short = 'l', long, value_name = "ADDR")]
    listen: Option<String>,

    /// Comma-separated upstream DNS servers (default 8.8.8.8,8.8.4.4)
    #[arg(long, value_name = "CSV")]
    dns_servers: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    level: Option<String>,

    /// Graceful shutdown timeout in seconds (default 10)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Upstream query timeout in seconds (default 2)
    #[arg(long, value_name = "SECS")]
    query_timeout: Option<u64>,

    /// Answer with application/json instead of application/x-javascript
    #[arg(long)]
    json_content_type: bool,

    /// Value for the `server` response header
    #[arg(long, value_name = "VALUE")]
    server_header: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            listen_address: self.listen.clone(),
            shutdown_timeout: self.timeout,
            upstream_servers: self.dns_servers.as_deref().map(parse_endpoint_list),
            query_timeout: self.query_timeout,
            log_level: self.level.clone(),
            json_content_type: self.json_content_type,
            server_header: self.server_header.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config)?;

    info!("Starting revop v{}", env!("CARGO_PKG_VERSION"));

    let app_state = di::build_app_state(&config)?;

    let listen_addr = config.server.socket_addr().ok_or_else(|| {
        anyhow::anyhow!("Invalid listen address '{}'", config.server.listen_address)
    })?;

    server::start_web_server(
        listen_addr,
        app_state,
        Duration::from_secs(config.server.shutdown_timeout),
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
