use clap::Parser;
use smart_doh_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "smart-doh")]
#[command(version)]
#[command(about = "Smart DoH - DNS-over-HTTPS proxy with category-aware routing")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Primary upstream DoH URL, used for both JSON and wire queries
    #[arg(short = 'u', long, value_name = "URL")]
    upstream: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        primary_upstream: cli.upstream.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    if cli.dump_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    bootstrap::init_logging(&config);

    info!("Starting Smart DoH v{}", env!("CARGO_PKG_VERSION"));

    let services = di::ProxyServices::new(&config)?;
    let app_state = services.into_app_state(&config);

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;

    server::start_web_server(addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
