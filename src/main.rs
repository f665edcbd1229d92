use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lastmile::api::{run_server, AppState};
use lastmile::config::ServerConfig;
use lastmile::shutdown::install_shutdown_handler;

#[derive(Parser, Debug)]
#[command(name = "lastmile")]
#[command(version)]
#[command(about = "Last-Mile Logistics API: post freight jobs, register drivers, assign and complete jobs")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Directory holding the dashboards and static assets
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::new(SocketAddr::new(args.host, args.port))
        .with_static_dir(args.static_dir);

    if !config.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "Static directory not found, dashboards will return 404"
        );
    }

    let state = AppState::seeded();
    let shutdown = install_shutdown_handler();

    run_server(config, state, shutdown).await?;

    Ok(())
}
