//! IAM service entry point.
//!
//! Startup order: parse flags → load settings → open log sink → install
//! metrics recorder → connect MySQL (eager) → build Redis client (lazy) →
//! resolve local IP → serve HTTP until shutdown, then release the pool.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use iam_service::config::loader::load_settings;
use iam_service::http::{AppState, HttpServer};
use iam_service::net::identity;
use iam_service::observability::{logging, metrics};
use iam_service::store::mysql::UserStore;
use iam_service::store::redis::GroupStore;

/// Minimal identity read service over a MySQL user table and a Redis
/// group set.
#[derive(Parser, Debug)]
#[command(name = "iam-service")]
#[command(about = "HTTP identity read service", version)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short = 'c', long = "config", default_value = "./configs/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = load_settings(&args.config)?;

    logging::init(&settings.log)?;
    tracing::info!(
        config = %args.config.display(),
        bind_address = %settings.server.bind_address,
        "configuration loaded"
    );

    let prometheus = metrics::install_recorder()?;

    let users = UserStore::connect(&settings.mysql).await?;
    tracing::info!(
        host = %settings.mysql.host,
        dbname = %settings.mysql.dbname,
        "MySQL pool opened"
    );

    // Lazy client: connectivity problems surface on first /groups request.
    let groups = GroupStore::connect(&settings.redis)?;

    let local_ip = identity::local_ipv4()?
        .map(|ip| ip.to_string())
        .unwrap_or_default();
    if local_ip.is_empty() {
        tracing::warn!("no non-loopback IPv4 address found");
    } else {
        tracing::info!(ip = %local_ip, "resolved local IPv4 address");
    }

    let state = AppState {
        users: users.clone(),
        groups,
        local_ip,
        metrics: prometheus,
    };

    let server = HttpServer::new(&settings, state);
    let listener = TcpListener::bind(server.bind_address()).await?;
    server.run(listener).await?;

    // Release the pooled connections exactly once on the way out.
    users.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}
