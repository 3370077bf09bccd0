//! Connect Four HTTP server binary.

mod cli;

use anyhow::Result;
use clap::Parser;
use connect_four_server::{GameStore, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    info!("Starting Connect Four server");

    let store = GameStore::new();
    let app = router(store);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Server ready");
    info!(
        "Routes: POST /games, GET /games/{{id}}, POST /games/{{id}}/move"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
