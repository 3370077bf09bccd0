//! Command-line interface for the Connect Four server.

use clap::Parser;

/// Connect Four game server.
#[derive(Parser, Debug)]
#[command(name = "connect_four_server")]
#[command(about = "Connect Four served over JSON HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "8000")]
    pub port: u16,
}
