//! Start the Warden server.

use clap::Args;

use warden_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the session TTL in seconds
    #[arg(long)]
    pub ttl_seconds: Option<u64>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path, env)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ttl) = args.ttl_seconds {
        config.session.ttl_seconds = ttl;
    }

    println!("Starting Warden server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  Session TTL: {}s", config.session.ttl_seconds);

    warden_api::run_server(config).await
}
