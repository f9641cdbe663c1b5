//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use warden_auth::InMemoryCredentialStore;
use warden_auth::session::configured_ttl;
use warden_core::config::AppConfig;
use warden_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration as JSON (secrets masked)
    Show,
    /// Validate the configuration, including the user table
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config_path: &str, env: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path, env)?;

    match &args.command {
        ConfigCommand::Show => {
            let masked = mask_secrets(config);
            println!("{}", serde_json::to_string_pretty(&masked)?);
        }
        ConfigCommand::Validate => {
            configured_ttl(&config.session)?;
            let store = InMemoryCredentialStore::from_config(&config.auth)?;
            println!("Configuration '{config_path}' is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Session TTL: {}s", config.session.ttl_seconds);
            println!("  Admin role: {}", config.session.admin_role);
            println!("  Users: {}", store.len());
        }
    }

    Ok(())
}

/// Replace password material with a placeholder for display.
fn mask_secrets(mut config: AppConfig) -> AppConfig {
    for user in &mut config.auth.users {
        if user.password.is_some() {
            user.password = Some("********".to_string());
        }
        if user.password_hash.is_some() {
            user.password_hash = Some("********".to_string());
        }
    }
    config
}
