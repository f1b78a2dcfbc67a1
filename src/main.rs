//! Contacts Bridge - Main entry point
//!
//! Serves contact lookups to an MCP client over stdio.

use anyhow::Result;
use contacts_bridge::providers::{ContactProvider, DexContactProvider, MemoryContactProvider};
use contacts_bridge::{Config, ContactBridge, ContactsMcpServer, DexClient, ProviderKind};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL feeds the subscriber
    let loaded = Config::from_env();
    let log_level = loaded
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let provider: Arc<dyn ContactProvider> = match config.provider {
        ProviderKind::Dex => {
            info!("Using Dex contact store at {}", config.dex_api_url);
            Arc::new(DexContactProvider::new(
                DexClient::new(&config),
                config.page_size,
            ))
        }
        ProviderKind::Fixture => {
            let path = config
                .fixture_path
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("CONTACTS_FIXTURE_PATH is not set"))?;
            info!("Using fixture contact store at {}", path.display());
            Arc::new(MemoryContactProvider::from_json_file(path)?)
        }
    };

    let bridge = Arc::new(ContactBridge::new(provider)?);
    let server = ContactsMcpServer::new(bridge);

    info!("Starting MCP server with stdio transport");
    contacts_bridge::server::run_server(server).await?;

    info!("Contacts bridge shutdown complete");
    Ok(())
}
