//! Registry Janitor
//!
//! Removes every untagged image from the repositories of a container
//! registry, in a single pass.
//!
//! Architecture:
//! - Configuration: Region and endpoint from the environment
//! - Commands: The cleanup stages (describe registry, list repositories,
//!   remove untagged images)
//! - Chain: Runs the stages in order, feeding each output to the next stage
//!
//! The process exits non-zero if any stage fails. Images deleted before
//! the failure stay deleted.

mod chain;
mod command;
mod config;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::chain::ChainRunner;
use crate::command::cleanup_chain;
use crate::config::Config;
use janitor_client::EcrClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "janitor_runner=info,janitor_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting registry janitor");

    let config = load_config()?;
    info!(
        "Loaded configuration: region={}, endpoint={}",
        config.region,
        config.endpoint_url.as_deref().unwrap_or("default")
    );

    let client = Arc::new(
        EcrClient::connect(config.region.clone(), config.endpoint_url.clone()).await,
    );

    info!(
        "Registry client initialized for region {}",
        client.region().unwrap_or("unknown")
    );

    let runner = ChainRunner::new(client);
    if let Err(e) = runner.run(&cleanup_chain()).await {
        if e.is_access_denied() {
            error!(
                "Access denied by the registry, check the ECR permissions of the current credentials: {}",
                e
            );
        } else {
            error!("Cleanup failed: {}", e);
        }
        return Err(e).context("Registry cleanup failed");
    }

    info!("Cleanup completed");
    Ok(())
}

/// Loads configuration from environment variables and validates it
fn load_config() -> Result<Config> {
    let config = Config::from_env();
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
