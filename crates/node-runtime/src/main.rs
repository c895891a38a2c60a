//! # Star-Ledger Node
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`RUST_LOG`, default `info`)
//! 2. Load configuration from the environment
//! 3. Open storage and build the subsystems
//! 4. Serve until Ctrl+C

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{NodeConfig, NodeContainer, NodeRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = NodeConfig::from_env().context("Invalid configuration")?;
    let container = NodeContainer::new(config).context("Failed to build subsystems")?;
    let runtime = Arc::new(NodeRuntime::new(container));

    let mut server = {
        let runtime = Arc::clone(&runtime);
        tokio::spawn(async move { runtime.run().await })
    };

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::select! {
        result = &mut server => return result?,
        signal = tokio::signal::ctrl_c() => signal?,
    }

    runtime.shutdown();
    server.await?
}
