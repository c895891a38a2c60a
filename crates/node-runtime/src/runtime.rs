//! # Node Runtime
//!
//! Startup, serving and shutdown around a [`NodeContainer`].
//!
//! ## Startup Sequence
//!
//! 1. Write the genesis block if the store is empty
//! 2. Spawn the expiry sweep
//! 3. Bind the HTTP listener and serve until shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use sl_01_chain_storage::{ChainStorageApi, StorageError};
use sl_04_api_gateway::{build_router, AppState};
use tokio::sync::watch;
use tracing::{error, info};

use crate::adapters::RegistryAdapter;
use crate::container::NodeContainer;
use crate::handlers::ExpirySweepHandler;

/// The node runtime orchestrating all subsystems.
pub struct NodeRuntime {
    container: Arc<NodeContainer>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl NodeRuntime {
    pub fn new(container: NodeContainer) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            container: Arc::new(container),
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Write genesis into an empty store. Idempotent.
    pub fn initialize_genesis(&self) -> Result<(), StorageError> {
        let mut chain = self.container.chain.write();
        match chain.initialize()? {
            Some(genesis) => info!("[sl-01] 🌱 Genesis block created: {}", genesis.hash),
            None => {
                let height = chain.get_block_height()?.unwrap_or_default();
                info!("[sl-01] Existing chain found, tip at height {}", height);
            }
        }
        Ok(())
    }

    /// REST router bound to this node's subsystems.
    pub fn router(&self) -> Router {
        let backend = RegistryAdapter::new(
            Arc::clone(&self.container.chain),
            Arc::clone(&self.container.mempool),
            self.container.gate(),
        );
        build_router(AppState::new(Arc::new(backend)))
    }

    /// Run until [`shutdown`](Self::shutdown) is called.
    pub async fn run(&self) -> Result<()> {
        info!("===========================================");
        info!("  Star-Ledger Node Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        self.initialize_genesis()
            .context("Failed to initialize genesis block")?;

        let sweep = ExpirySweepHandler::new(
            Arc::clone(&self.container.mempool),
            Duration::from_secs(self.container.config.mempool.sweep_interval_secs),
        );
        tokio::spawn(sweep.run(self.shutdown_rx.clone()));

        let network = &self.container.config.network;
        let addr = SocketAddr::new(network.bind_addr, network.http_port);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("HTTP API: http://{}", addr);
        info!("Data Dir: {:?}", self.container.config.storage.data_dir);
        info!("Storage:  {:?}", self.container.config.storage.backend);

        let mut shutdown = self.shutdown_rx.clone();
        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                let _ = shutdown.wait_for(|stop| *stop).await;
            })
            .await
            .context("HTTP server failed")?;

        info!("Shutdown complete");
        Ok(())
    }

    /// Signal the server and background tasks to stop.
    pub fn shutdown(&self) {
        info!("Initiating graceful shutdown...");
        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }
    }

    pub fn container(&self) -> Arc<NodeContainer> {
        Arc::clone(&self.container)
    }
}
