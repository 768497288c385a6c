//! HTTP surface and lifecycle for the regional latency API.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod handlers;
mod router;

pub use error::{Error, Result};
pub use router::{LATENCY_API_PATH, RouterBuilder};

use std::net::SocketAddr;
use std::sync::Arc;

use latency_http::HttpServer;
use latency_telemetry::Aggregator;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{error, info};

/// Options for creating a new core.
pub struct CoreOptions<HS>
where
    HS: HttpServer,
{
    /// Source of the per-region summaries.
    pub aggregator: Aggregator,

    /// HTTP server for mounting the latency endpoint.
    pub http_server: HS,
}

/// Serves the latency API until shut down.
pub struct Core<HS>
where
    HS: HttpServer,
{
    aggregator: Aggregator,
    http_server: Arc<HS>,
    shutdown_token: CancellationToken,
    task_tracker: TaskTracker,
}

impl<HS> Core<HS>
where
    HS: HttpServer,
{
    /// Create new core.
    pub fn new(
        CoreOptions {
            aggregator,
            http_server,
        }: CoreOptions<HS>,
    ) -> Self {
        Self {
            aggregator,
            http_server: Arc::new(http_server),
            shutdown_token: CancellationToken::new(),
            task_tracker: TaskTracker::new(),
        }
    }

    /// Start the core.
    ///
    /// The returned handle resolves once the core is shut down, or with
    /// [`Error::HttpServerStopped`] if the server exits on its own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyStarted`] on a second call, or
    /// [`Error::HttpServer`] if the server fails to start.
    pub async fn start(&self) -> Result<JoinHandle<Result<()>>> {
        // `close` reports whether this call closed the tracker
        if !self.task_tracker.close() {
            return Err(Error::AlreadyStarted);
        }

        let router = RouterBuilder::build(self.aggregator);

        let http_server = Arc::clone(&self.http_server);
        let http_handle = http_server
            .start(router)
            .await
            .map_err(|e| Error::HttpServer(e.to_string()))?;

        info!(regions = ?self.aggregator.regions(), "latency api started");

        let shutdown_token = self.shutdown_token.clone();
        let handle = self.task_tracker.spawn(async move {
            tokio::select! {
                () = shutdown_token.cancelled() => {
                    info!("shutdown command received");
                    http_server.shutdown().await;

                    Ok(())
                }
                _ = http_handle => {
                    error!("http server stopped unexpectedly");

                    Err(Error::HttpServerStopped)
                }
            }
        });

        Ok(handle)
    }

    /// Address the HTTP server is listening on, once started.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.http_server.local_addr()
    }

    /// Shutdown the core.
    pub async fn shutdown(&self) {
        info!("core shutting down...");

        self.shutdown_token.cancel();
        self.task_tracker.close();
        self.task_tracker.wait().await;

        info!("core shutdown");
    }
}
