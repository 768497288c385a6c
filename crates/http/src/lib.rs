//! Abstract interface for the HTTP server that hosts the latency API.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::error::Error;
use std::fmt::Debug;
use std::net::SocketAddr;

use async_trait::async_trait;
use axum::Router;
use tokio::task::JoinHandle;

/// Marker trait for `HttpServer` errors
pub trait HttpServerError: Debug + Error + Send + Sync + 'static {}

/// Serves an axum [`Router`] until shut down.
#[async_trait]
pub trait HttpServer: Send + Sync + 'static {
    /// The error type for this server.
    type Error: HttpServerError;

    /// Binds the listener and starts serving `router` in the background.
    ///
    /// The returned handle completes when the server stops.
    async fn start(&self, router: Router) -> Result<JoinHandle<()>, Self::Error>;

    /// Address the server is listening on, once started.
    fn local_addr(&self) -> Option<SocketAddr>;

    /// Stops serving and waits for the server task to finish.
    async fn shutdown(&self);
}
