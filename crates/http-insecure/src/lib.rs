//! Implementation of simple non-secure HTTP for serving the latency API.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_pub_crate)]

mod error;

pub use error::Error;

use std::future::IntoFuture;
use std::net::SocketAddr;

use async_trait::async_trait;
use axum::Router;
use latency_http::HttpServer;
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::info;

/// Simple non-secure HTTP server.
pub struct InsecureHttpServer {
    listen_addr: SocketAddr,
    bound_addr: RwLock<Option<SocketAddr>>,
    shutdown_token: CancellationToken,
    task_tracker: TaskTracker,
}

impl InsecureHttpServer {
    /// Creates a new instance of `InsecureHttpServer`.
    ///
    /// Port `0` picks a free port at start; see [`HttpServer::local_addr`].
    #[must_use]
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self {
            listen_addr,
            bound_addr: RwLock::new(None),
            shutdown_token: CancellationToken::new(),
            task_tracker: TaskTracker::new(),
        }
    }
}

#[async_trait]
impl HttpServer for InsecureHttpServer {
    type Error = Error;

    async fn start(&self, router: Router) -> Result<JoinHandle<()>, Self::Error> {
        let shutdown_token = self.shutdown_token.clone();

        if !self.task_tracker.close() {
            return Err(Error::AlreadyStarted);
        }

        let listener = tokio::net::TcpListener::bind(self.listen_addr)
            .await
            .map_err(Error::Bind)?;
        let local_addr = listener.local_addr().map_err(Error::LocalAddr)?;
        *self.bound_addr.write() = Some(local_addr);

        info!("http server listening on {}", local_addr);

        let handle = self.task_tracker.spawn(async move {
            tokio::select! {
                e = axum::serve(listener, router.into_make_service()).into_future() => {
                    info!("http server exited {:?}", e);
                }
                () = shutdown_token.cancelled() => {}
            };
        });

        Ok(handle)
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        *self.bound_addr.read()
    }

    async fn shutdown(&self) {
        info!("http server shutting down...");

        self.shutdown_token.cancel();
        self.task_tracker.close();
        self.task_tracker.wait().await;

        info!("http server shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::routing::get;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn loopback() -> SocketAddr {
        "127.0.0.1:0".parse().unwrap()
    }

    #[tokio::test]
    async fn test_serves_router_on_ephemeral_port() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let server = InsecureHttpServer::new(loopback());
        assert!(server.local_addr().is_none());

        let router = Router::new().route("/ping", get(|| async { "pong" }));
        let _handle = server.start(router).await.unwrap();

        let addr = server.local_addr().unwrap();
        assert_ne!(addr.port(), 0);

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /ping HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.ends_with("pong"));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_start_twice_fails() {
        let server = InsecureHttpServer::new(loopback());

        let _handle = server.start(Router::new()).await.unwrap();
        let result = server.start(Router::new()).await;

        assert!(matches!(result, Err(Error::AlreadyStarted)));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_concurrent_start_admits_one() {
        let server = InsecureHttpServer::new(loopback());

        let (first, second) = tokio::join!(
            server.start(Router::new()),
            server.start(Router::new())
        );

        assert_eq!(usize::from(first.is_ok()) + usize::from(second.is_ok()), 1);
        assert!(
            matches!(first, Err(Error::AlreadyStarted))
                || matches!(second, Err(Error::AlreadyStarted))
        );

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_completes_handle() {
        let server = InsecureHttpServer::new(loopback());
        let handle = server.start(Router::new()).await.unwrap();

        server.shutdown().await;

        assert!(handle.await.is_ok());
    }
}
