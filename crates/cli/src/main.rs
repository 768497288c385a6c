//! CLI binary serving the regional latency API.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_pub_crate)]

use std::net::SocketAddr;

use clap::Parser;
use latency_core::{Core, CoreOptions};
use latency_http_insecure::InsecureHttpServer;
use latency_telemetry::Aggregator;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// CLI-specific error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Core library error
    #[error(transparent)]
    Core(#[from] latency_core::Error),

    /// Invalid log filter directive
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to serve the latency API on
    #[arg(long, default_value = "0.0.0.0:8000", env = "LATENCY_LISTEN_ADDR")]
    listen_addr: SocketAddr,

    /// Tracing filter directive, e.g. `info` or `latency_core=debug`
    #[arg(long, default_value = "info", env = "LATENCY_LOG")]
    log_filter: String,
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = sigint.recv() => info!("Received SIGINT"),
                }
                return;
            }
            (Err(e), _) | (_, Err(e)) => {
                error!("failed to install signal handlers, using ctrl-c: {}", e);
            }
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received interrupt signal");
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_filter)?)
        .init();

    let core = Core::new(CoreOptions {
        aggregator: Aggregator::seeded(),
        http_server: InsecureHttpServer::new(args.listen_addr),
    });

    let mut handle = core.start().await?;

    tokio::select! {
        () = shutdown_signal() => {
            info!("Shutting down");
            core.shutdown().await;
            Ok(())
        }
        result = &mut handle => match result {
            Ok(result) => result.map_err(Error::Core),
            Err(e) => {
                error!("core task failed: {}", e);
                Err(latency_core::Error::HttpServerStopped.into())
            }
        },
    }
}
