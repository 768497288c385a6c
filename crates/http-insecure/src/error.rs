use latency_http::HttpServerError;
use thiserror::Error;

/// Errors that can occur in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The server has already been started.
    #[error("The server has already been started")]
    AlreadyStarted,

    /// Failed to bind to address.
    #[error("Failed to bind to address: {0}")]
    Bind(#[source] std::io::Error),

    /// Bound listener did not report a local address.
    #[error("Failed to read local address: {0}")]
    LocalAddr(#[source] std::io::Error),
}

impl HttpServerError for Error {}
