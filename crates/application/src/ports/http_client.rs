//! HTTP client port
//!
//! The transport the gateway sends through. Implementations return every
//! response they receive, whatever the status; only failures to get a
//! response at all are errors.

use std::future::Future;
use std::pin::Pin;

use encore_domain::{OutgoingRequest, ResponseSpec};

/// Transport-level failures. No response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// Host name resolution failed.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error text.
        message: String,
    },

    /// The server actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Any other connection failure.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Redirect limit exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// Anything else the transport reports.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
pub trait HttpClient: Send + Sync {
    /// Sends `request` and returns the response, whatever its status.
    ///
    /// The returned future must not borrow `request`.
    fn execute(
        &self,
        request: &OutgoingRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>>;
}
