//! Application error types

use encore_domain::{AuthError, DomainError, ResponseSpec};
use thiserror::Error;

use crate::ports::{HttpClientError, TokenStoreError};

/// How a request through the gateway failed.
///
/// A first 401 never shows up here: the gateway turns it into a refresh
/// and a resend. The caller only sees what happened after that.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No response was received.
    #[error("network error: {0}")]
    Network(#[source] HttpClientError),

    /// The 401 could not be recovered because the credential exchange failed.
    #[error("token refresh failed: {0}")]
    RefreshFailed(#[source] AuthError),

    /// The resent request was rejected with 401 again.
    #[error("still unauthorized after token refresh (HTTP {status})")]
    RejectedAfterRetry {
        /// Status of the second response.
        status: u16,
        /// Body of the second response.
        body: String,
    },

    /// Any non-401 error status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The stored token could not be read before sending.
    #[error("token store error: {0}")]
    TokenStore(#[from] TokenStoreError),
}

impl GatewayError {
    /// Builds an [`GatewayError::Http`] from a failed response.
    #[must_use]
    pub fn from_response(response: &ResponseSpec) -> Self {
        Self::Http {
            status: response.status,
            body: response.body_text(),
        }
    }

    /// Builds a [`GatewayError::RejectedAfterRetry`] from the second 401.
    #[must_use]
    pub fn rejected_after_retry(response: &ResponseSpec) -> Self {
        Self::RejectedAfterRetry {
            status: response.status,
            body: response.body_text(),
        }
    }

    /// HTTP status behind this error, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RejectedAfterRetry { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request itself failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {path}: {message}")]
    Decode {
        /// Catalog path that was requested.
        path: String,
        /// Decoder message.
        message: String,
    },

    /// The caller passed an unusable argument.
    #[error("invalid input: {0}")]
    Invalid(#[from] DomainError),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
