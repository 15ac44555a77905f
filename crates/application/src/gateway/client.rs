//! Authenticated request gateway.
//!
//! Every catalog request goes through [`AuthenticatedGateway::send`]:
//!
//! 1. the stored token, if any, is attached as `Authorization: Bearer <token>`;
//! 2. the request is sent;
//! 3. on a 401 for a request that has not been resent yet, one credential
//!    exchange runs, the new token replaces the header, and the request is
//!    sent once more;
//! 4. whatever comes back from that resend is final.
//!
//! Concurrent requests share the token store without coordination. Two of
//! them hitting 401 together will each run their own exchange; the last
//! write to the store wins and each resend carries the token its own
//! exchange returned.

use std::sync::Arc;

use encore_domain::{OutgoingRequest, ResponseSpec, token_preview};
use tracing::{debug, info, instrument, warn};

use super::PendingRequest;
use crate::error::GatewayError;
use crate::ports::{CredentialExchange, HttpClient, TokenStore};

/// HTTP client bound to a fixed base URL that authenticates every request
/// and recovers once from token expiry.
pub struct AuthenticatedGateway {
    base_url: String,
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenStore>,
    exchange: Arc<dyn CredentialExchange>,
}

impl AuthenticatedGateway {
    /// Creates a gateway.
    ///
    /// # Arguments
    /// * `base_url` - Catalog API root, e.g. `https://api.spotify.com/v1`
    /// * `http` - Transport
    /// * `tokens` - Store read before every send
    /// * `exchange` - Used to recover from a 401
    pub fn new(
        base_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        tokens: Arc<dyn TokenStore>,
        exchange: Arc<dyn CredentialExchange>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http,
            tokens,
            exchange,
        }
    }

    /// The catalog API root this gateway sends to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` (with its query string) onto the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Sends a `GET` for `path` relative to the base URL.
    ///
    /// # Errors
    /// See [`AuthenticatedGateway::send`].
    pub async fn get(&self, path: &str) -> Result<ResponseSpec, GatewayError> {
        self.send(OutgoingRequest::get(self.url_for(path))).await
    }

    /// Sends `request` with authentication and single-retry recovery.
    ///
    /// # Errors
    /// - [`GatewayError::Network`] when no response arrives
    /// - [`GatewayError::RefreshFailed`] when a 401 could not be recovered
    /// - [`GatewayError::RejectedAfterRetry`] when the resend is also a 401
    /// - [`GatewayError::Http`] for any other error status
    /// - [`GatewayError::TokenStore`] when the stored token cannot be read
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn send(&self, request: OutgoingRequest) -> Result<ResponseSpec, GatewayError> {
        let mut pending = PendingRequest::new(request);
        self.attach_stored_token(&mut pending).await?;

        loop {
            let response = self.dispatch(&pending).await?;

            if response.is_success() {
                return Ok(response);
            }

            if !response.is_unauthorized() {
                debug!(status = response.status, "request failed");
                return Err(GatewayError::from_response(&response));
            }

            if pending.retried() {
                warn!("request rejected again after token refresh");
                return Err(GatewayError::rejected_after_retry(&response));
            }

            pending.mark_retried();
            self.refresh(&mut pending).await?;
        }
    }

    async fn attach_stored_token(&self, pending: &mut PendingRequest) -> Result<(), GatewayError> {
        match self.tokens.get().await? {
            Some(token) => {
                debug!(token = %token_preview(&token), "attaching stored token");
                pending.request.set_bearer(&token);
            }
            None => debug!("no stored token, sending without authorization"),
        }
        Ok(())
    }

    async fn refresh(&self, pending: &mut PendingRequest) -> Result<(), GatewayError> {
        info!("received 401, exchanging credentials for a new token");

        let token = self.exchange.exchange().await.map_err(|e| {
            warn!(error = %e, "token refresh failed");
            GatewayError::RefreshFailed(e)
        })?;

        debug!(token = %token.preview(), "resending with refreshed token");
        pending.request.set_bearer(&token.access_token);
        Ok(())
    }

    async fn dispatch(&self, pending: &PendingRequest) -> Result<ResponseSpec, GatewayError> {
        self.http
            .execute(&pending.request)
            .await
            .map_err(GatewayError::Network)
    }
}
