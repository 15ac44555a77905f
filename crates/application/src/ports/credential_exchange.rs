//! Credential exchange port

use async_trait::async_trait;
use encore_domain::{AccessToken, AuthError};

/// Obtains a fresh access token from the authorization service.
///
/// Implementations write the new token to the token store before returning
/// it, so callers never need to store it themselves.
#[async_trait]
pub trait CredentialExchange: Send + Sync {
    /// Runs one exchange.
    ///
    /// # Errors
    /// Returns an [`AuthError`] when the service rejects the credentials,
    /// the network call fails, or the token cannot be stored.
    async fn exchange(&self) -> Result<AccessToken, AuthError>;
}
