//! Access token and client credential types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scheme used when attaching an access token to catalog requests.
pub const BEARER_SCHEME: &str = "Bearer";

/// Access token issued by the authorization service.
///
/// Only `access_token` is ever persisted. Expiry is kept for display and
/// is never consulted before sending: refresh happens after a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The opaque bearer string
    pub access_token: String,
    /// Token type reported by the server (usually "Bearer")
    pub token_type: String,
    /// Lifetime in seconds from issuance
    pub expires_in: u64,
    /// When this token was obtained
    pub obtained_at: DateTime<Utc>,
}

impl AccessToken {
    /// Create a new token stamped with the current time.
    #[must_use]
    pub fn new(access_token: String, token_type: String, expires_in: u64) -> Self {
        Self {
            access_token,
            token_type,
            expires_in,
            obtained_at: Utc::now(),
        }
    }

    /// Short preview of the token safe to put in logs.
    #[must_use]
    pub fn preview(&self) -> String {
        token_preview(&self.access_token)
    }
}

/// Formats a raw token as a bearer `Authorization` value.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("{BEARER_SCHEME} {token}")
}

/// Get a preview of an access token (first 8 chars + ...).
#[must_use]
pub fn token_preview(token: &str) -> String {
    match token.char_indices().nth(8) {
        Some((idx, _)) if token.len() > 12 => format!("{}...", &token[..idx]),
        _ => token.to_string(),
    }
}

/// Static client id/secret pair used for the client-credentials grant.
///
/// `Debug` never prints either value.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// The client identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &"<redacted>")
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Authentication errors raised by the credential exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The authorization service refused the credentials.
    Rejected {
        /// HTTP status returned by the token endpoint.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The token endpoint answered 2xx with an unusable body.
    InvalidResponse {
        /// Error description.
        message: String,
    },
    /// The new token could not be written to the token store.
    Store {
        /// Error description.
        message: String,
    },
    /// Network error.
    Network {
        /// Error description.
        message: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { status, message } => {
                write!(f, "Token request rejected ({status}): {message}")
            }
            Self::InvalidResponse { message } => {
                write!(f, "Invalid token response: {message}")
            }
            Self::Store { message } => write!(f, "Failed to store token: {message}"),
            Self::Network { message } => write!(f, "Network error: {message}"),
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bearer_header() {
        let token = AccessToken::new("access123".to_string(), "Bearer".to_string(), 3600);
        assert_eq!(bearer_header(&token.access_token), "Bearer access123");
        assert_eq!(token.expires_in, 3600);
    }

    #[test]
    fn test_token_preview() {
        assert_eq!(token_preview("abcdefghijklmnop"), "abcdefgh...");
        assert_eq!(token_preview("short"), "short");
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = ClientCredentials::new("my-client", "my-secret");
        let printed = format!("{creds:?}");
        assert!(!printed.contains("my-client"));
        assert!(!printed.contains("my-secret"));
    }

    #[test]
    fn test_auth_error_display() {
        let err = AuthError::Rejected {
            status: 400,
            message: "invalid_client".to_string(),
        };
        assert_eq!(err.to_string(), "Token request rejected (400): invalid_client");
    }
}
