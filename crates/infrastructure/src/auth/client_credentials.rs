//! `OAuth2` client-credentials exchange.
//!
//! Trades the static client id/secret pair for an access token and writes
//! the token to the injected store before handing it back.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use encore_application::ports::{CredentialExchange, TokenStore};
use encore_domain::{AccessToken, AuthError, ClientCredentials};
use serde::Deserialize;
use tracing::{info, instrument, warn};

/// Content-Type for form-urlencoded data.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// `OAuth2` token response from token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    #[serde(default)]
    expires_in: u64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// `OAuth2` error response.
#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Client-credentials grant against a fixed token endpoint.
pub struct ClientCredentialsExchange {
    http_client: reqwest::Client,
    token_url: String,
    credentials: ClientCredentials,
    tokens: Arc<dyn TokenStore>,
}

impl ClientCredentialsExchange {
    /// Creates an exchange that posts through `http_client`.
    #[must_use]
    pub fn with_client(
        http_client: reqwest::Client,
        token_url: impl Into<String>,
        credentials: ClientCredentials,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            http_client,
            token_url: token_url.into(),
            credentials,
            tokens,
        }
    }

    /// Token endpoint this exchange posts to.
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// `Basic base64(client_id:client_secret)`.
    fn basic_authorization(credentials: &ClientCredentials) -> String {
        let pair = format!(
            "{}:{}",
            credentials.client_id(),
            credentials.client_secret()
        );
        let encoded = base64::engine::general_purpose::STANDARD.encode(pair.as_bytes());
        format!("Basic {encoded}")
    }

    /// Posts the grant and decodes the token. Does not touch the store.
    async fn request_token(&self) -> Result<AccessToken, AuthError> {
        let body = serde_urlencoded::to_string([("grant_type", "client_credentials")]).map_err(
            |e| AuthError::Network {
                message: format!("Failed to encode form: {e}"),
            },
        )?;

        let response = self
            .http_client
            .post(&self.token_url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .header("Authorization", Self::basic_authorization(&self.credentials))
            .body(body)
            .send()
            .await
            .map_err(|e: reqwest::Error| AuthError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TokenErrorResponse>(&error_text).map_or_else(
                |_| format!("Token request failed: {error_text}"),
                |err| err.error_description.unwrap_or(err.error),
            );
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let token_response: TokenResponse =
            response
                .json()
                .await
                .map_err(|e: reqwest::Error| AuthError::InvalidResponse {
                    message: format!("Failed to parse token response: {e}"),
                })?;

        if token_response.access_token.is_empty() {
            return Err(AuthError::InvalidResponse {
                message: "Token response carried an empty access_token".to_string(),
            });
        }

        Ok(AccessToken::new(
            token_response.access_token,
            token_response.token_type,
            token_response.expires_in,
        ))
    }
}

impl std::fmt::Debug for ClientCredentialsExchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentialsExchange")
            .field("token_url", &self.token_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CredentialExchange for ClientCredentialsExchange {
    #[instrument(skip(self), fields(token_url = %self.token_url))]
    async fn exchange(&self) -> Result<AccessToken, AuthError> {
        let token = self.request_token().await.inspect_err(|e| {
            warn!(error = %e, "client credentials exchange failed");
        })?;

        self.tokens
            .set(&token.access_token)
            .await
            .map_err(|e| AuthError::Store {
                message: e.to_string(),
            })?;

        info!(
            token = %token.preview(),
            expires_in = token.expires_in,
            "obtained new access token"
        );
        Ok(token)
    }
}
