//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It carries every response back to the gateway regardless of status.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use encore_application::ports::{HttpClient, HttpClientError};
use encore_domain::{HttpMethod, OutgoingRequest, ResponseSpec};
use reqwest::{Client, Method, Url};
use tracing::debug;

const USER_AGENT: &str = concat!("Encore/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    timeout: Duration,
}

impl ReqwestHttpClient {
    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(timeout: Duration) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// The underlying reqwest client, shared with the credential exchange.
    #[must_use]
    pub const fn inner(&self) -> &Client {
        &self.client
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }

    fn host_of(error: &reqwest::Error) -> String {
        error
            .url()
            .and_then(Url::host_str)
            .unwrap_or("unknown")
            .to_string()
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    pub(crate) fn map_error(error: &reqwest::Error, timeout: Duration) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            };
        }

        if error.is_connect() {
            let message = error.to_string();
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError {
                    host: Self::host_of(error),
                    message,
                };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: Self::host_of(error),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(443),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &OutgoingRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>> {
        let method = request.method;
        let url = request.url.clone();
        let headers: Vec<_> = request
            .headers()
            .map(|h| (h.name.clone(), h.value.clone()))
            .collect();
        let body = request.body.clone();

        Box::pin(async move {
            let parsed_url =
                Url::parse(&url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))?;

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), parsed_url);
            for (name, value) in &headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, self.timeout))?;

            let status = response.status().as_u16();
            let response_headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("Failed to read body: {e}")))?
                .to_vec();

            let duration = start.elapsed();
            debug!(%method, %url, status, ?duration, "response received");

            Ok(ResponseSpec::new(
                status,
                response_headers,
                body_bytes,
                duration,
            ))
        })
    }
}
