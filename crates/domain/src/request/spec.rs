//! Outgoing request model

use serde::{Deserialize, Serialize};

use super::HttpMethod;
use crate::auth::bearer_header;

/// Name of the authorization header.
pub const AUTHORIZATION: &str = "Authorization";

/// A single request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name as it will be sent
    pub name: String,
    /// Header value
    pub value: String,
}

/// A request on its way out of the client.
///
/// Headers compare case-insensitively. [`OutgoingRequest::set_header`]
/// replaces every existing header of the same name, so at most one
/// `Authorization` header is ever present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute URL including the query string
    pub url: String,
    headers: Vec<Header>,
    /// Optional body, sent verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl OutgoingRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a `GET` request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Creates a `POST` request.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Builder-style header setter.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    /// Builder-style body setter.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a header, replacing any existing header with the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|h| !h.name.eq_ignore_ascii_case(&name));
        self.headers.push(Header {
            name,
            value: value.into(),
        });
    }

    /// Sets `Authorization: Bearer <token>`.
    pub fn set_bearer(&mut self, token: &str) {
        self.set_header(AUTHORIZATION, bearer_header(token));
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Current `Authorization` header, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.header(AUTHORIZATION)
    }

    /// All headers in insertion order.
    pub fn headers(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_header_replaces_case_insensitively() {
        let mut request = OutgoingRequest::get("https://api.example.com/v1/artists")
            .with_header("authorization", "Bearer old");
        request.set_bearer("new");

        let auth: Vec<_> = request
            .headers()
            .filter(|h| h.name.eq_ignore_ascii_case(AUTHORIZATION))
            .collect();
        assert_eq!(auth.len(), 1);
        assert_eq!(request.authorization(), Some("Bearer new"));
    }

    #[test]
    fn test_new_request_has_no_authorization() {
        let request = OutgoingRequest::get("https://api.example.com/v1/artists");
        assert_eq!(request.authorization(), None);
        assert_eq!(request.method, HttpMethod::Get);
    }

    #[test]
    fn test_other_headers_survive_bearer() {
        let mut request = OutgoingRequest::post("https://auth.example.com/token")
            .with_header("Content-Type", "application/x-www-form-urlencoded")
            .with_body("grant_type=client_credentials");
        request.set_bearer("abc");

        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(request.body.as_deref(), Some("grant_type=client_credentials"));
    }
}
