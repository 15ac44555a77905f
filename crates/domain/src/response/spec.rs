//! Received response model
//!
//! Contains types for representing HTTP responses including
//! status codes, headers, body, and timing information.

use std::collections::HashMap;
use std::time::Duration;

/// Status the catalog and token endpoints use for a missing or stale token.
pub const UNAUTHORIZED: u16 = 401;

/// HTTP response received from the transport.
///
/// Every status lands here, success or not. Deciding what an error
/// status means is the gateway's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Raw response body.
    pub body: Vec<u8>,
    /// Response time.
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    #[must_use]
    pub const fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            duration,
        }
    }

    /// Shorthand for a response with only a status and body.
    #[must_use]
    pub fn with_body(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, HashMap::new(), body.into(), Duration::ZERO)
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true for 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status == UNAUTHORIZED
    }

    /// Returns the body as a lossy UTF-8 string.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_helpers() {
        assert!(ResponseSpec::with_body(204, "").is_success());
        assert!(ResponseSpec::with_body(401, "").is_unauthorized());
        assert!(!ResponseSpec::with_body(500, "").is_success());
    }

    #[test]
    fn test_body_text_is_lossy() {
        let response = ResponseSpec::new(
            200,
            HashMap::new(),
            vec![b'o', b'k', 0xFF],
            Duration::from_millis(5),
        );

        assert_eq!(response.body_text(), "ok\u{FFFD}");
    }
}
