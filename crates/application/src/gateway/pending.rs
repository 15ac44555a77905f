//! Per-request retry marker

use encore_domain::OutgoingRequest;

/// A request travelling through the gateway together with its retry marker.
///
/// The marker belongs to this one logical request. Two requests built from
/// the same template never share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// The request as it will be sent next.
    pub request: OutgoingRequest,
    retried: bool,
}

impl PendingRequest {
    /// Wraps a fresh request.
    #[must_use]
    pub const fn new(request: OutgoingRequest) -> Self {
        Self {
            request,
            retried: false,
        }
    }

    /// Whether the request has already been resent after a refresh.
    #[must_use]
    pub const fn retried(&self) -> bool {
        self.retried
    }

    /// Marks the request as resent.
    pub const fn mark_retried(&mut self) {
        self.retried = true;
    }
}
