//! Authenticated request gateway and its retry marker.

mod client;
mod pending;

pub use client::AuthenticatedGateway;
pub use pending::PendingRequest;
