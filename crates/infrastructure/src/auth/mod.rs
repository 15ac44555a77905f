//! Authentication adapters.

mod client_credentials;

pub use client_credentials::ClientCredentialsExchange;
