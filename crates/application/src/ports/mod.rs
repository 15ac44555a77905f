//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod credential_exchange;
mod http_client;
mod token_store;

pub use credential_exchange::CredentialExchange;
pub use http_client::{HttpClient, HttpClientError};
pub use token_store::{TokenStore, TokenStoreError};
