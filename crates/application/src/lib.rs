//! Encore Application - Use cases and ports
//!
//! This crate holds the authenticated request gateway, the catalog
//! service built on it, and the ports the infrastructure layer implements.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod gateway;
pub mod ports;

pub use auth::InMemoryTokenStore;
pub use catalog::{CatalogConfig, CatalogService, StaleCache};
pub use error::{CatalogError, CatalogResult, GatewayError};
pub use gateway::{AuthenticatedGateway, PendingRequest};
pub use ports::{
    CredentialExchange, HttpClient, HttpClientError, TokenStore, TokenStoreError,
};
