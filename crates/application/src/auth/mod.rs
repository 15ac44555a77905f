//! Authentication support for the catalog client.
//!
//! This module provides:
//! - An in-memory implementation of the [`TokenStore`](crate::ports::TokenStore) port

mod token_store;

pub use token_store::InMemoryTokenStore;
