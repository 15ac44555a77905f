//! Encore Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus settings loading.

pub mod adapters;
pub mod auth;
pub mod config;
pub mod persistence;

pub use adapters::ReqwestHttpClient;
pub use auth::ClientCredentialsExchange;
pub use crate::config::{Settings, SettingsError};
pub use persistence::FileTokenStore;
