//! Encore Domain - Core business types
//!
//! This crate defines the domain model for the Encore catalog client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod request;
pub mod response;

pub use auth::{AccessToken, AuthError, ClientCredentials, bearer_header, token_preview};
pub use catalog::{
    Album, AlbumPage, Artist, Followers, Image, Named, Pager, Track, filter_by_name,
    validate_market,
};
pub use error::{DomainError, DomainResult};
pub use request::{AUTHORIZATION, HttpMethod, OutgoingRequest};
pub use response::{ResponseSpec, UNAUTHORIZED};
