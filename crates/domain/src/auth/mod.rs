//! Authentication domain types

mod types;

pub use types::{
    AccessToken, AuthError, BEARER_SCHEME, ClientCredentials, bearer_header, token_preview,
};
