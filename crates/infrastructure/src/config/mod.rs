//! Settings loading.

mod settings;

pub use settings::{
    DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL, Settings, SettingsError, default_token_path,
};
