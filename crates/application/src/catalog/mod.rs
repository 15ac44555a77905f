//! Catalog service and its staleness cache.

mod cache;
mod service;

pub use cache::StaleCache;
pub use service::{CatalogConfig, CatalogService};
