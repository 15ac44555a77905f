//! Catalog models and the small helpers the views build on
//!
//! The models mirror the JSON the catalog API returns. Fields the client
//! never reads are left out; unknown fields are ignored on decode.

mod album;
mod artist;
mod filter;
mod market;
mod pager;
mod track;

pub use album::{Album, AlbumPage};
pub use artist::{Artist, ArtistsResponse, Followers, Image};
pub use filter::{Named, filter_by_name};
pub use market::validate_market;
pub use pager::Pager;
pub use track::{ExternalUrls, TopTracksResponse, Track, TrackAlbum, TrackArtist};
