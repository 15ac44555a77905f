//! Track models

use serde::{Deserialize, Serialize};

use super::Image;

/// Album a track belongs to, as embedded in track objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackAlbum {
    /// Album title
    pub name: String,
    /// Artwork
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Artist reference embedded in track objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackArtist {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
}

/// Links out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    /// Public web player URL
    #[serde(default)]
    pub spotify: Option<String>,
}

/// A track from an artist's top tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Catalog id
    pub id: String,
    /// Track title
    pub name: String,
    /// Length in milliseconds
    pub duration_ms: u64,
    /// Popularity from 0 to 100
    #[serde(default)]
    pub popularity: u8,
    /// Album the track appears on
    pub album: TrackAlbum,
    /// Credited artists
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    /// Links out of the catalog
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

impl Track {
    /// Formats the duration as `m:ss`, rounding to the nearest second.
    #[must_use]
    pub fn duration_label(&self) -> String {
        let total_secs = (self.duration_ms + 500) / 1000;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }

    /// Credited artist names joined with ", ".
    #[must_use]
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Envelope for `GET /artists/{id}/top-tracks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopTracksResponse {
    /// Tracks ordered by popularity
    pub tracks: Vec<Track>,
}
