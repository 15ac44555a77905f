//! Artist models

use serde::{Deserialize, Serialize};

/// Artwork at one resolution. The API omits dimensions for some images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL
    pub url: String,
    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,
    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,
}

/// Follower summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Followers {
    /// Total follower count
    pub total: u64,
}

/// A catalog artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Popularity from 0 to 100
    #[serde(default)]
    pub popularity: u8,
    /// Artwork, largest first
    #[serde(default)]
    pub images: Vec<Image>,
    /// Follower summary
    #[serde(default)]
    pub followers: Followers,
}

impl Artist {
    /// Finds an artist by id in an already fetched roster.
    #[must_use]
    pub fn find<'a>(roster: &'a [Self], id: &str) -> Option<&'a Self> {
        roster.iter().find(|artist| artist.id == id)
    }
}

/// Envelope for `GET /artists?ids=...`.
///
/// Unknown ids come back as `null` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistsResponse {
    /// One slot per requested id
    pub artists: Vec<Option<Artist>>,
}

impl ArtistsResponse {
    /// Drops the `null` slots.
    #[must_use]
    pub fn into_artists(self) -> Vec<Artist> {
        self.artists.into_iter().flatten().collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_artists_with_null_slot() {
        let json = r#"{
            "artists": [
                {
                    "id": "0TnOYISbd1XYRBk9myaseg",
                    "name": "Pitbull",
                    "popularity": 82,
                    "followers": { "href": null, "total": 10000 },
                    "images": [{ "url": "https://i.scdn.co/a.jpg", "height": 640, "width": 640 }],
                    "genres": ["dance pop"]
                },
                null
            ]
        }"#;

        let artists = serde_json::from_str::<ArtistsResponse>(json)
            .unwrap()
            .into_artists();

        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Pitbull");
        assert_eq!(artists[0].followers.total, 10000);
        assert_eq!(artists[0].images.first().map(|i| i.width), Some(Some(640)));
    }

    #[test]
    fn test_find_in_roster() {
        let roster = vec![Artist {
            id: "a1".to_string(),
            name: "First".to_string(),
            popularity: 10,
            images: vec![],
            followers: Followers::default(),
        }];

        assert_eq!(Artist::find(&roster, "a1").map(|a| a.name.as_str()), Some("First"));
        assert!(Artist::find(&roster, "missing").is_none());
    }
}
