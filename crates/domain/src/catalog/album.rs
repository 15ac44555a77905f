//! Album models

use serde::{Deserialize, Serialize};

use super::Image;

/// An album in an artist's discography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Catalog id
    pub id: String,
    /// Album title
    pub name: String,
    /// "album", "single" or "compilation"
    pub album_type: String,
    /// Release date with the precision the catalog has (year, month or day)
    pub release_date: String,
    /// Number of tracks
    #[serde(default)]
    pub total_tracks: u32,
    /// Artwork, largest first
    #[serde(default)]
    pub images: Vec<Image>,
    /// Catalog URI
    #[serde(default)]
    pub uri: String,
    /// Object type, always "album"
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// One page of `GET /artists/{id}/albums`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumPage {
    /// Page size the server applied
    pub limit: u32,
    /// Offset of the first item
    pub offset: u32,
    /// Total albums across all pages
    pub total: u32,
    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
    /// URL of the next page
    #[serde(default)]
    pub next: Option<String>,
    /// Albums on this page
    pub items: Vec<Album>,
}

impl AlbumPage {
    /// Number of pages needed to show `total` albums at `per_page` each.
    ///
    /// Returns 0 when `per_page` is 0.
    #[must_use]
    pub const fn total_pages(&self, per_page: u32) -> u32 {
        if per_page == 0 {
            0
        } else {
            self.total.div_ceil(per_page)
        }
    }

    /// Returns true if there is a page after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(total: u32) -> AlbumPage {
        AlbumPage {
            limit: 20,
            offset: 0,
            total,
            previous: None,
            next: None,
            items: vec![],
        }
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(page(0).total_pages(20), 0);
        assert_eq!(page(20).total_pages(20), 1);
        assert_eq!(page(21).total_pages(20), 2);
        assert_eq!(page(5).total_pages(0), 0);
    }

    #[test]
    fn test_decode_album_page() {
        let json = r#"{
            "href": "https://api.spotify.com/v1/artists/x/albums?offset=0&limit=20",
            "limit": 20,
            "next": "https://api.spotify.com/v1/artists/x/albums?offset=20&limit=20",
            "offset": 0,
            "previous": null,
            "total": 42,
            "items": [{
                "album_type": "album",
                "id": "4aawyAB9vmqN3uQ7FjRGTy",
                "images": [],
                "name": "Global Warming",
                "release_date": "2012-11-16",
                "total_tracks": 18,
                "type": "album",
                "uri": "spotify:album:4aawyAB9vmqN3uQ7FjRGTy"
            }]
        }"#;

        let page: AlbumPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items[0].kind, "album");
        assert_eq!(page.items[0].total_tracks, 18);
        assert!(page.has_next());
        assert_eq!(page.total_pages(20), 3);
    }
}
