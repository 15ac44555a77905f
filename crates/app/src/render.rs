//! Plain-text output lines.

use encore_domain::{Album, Artist, Pager, Track};

pub fn artist_line(artist: &Artist) -> String {
    format!(
        "{:<24} {}  (popularity {}, {} followers)",
        artist.id, artist.name, artist.popularity, artist.followers.total
    )
}

pub fn album_line(album: &Album) -> String {
    format!(
        "{:<10} {}  [{} tracks]",
        album.release_date, album.name, album.total_tracks
    )
}

pub fn track_line(rank: usize, track: &Track) -> String {
    format!(
        "{rank:>2}. {} - {}  {}",
        track.name,
        track.artist_names(),
        track.duration_label()
    )
}

pub fn page_footer(pager: &Pager, total_items: u32) -> String {
    match pager.total_pages() {
        Some(0) | None => "No albums".to_string(),
        Some(pages) if pager.page() >= pages => {
            format!("Page {} is past the last page ({pages})", pager.page() + 1)
        }
        Some(pages) => format!(
            "Page {} of {pages} ({total_items} albums)",
            pager.page() + 1
        ),
    }
}
