//! Catalog reads built on the authenticated gateway.

use std::sync::Arc;
use std::time::Duration;

use encore_domain::catalog::{ArtistsResponse, TopTracksResponse};
use encore_domain::{AlbumPage, Artist, DomainError, ResponseSpec, Track, validate_market};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::StaleCache;
use crate::error::{CatalogError, CatalogResult};
use crate::gateway::AuthenticatedGateway;

/// Tunables for catalog reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Market code sent with top-track requests.
    pub market: String,
    /// Albums requested per page.
    pub albums_per_page: u32,
    /// How long artist and top-track results stay fresh.
    pub cache_ttl: Duration,
    /// Maximum cached entries per cache.
    pub cache_capacity: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            market: "BR".to_string(),
            albums_per_page: 20,
            cache_ttl: Duration::from_secs(20 * 60),
            cache_capacity: 256,
        }
    }
}

/// Typed catalog operations.
///
/// Artist rosters and top tracks are served from an in-memory cache for
/// `cache_ttl`; album pages always go to the network.
pub struct CatalogService {
    gateway: Arc<AuthenticatedGateway>,
    config: CatalogConfig,
    artists: StaleCache<Vec<Artist>>,
    top_tracks: StaleCache<Vec<Track>>,
}

impl CatalogService {
    /// Creates a service over `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<AuthenticatedGateway>, config: CatalogConfig) -> Self {
        let artists = StaleCache::new(config.cache_ttl, config.cache_capacity);
        let top_tracks = StaleCache::new(config.cache_ttl, config.cache_capacity);
        Self {
            gateway,
            config,
            artists,
            top_tracks,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetches several artists in one request.
    ///
    /// Ids are joined with commas and stripped of spaces. Unknown ids are
    /// skipped.
    ///
    /// # Errors
    /// Returns [`CatalogError::Invalid`] for an empty or malformed id list,
    /// otherwise any gateway or decode failure.
    #[instrument(skip(self, ids))]
    pub async fn artists<S: AsRef<str>>(&self, ids: &[S]) -> CatalogResult<Vec<Artist>> {
        let joined = join_ids(ids)?;

        if let Some(hit) = self.artists.get(&joined).await {
            debug!(ids = %joined, "artists served from cache");
            return Ok(hit);
        }

        let path = format!("/artists?ids={joined}");
        let response = self.gateway.get(&path).await?;
        let artists = decode::<ArtistsResponse>(&path, &response)?.into_artists();

        self.artists.insert(joined, artists.clone()).await;
        Ok(artists)
    }

    /// Fetches the roster and picks out `artist_id`.
    ///
    /// # Errors
    /// Same as [`CatalogService::artists`].
    pub async fn artist<S: AsRef<str>>(
        &self,
        roster_ids: &[S],
        artist_id: &str,
    ) -> CatalogResult<Option<Artist>> {
        let roster = self.artists(roster_ids).await?;
        Ok(Artist::find(&roster, artist_id).cloned())
    }

    /// Fetches one page (zero-based) of an artist's albums.
    ///
    /// # Errors
    /// Returns [`CatalogError::Invalid`] for a malformed id, otherwise any
    /// gateway or decode failure.
    #[instrument(skip(self))]
    pub async fn artist_albums(&self, artist_id: &str, page: u32) -> CatalogResult<AlbumPage> {
        let id = validate_id(artist_id)?;
        let limit = self.config.albums_per_page;
        let offset = page.saturating_mul(limit);

        let path =
            format!("/artists/{id}/albums?include_groups=album&limit={limit}&offset={offset}");
        let response = self.gateway.get(&path).await?;
        decode(&path, &response)
    }

    /// Fetches an artist's top tracks in the configured market.
    ///
    /// # Errors
    /// Returns [`CatalogError::Invalid`] for a malformed id or market,
    /// otherwise any gateway or decode failure.
    #[instrument(skip(self))]
    pub async fn top_tracks(&self, artist_id: &str) -> CatalogResult<Vec<Track>> {
        let id = validate_id(artist_id)?;
        let market = validate_market(&self.config.market)?;
        let key = format!("{id}:{market}");

        if let Some(hit) = self.top_tracks.get(&key).await {
            debug!(artist_id = %id, "top tracks served from cache");
            return Ok(hit);
        }

        let path = format!("/artists/{id}/top-tracks?market={market}");
        let response = self.gateway.get(&path).await?;
        let tracks = decode::<TopTracksResponse>(&path, &response)?.tracks;

        self.top_tracks.insert(key, tracks.clone()).await;
        Ok(tracks)
    }

    /// Forgets every cached result.
    pub fn invalidate(&self) {
        self.artists.clear();
        self.top_tracks.clear();
    }
}

/// Catalog ids are base-62; anything else would end up in the URL path.
fn validate_id(id: &str) -> Result<&str, DomainError> {
    let id = id.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::InvalidIdentifier(id.to_string()));
    }
    Ok(id)
}

fn join_ids<S: AsRef<str>>(ids: &[S]) -> Result<String, DomainError> {
    let cleaned = ids
        .iter()
        .map(|id| id.as_ref().replace(' ', ""))
        .filter(|id| !id.is_empty())
        .map(|id| validate_id(&id).map(str::to_string))
        .collect::<Result<Vec<_>, _>>()?;

    if cleaned.is_empty() {
        return Err(DomainError::InvalidIdentifier(
            "no artist ids given".to_string(),
        ));
    }
    Ok(cleaned.join(","))
}

fn decode<T: DeserializeOwned>(path: &str, response: &ResponseSpec) -> CatalogResult<T> {
    serde_json::from_slice(&response.body).map_err(|e| CatalogError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::auth::InMemoryTokenStore;
    use crate::error::GatewayError;
    use crate::ports::{CredentialExchange, HttpClient, HttpClientError};
    use async_trait::async_trait;
    use encore_domain::{AccessToken, AuthError, OutgoingRequest};
    use pretty_assertions::assert_eq;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    /// Serves canned bodies by URL suffix and records the URLs it saw.
    struct CannedHttpClient {
        routes: Vec<(&'static str, u16, &'static str)>,
        seen: Mutex<Vec<String>>,
    }

    impl CannedHttpClient {
        fn new(routes: Vec<(&'static str, u16, &'static str)>) -> Arc<Self> {
            Arc::new(Self {
                routes,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().expect("Lock poisoned").clone()
        }
    }

    impl HttpClient for CannedHttpClient {
        fn execute(
            &self,
            request: &OutgoingRequest,
        ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>>
        {
            self.seen
                .lock()
                .expect("Lock poisoned")
                .push(request.url.clone());
            let response = self
                .routes
                .iter()
                .find(|(suffix, _, _)| request.url.ends_with(suffix))
                .map_or_else(
                    || ResponseSpec::with_body(404, "not found"),
                    |(_, status, body)| ResponseSpec::with_body(*status, *body),
                );
            Box::pin(async move { Ok(response) })
        }
    }

    struct NoExchange;

    #[async_trait]
    impl CredentialExchange for NoExchange {
        async fn exchange(&self) -> Result<AccessToken, AuthError> {
            Err(AuthError::Network {
                message: "exchange not expected".to_string(),
            })
        }
    }

    fn service(http: Arc<CannedHttpClient>, config: CatalogConfig) -> CatalogService {
        let gateway = AuthenticatedGateway::new(
            "https://api.spotify.com/v1",
            http,
            Arc::new(InMemoryTokenStore::with_token("T")),
            Arc::new(NoExchange),
        );
        CatalogService::new(Arc::new(gateway), config)
    }

    const ARTISTS: &str = r#"{"artists":[
        {"id":"a1","name":"Alpha","popularity":50,"images":[],"followers":{"total":1}},
        null,
        {"id":"b2","name":"Beta","popularity":60,"images":[],"followers":{"total":2}}
    ]}"#;

    const TOP_TRACKS: &str = r#"{"tracks":[{
        "id":"t1","name":"Song","duration_ms":1000,"popularity":1,
        "album":{"name":"Record","images":[]},"artists":[],"external_urls":{}
    }]}"#;

    const ALBUMS: &str = r#"{"limit":20,"offset":40,"total":45,"previous":null,"next":null,"items":[]}"#;

    #[tokio::test]
    async fn test_artists_joins_ids_and_skips_nulls() {
        let http = CannedHttpClient::new(vec![("/artists?ids=a1,zz,b2", 200, ARTISTS)]);
        let svc = service(http.clone(), CatalogConfig::default());

        let artists = svc.artists(&["a1", " zz", "b 2"]).await.unwrap();

        assert_eq!(artists.len(), 2);
        assert_eq!(
            http.seen(),
            vec!["https://api.spotify.com/v1/artists?ids=a1,zz,b2".to_string()]
        );
    }

    #[tokio::test]
    async fn test_artists_are_cached_within_window() {
        let http = CannedHttpClient::new(vec![("/artists?ids=a1,b2", 200, ARTISTS)]);
        let svc = service(http.clone(), CatalogConfig::default());

        svc.artists(&["a1", "b2"]).await.unwrap();
        let again = svc.artists(&["a1", "b2"]).await.unwrap();

        assert_eq!(again.len(), 2);
        assert_eq!(http.seen().len(), 1);

        svc.invalidate();
        svc.artists(&["a1", "b2"]).await.unwrap();
        assert_eq!(http.seen().len(), 2);
    }

    #[tokio::test]
    async fn test_artist_lookup_in_roster() {
        let http = CannedHttpClient::new(vec![("/artists?ids=a1,b2", 200, ARTISTS)]);
        let svc = service(http, CatalogConfig::default());

        let beta = svc.artist(&["a1", "b2"], "b2").await.unwrap();
        assert_eq!(beta.map(|a| a.name), Some("Beta".to_string()));
    }

    #[tokio::test]
    async fn test_empty_id_list_is_rejected() {
        let http = CannedHttpClient::new(vec![]);
        let svc = service(http.clone(), CatalogConfig::default());

        let err = svc.artists::<&str>(&[]).await.unwrap_err();

        assert!(matches!(err, CatalogError::Invalid(_)));
        assert!(http.seen().is_empty());
    }

    #[tokio::test]
    async fn test_album_page_offset() {
        let http = CannedHttpClient::new(vec![(
            "/artists/a1/albums?include_groups=album&limit=20&offset=40",
            200,
            ALBUMS,
        )]);
        let svc = service(http, CatalogConfig::default());

        let page = svc.artist_albums("a1", 2).await.unwrap();

        assert_eq!(page.offset, 40);
        assert_eq!(page.total_pages(svc.config().albums_per_page), 3);
    }

    #[tokio::test]
    async fn test_path_injection_is_rejected() {
        let http = CannedHttpClient::new(vec![]);
        let svc = service(http.clone(), CatalogConfig::default());

        let err = svc.artist_albums("../me", 0).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Invalid(DomainError::InvalidIdentifier(_))
        ));
        assert!(http.seen().is_empty());
    }

    #[tokio::test]
    async fn test_market_cannot_extend_query() {
        let http = CannedHttpClient::new(vec![]);
        let config = CatalogConfig {
            market: "BR&limit=50".to_string(),
            ..CatalogConfig::default()
        };
        let svc = service(http.clone(), config);

        let err = svc.top_tracks("a1").await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Invalid(DomainError::InvalidMarket(_))
        ));
        assert!(http.seen().is_empty());
    }

    #[tokio::test]
    async fn test_top_tracks_use_market_and_cache() {
        let http = CannedHttpClient::new(vec![("/artists/a1/top-tracks?market=US", 200, TOP_TRACKS)]);
        let config = CatalogConfig {
            market: "US".to_string(),
            ..CatalogConfig::default()
        };
        let svc = service(http.clone(), config);

        let tracks = svc.top_tracks("a1").await.unwrap();
        svc.top_tracks("a1").await.unwrap();

        assert_eq!(tracks[0].name, "Song");
        assert_eq!(http.seen().len(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let http = CannedHttpClient::new(vec![("/artists/a1/top-tracks?market=BR", 500, "oops")]);
        let svc = service(http.clone(), CatalogConfig::default());

        for _ in 0..2 {
            let err = svc.top_tracks("a1").await.unwrap_err();
            assert!(matches!(
                err,
                CatalogError::Gateway(GatewayError::Http { status: 500, .. })
            ));
        }
        assert_eq!(http.seen().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let http = CannedHttpClient::new(vec![("/artists/a1/top-tracks?market=BR", 200, "{")]);
        let svc = service(http, CatalogConfig::default());

        let err = svc.top_tracks("a1").await.unwrap_err();

        match err {
            CatalogError::Decode { path, .. } => {
                assert_eq!(path, "/artists/a1/top-tracks?market=BR");
            }
            other => panic!("expected Decode, got {other:?}"),
        }
    }
}
