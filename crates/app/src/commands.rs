//! Subcommands and the wiring behind them.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use encore_application::ports::CredentialExchange;
use encore_application::{AuthenticatedGateway, CatalogService};
use encore_domain::{Pager, filter_by_name};
use encore_infrastructure::{
    ClientCredentialsExchange, FileTokenStore, ReqwestHttpClient, Settings,
};
use tracing::info;

use crate::render;

#[derive(Subcommand)]
pub enum Commands {
    /// Show artists by catalog id
    Artists {
        /// Artist ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// List one page of an artist's albums
    Albums {
        /// Artist id
        artist_id: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Only show albums whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// List an artist's top tracks
    TopTracks {
        /// Artist id
        artist_id: String,

        /// Only show tracks whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Exchange the client credentials for a fresh access token
    Token,
}

/// Everything a command needs, built from settings.
struct Stack {
    catalog: CatalogService,
    exchange: Arc<ClientCredentialsExchange>,
    settings: Settings,
}

impl Stack {
    fn build(config: Option<&Path>) -> Result<Self> {
        let settings = Settings::load(config).context("Failed to load settings")?;
        info!(
            api = %settings.api_base_url,
            token_path = %settings.token_path.display(),
            "settings loaded"
        );

        let http = Arc::new(
            ReqwestHttpClient::new(settings.request_timeout)
                .context("Failed to create HTTP client")?,
        );
        let tokens = Arc::new(FileTokenStore::new(settings.token_path.clone()));
        let exchange = Arc::new(ClientCredentialsExchange::with_client(
            http.inner().clone(),
            settings.token_url.clone(),
            settings.credentials().clone(),
            tokens.clone(),
        ));
        let gateway = Arc::new(AuthenticatedGateway::new(
            settings.api_base_url.clone(),
            http,
            tokens,
            exchange.clone(),
        ));
        let catalog = CatalogService::new(gateway, settings.catalog_config());

        Ok(Self {
            catalog,
            exchange,
            settings,
        })
    }
}

impl Commands {
    pub async fn execute(self, config: Option<&Path>) -> Result<()> {
        let stack = Stack::build(config)?;

        match self {
            Self::Artists { ids } => {
                let artists = stack.catalog.artists(ids.as_slice()).await?;
                if artists.is_empty() {
                    println!("No artists found");
                }
                for artist in &artists {
                    println!("{}", render::artist_line(artist));
                }
            }
            Self::Albums {
                artist_id,
                page,
                filter,
            } => {
                let mut pager = Pager::new(stack.settings.albums_per_page)?.at(page - 1);
                let listing = stack
                    .catalog
                    .artist_albums(&artist_id, pager.page())
                    .await?;
                pager.set_total(listing.total);

                let query = filter.unwrap_or_default();
                for album in filter_by_name(&listing.items, &query) {
                    println!("{}", render::album_line(album));
                }
                println!("{}", render::page_footer(&pager, listing.total));
            }
            Self::TopTracks { artist_id, filter } => {
                let tracks = stack.catalog.top_tracks(&artist_id).await?;
                let query = filter.unwrap_or_default();
                for (rank, track) in filter_by_name(&tracks, &query).into_iter().enumerate() {
                    println!("{}", render::track_line(rank + 1, track));
                }
            }
            Self::Token => {
                let token = stack
                    .exchange
                    .exchange()
                    .await
                    .context("Credential exchange failed")?;
                println!(
                    "Stored new token {} (expires in {}s) at {}",
                    token.preview(),
                    token.expires_in,
                    stack.settings.token_path.display()
                );
            }
        }

        Ok(())
    }
}
