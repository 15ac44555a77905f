//! File-based token store.
//!
//! The token lives in a small JSON document:
//! ```json
//! {
//!   "access_token": "BQD...x9"
//! }
//! ```
//! Every `get` reads the file, so a token written by an earlier run (or by
//! a concurrent request in this one) is always what the next request sees.
//! Each `set` writes its own temporary file next to the target and renames
//! it into place, so overlapping writers never share a staging file.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use encore_application::ports::{TokenStore, TokenStoreError};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct TokenDocument {
    access_token: String,
}

/// Token store persisted to a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the token file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(TokenStoreError::Io(e)),
        };

        let document: TokenDocument = serde_json::from_slice(&content)
            .map_err(|e| TokenStoreError::Serialization(e.to_string()))?;

        Ok(Some(document.access_token))
    }

    async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).await?;

        let document = TokenDocument {
            access_token: token.to_string(),
        };
        let mut content = serde_json::to_vec_pretty(&document)
            .map_err(|e| TokenStoreError::Serialization(e.to_string()))?;
        content.push(b'\n');

        let target = self.path.clone();
        tokio::task::spawn_blocking(move || persist(&parent, &target, &content))
            .await
            .map_err(std::io::Error::other)??;

        debug!(path = %self.path.display(), "token persisted");
        Ok(())
    }
}

/// Writes `content` to a fresh temp file in `dir` and renames it over
/// `target`. The temp file is removed if anything fails before the rename.
fn persist(dir: &Path, target: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut staging = tempfile::NamedTempFile::new_in(dir)?;
    staging.write_all(content)?;
    staging.as_file().sync_all()?;
    staging.persist(target).map_err(|e| e.error)?;
    Ok(())
}
