//! Sources of folders, queried once per call with the organization identifier

use crate::folder::Folder;
use uuid::Uuid;

/// Errors raised by a [`FolderStore`], surfaced as is by the [`Client`](crate::Client)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unable to read folder source")]
    Io(#[from] std::io::Error),
    #[error("unable to parse folder source")]
    Json(#[from] serde_json::Error),
    #[error("folder store unavailable: {0}")]
    Unavailable(String),
}

/// Returns all the folders of an organization
///
/// Implementations must return the folders in the same order on every call as long as the
/// underlying data doesn't change, pagination relies on it.
#[async_trait::async_trait]
pub trait FolderStore: std::fmt::Debug + Send + Sync {
    async fn fetch_by_org(&self, org_id: Uuid) -> Result<Vec<Folder>, StoreError>;
}

/// Folders kept in memory, in insertion order
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    folders: Vec<Folder>,
}

impl MemoryStore {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// Loads the folders from a JSON array
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, StoreError> {
        let folders = serde_json::from_reader(reader)?;
        Ok(Self { folders })
    }

    pub fn push(&mut self, folder: Folder) {
        self.folders.push(folder);
    }

    pub fn with_folder(mut self, folder: Folder) -> Self {
        self.push(folder);
        self
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

impl FromIterator<Folder> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = Folder>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn filter_by_org(folders: impl IntoIterator<Item = Folder>, org_id: Uuid) -> Vec<Folder> {
    folders
        .into_iter()
        .filter(|folder| folder.org_id == org_id)
        .collect()
}

#[async_trait::async_trait]
impl FolderStore for MemoryStore {
    async fn fetch_by_org(&self, org_id: Uuid) -> Result<Vec<Folder>, StoreError> {
        Ok(filter_by_org(self.folders.iter().cloned(), org_id))
    }
}

#[cfg(feature = "store-json")]
pub use self::json::JsonFileStore;

#[cfg(feature = "store-json")]
mod json {
    use super::{FolderStore, MemoryStore, StoreError};
    use crate::folder::Folder;
    use std::path::{Path, PathBuf};
    use uuid::Uuid;

    /// Folders read from a JSON file containing an array of folders
    ///
    /// The file is read again on every fetch, so changes on disk are picked up by the next call.
    #[derive(Clone, Debug)]
    pub struct JsonFileStore {
        path: PathBuf,
    }

    impl JsonFileStore {
        pub fn new<P: Into<PathBuf>>(path: P) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    #[async_trait::async_trait]
    impl FolderStore for JsonFileStore {
        #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
        async fn fetch_by_org(&self, org_id: Uuid) -> Result<Vec<Folder>, StoreError> {
            let content = tokio::fs::read(&self.path).await?;
            let store = MemoryStore::from_reader(content.as_slice())?;
            tracing::debug!("loaded {} folders", store.len());
            store.fetch_by_org(org_id).await
        }
    }
}
