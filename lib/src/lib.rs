//! Folder listing over a per-organization folder store, with opaque cursor pagination.
//!
//! The [`Client`] fetches a fresh snapshot from its [`FolderStore`](crate::store::FolderStore)
//! on every call and slices it with the [pagination engine](crate::pagination). All the state
//! needed to resume a listing lives in the continuation token handed back to the caller.
//!
//! ```
//! use folders::folder::page::PaginatedFetchFolderRequest;
//! use folders::store::MemoryStore;
//! use folders::ClientBuilder;
//!
//! # tokio_test::block_on(async {
//! let client = ClientBuilder::default()
//!     .with_store(MemoryStore::default())
//!     .build()
//!     .expect("unable to build client");
//! let req = PaginatedFetchFolderRequest::new(uuid::Uuid::nil()).with_limit(5);
//! let res = client.fetch_folders_page(req).await.unwrap();
//! assert!(res.folders.is_empty());
//! assert_eq!(res.token, folders::token::END_OF_DATA);
//! # })
//! ```

use std::sync::Arc;

pub mod builder;
pub mod error;
pub mod folder;
pub mod pagination;
pub mod prelude;
pub mod store;
pub mod token;

pub use builder::ClientBuilder;
pub use error::Error;
pub use folder::Folder;
pub use pagination::StaleCursorPolicy;

/// Entry point to list the folders of an organization
///
/// Cloning a client is cheap, the store is shared behind an [`Arc`].
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) store: Arc<dyn store::FolderStore>,
    pub(crate) page_limit: i64,
    pub(crate) stale_cursor: StaleCursorPolicy,
}

impl Client {
    /// Page size used when a request doesn't specify one.
    pub fn page_limit(&self) -> i64 {
        self.page_limit
    }

    pub fn stale_cursor(&self) -> StaleCursorPolicy {
        self.stale_cursor
    }
}
