//! Resources needed to list the folders of an organization one page at a time

use super::Folder;
use crate::error::Error;
use crate::pagination::paginate;
use crate::prelude::Command;
use crate::token::END_OF_DATA;
use crate::Client;
use std::collections::HashSet;
use uuid::Uuid;

/// Request for one page of the folders of an organization
///
/// Executing this command will return a [`PaginatedFetchFolderResponse`] on success.
///
/// ```
/// use folders::folder::page::PaginatedFetchFolderRequest;
/// use folders::prelude::Command;
/// use folders::store::MemoryStore;
/// use folders::ClientBuilder;
///
/// # tokio_test::block_on(async {
/// let client = ClientBuilder::default()
///     .with_store(MemoryStore::default())
///     .build()
///     .unwrap();
/// let mut req = PaginatedFetchFolderRequest::new(uuid::Uuid::nil()).with_limit(20);
/// loop {
///     let res = req.clone().execute(&client).await.unwrap();
///     println!("{} folders", res.folders.len());
///     if res.is_last() {
///         break;
///     }
///     req.set_token(res.token);
/// }
/// # })
/// ```
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct PaginatedFetchFolderRequest {
    pub org_id: Uuid,
    /// Token returned by the previous page, empty to start from the beginning
    #[serde(default)]
    pub token: String,
    /// Page size, the client default is used when not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl PaginatedFetchFolderRequest {
    pub fn new(org_id: Uuid) -> Self {
        Self {
            org_id,
            token: String::new(),
            limit: None,
        }
    }

    pub fn set_token<T: Into<String>>(&mut self, value: T) {
        self.token = value.into();
    }

    pub fn with_token<T: Into<String>>(mut self, value: T) -> Self {
        self.set_token(value);
        self
    }

    pub fn set_limit(&mut self, value: i64) {
        self.limit = Some(value);
    }

    pub fn with_limit(mut self, value: i64) -> Self {
        self.set_limit(value);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct PaginatedFetchFolderResponse {
    pub folders: Vec<Folder>,
    /// Token to request the next page, [`END_OF_DATA`] once exhausted
    pub token: String,
}

impl PaginatedFetchFolderResponse {
    pub fn is_last(&self) -> bool {
        self.token == END_OF_DATA
    }
}

#[async_trait::async_trait]
impl Command for PaginatedFetchFolderRequest {
    type Output = PaginatedFetchFolderResponse;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error> {
        let limit = self.limit.unwrap_or(client.page_limit);
        let snapshot = client.store.fetch_by_org(self.org_id).await?;
        tracing::debug!("fetched {} folders", snapshot.len());
        let page = paginate(&snapshot, &self.token, limit, client.stale_cursor)?;
        Ok(PaginatedFetchFolderResponse {
            token: page.token(),
            folders: page.folders,
        })
    }
}

impl Client {
    /// Fetch one page of the folders of an organization
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidToken`] or [`Error::InvalidLimit`] on invalid input, and with
    /// [`Error::Store`] when the store can't return the folders.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_folders_page(
        &self,
        req: PaginatedFetchFolderRequest,
    ) -> Result<PaginatedFetchFolderResponse, Error> {
        req.execute(self).await
    }

    /// Follow the continuation tokens from the first page until the end of the listing
    ///
    /// Every page is a separate call to the store. When the store keeps changing and the
    /// pagination restarts on a token it already followed, this fails with
    /// [`Error::CursorLoop`] instead of looping forever.
    #[tracing::instrument(skip(self))]
    pub async fn walk_folders(
        &self,
        org_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<Folder>, Error> {
        let mut result = Vec::new();
        let mut visited = HashSet::new();
        let mut req = PaginatedFetchFolderRequest::new(org_id);
        req.limit = limit;
        loop {
            let page = req.clone().execute(self).await?;
            result.extend(page.folders);
            if page.token == END_OF_DATA {
                return Ok(result);
            }
            if !visited.insert(page.token.clone()) {
                return Err(Error::CursorLoop(page.token));
            }
            req.set_token(page.token);
        }
    }
}
