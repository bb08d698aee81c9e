//! Resources needed to list all the folders of an organization

use super::Folder;
use crate::error::Error;
use crate::prelude::Command;
use crate::Client;
use uuid::Uuid;

/// Request to list every folder of an organization, without pagination
///
/// Executing this command will return a [`FetchFolderResponse`] on success.
///
/// ```
/// use folders::folder::list::FetchFolderRequest;
/// use folders::prelude::Command;
/// use folders::store::MemoryStore;
/// use folders::{ClientBuilder, Folder};
///
/// # tokio_test::block_on(async {
/// let org_id = uuid::Uuid::nil();
/// let store = MemoryStore::default().with_folder(Folder::new(uuid::Uuid::nil(), "root", org_id));
/// let client = ClientBuilder::default().with_store(store).build().unwrap();
/// match FetchFolderRequest::new(org_id).execute(&client).await {
///   Ok(res) => println!("found {} folders", res.folders.len()),
///   Err(err) => eprintln!("error: {:?}", err),
/// }
/// # })
/// ```
#[derive(Clone, Copy, Debug, serde::Deserialize, serde::Serialize)]
pub struct FetchFolderRequest {
    pub org_id: Uuid,
}

impl FetchFolderRequest {
    pub fn new(org_id: Uuid) -> Self {
        Self { org_id }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct FetchFolderResponse {
    pub folders: Vec<Folder>,
}

#[async_trait::async_trait]
impl Command for FetchFolderRequest {
    type Output = FetchFolderResponse;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error> {
        let folders = client.store.fetch_by_org(self.org_id).await?;
        tracing::debug!("fetched {} folders", folders.len());
        Ok(FetchFolderResponse { folders })
    }
}

impl Client {
    /// List all the folders of an organization, in the store order
    #[tracing::instrument(skip(self))]
    pub async fn fetch_all_folders(
        &self,
        req: FetchFolderRequest,
    ) -> Result<FetchFolderResponse, Error> {
        req.execute(self).await
    }
}
