use crate::error::Error;
use crate::Client;

pub use crate::store::FolderStore;

/// A request that can be executed against a [`Client`]
#[async_trait::async_trait]
pub trait Command {
    type Output;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error>;
}
