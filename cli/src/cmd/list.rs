use super::format::ListFormatter;
use folders::folder::list::FetchFolderRequest;
use folders::Client;
use std::io::Write;
use uuid::Uuid;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Organization owning the folders
    #[clap(long)]
    org: Uuid,

    /// Print the response as JSON
    #[clap(long, default_value = "false")]
    json: bool,
}

impl Command {
    #[tracing::instrument(skip_all, level = "info")]
    pub(crate) async fn execute<W: Write>(
        &self,
        client: &Client,
        output: &mut W,
    ) -> anyhow::Result<()> {
        tracing::info!("listing folders of {}", self.org);
        let res = client
            .fetch_all_folders(FetchFolderRequest::new(self.org))
            .await?;
        ListFormatter { json: self.json }.write(output, &res, &res.folders, None)
    }
}
