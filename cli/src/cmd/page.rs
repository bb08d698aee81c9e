use super::format::ListFormatter;
use folders::folder::page::PaginatedFetchFolderRequest;
use folders::Client;
use std::io::Write;
use uuid::Uuid;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Organization owning the folders
    #[clap(long)]
    org: Uuid,

    /// Token returned by the previous page
    #[clap(long, default_value = "")]
    token: String,

    /// Number of folders per page, default to the configured one
    #[clap(long, allow_negative_numbers = true)]
    limit: Option<i64>,

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
        tracing::info!("fetching a page of folders of {}", self.org);
        let mut req = PaginatedFetchFolderRequest::new(self.org).with_token(self.token.as_str());
        req.limit = self.limit;
        let res = client.fetch_folders_page(req).await?;
        ListFormatter { json: self.json }.write(output, &res, &res.folders, Some(&res.token))
    }
}
