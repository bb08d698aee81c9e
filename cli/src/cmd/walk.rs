use super::format::ListFormatter;
use folders::Client;
use std::io::Write;
use uuid::Uuid;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Organization owning the folders
    #[clap(long)]
    org: Uuid,

    /// Number of folders per page, default to the configured one
    #[clap(long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Print the folders as JSON
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
        tracing::info!("walking through folders of {}", self.org);
        let folders = client.walk_folders(self.org, self.limit).await?;
        ListFormatter { json: self.json }.write(output, &folders, &folders, None)
    }
}
