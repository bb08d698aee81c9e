use folders::Client;
use std::io::Write;

mod format;
mod list;
mod page;
mod walk;

#[derive(clap::Subcommand)]
pub(crate) enum Command {
    /// List all the folders of an organization
    List(list::Command),
    /// Fetch one page of the folders of an organization
    Page(page::Command),
    /// Follow the pages until the end of the listing
    Walk(walk::Command),
}

impl Command {
    pub(crate) async fn execute<W: Write>(
        &self,
        client: &Client,
        output: &mut W,
    ) -> anyhow::Result<()> {
        match self {
            Self::List(inner) => inner.execute(client, output).await,
            Self::Page(inner) => inner.execute(client, output).await,
            Self::Walk(inner) => inner.execute(client, output).await,
        }
    }
}
