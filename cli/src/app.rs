use crate::config::Config;
use clap::Parser;
use folders::Client;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(about, author, version)]
pub struct Command {
    /// Path to load the configuration file. Default to ~/.config/folders.json. If not found, loading from environment.
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// JSON file containing the folders, overrides the configuration file.
    #[clap(short, long)]
    source: Option<PathBuf>,
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    subcmd: crate::cmd::Command,
}

impl Command {
    fn config_path(&self) -> PathBuf {
        if let Some(ref cfg) = self.config {
            cfg.clone()
        } else if let Some(cfg_dir) = dirs::config_dir() {
            cfg_dir.join("folders.json")
        } else {
            PathBuf::from(".folders.json")
        }
    }

    /// Loads the configuration file, an explicit path has to exist.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let path = self.config_path();
        if self.config.is_none() && !path.exists() {
            tracing::debug!("no configuration file at {}", path.display());
            return Ok(Config::default());
        }
        Config::from_path(&path)
    }

    pub fn build_client(&self, config: Config) -> anyhow::Result<Client> {
        config.build(self.source.clone())
    }

    pub async fn execute<W: Write>(&self, client: &Client, output: &mut W) -> anyhow::Result<()> {
        self.subcmd.execute(client, output).await
    }

    pub fn set_log_level(&self) {
        let filter = if self.verbose {
            "folders=info,folders_cli=info".to_string()
        } else {
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())
        };
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("couldn't init logger: {err:?}");
        }
    }
}

/// Maps a command failure to the process exit code
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<folders::Error>() {
        Some(inner) if inner.is_invalid_input() => exitcode::DATAERR,
        Some(inner) if inner.as_store().is_some() => exitcode::UNAVAILABLE,
        Some(_) => exitcode::SOFTWARE,
        None if err.downcast_ref::<std::io::Error>().is_some() => exitcode::IOERR,
        None => exitcode::SOFTWARE,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_code, Command};
    use clap::Parser;
    use folders::store::StoreError;

    #[test]
    fn should_map_exit_codes() {
        let err = anyhow::Error::from(folders::Error::InvalidLimit(0));
        assert_eq!(exit_code(&err), exitcode::DATAERR);
        let err = anyhow::Error::from(folders::Error::Store(StoreError::Unavailable(
            "down".into(),
        )));
        assert_eq!(exit_code(&err), exitcode::UNAVAILABLE);
        let err = anyhow::Error::from(folders::Error::CursorLoop("abc".into()));
        assert_eq!(exit_code(&err), exitcode::SOFTWARE);
        let err = anyhow::Error::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(exit_code(&err), exitcode::IOERR);
    }

    #[test]
    fn should_fail_with_missing_explicit_config() {
        let root = crate::tests::create_root();
        let path = root.child("missing.json");
        let cmd = Command::parse_from([
            "folders-cli",
            "--config",
            path.to_str().unwrap(),
            "list",
            "--org",
            crate::tests::ORG_ID,
        ]);
        assert!(cmd.load_config().is_err());
    }

    #[tokio::test]
    async fn should_run_with_source_argument() {
        crate::tests::init();
        let root = crate::tests::create_root();
        let source = crate::tests::create_source(root.path(), 3);
        let config = crate::tests::create_config(root.path(), None, Some(2));
        let cmd = Command::parse_from([
            "folders-cli",
            "--config",
            config.to_str().unwrap(),
            "--source",
            source.to_str().unwrap(),
            "page",
            "--org",
            crate::tests::ORG_ID,
            "--json",
        ]);
        let client = cmd.build_client(cmd.load_config().unwrap()).unwrap();
        assert_eq!(client.page_limit(), 2);
        let mut output = Vec::new();
        cmd.execute(&client, &mut output).await.unwrap();
        let res: folders::folder::page::PaginatedFetchFolderResponse =
            serde_json::from_slice(&output).unwrap();
        assert_eq!(res.folders.len(), 2);
        assert!(!res.is_last());
    }
}
