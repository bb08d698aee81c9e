use anyhow::Context;
use folders::store::JsonFileStore;
use folders::{Client, ClientBuilder, StaleCursorPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// JSON file containing the folders
    source: Option<PathBuf>,
    page_limit: Option<i64>,
    stale_cursor: Option<StaleCursorPolicy>,
}

impl Config {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let reader = std::fs::File::open(path)
            .with_context(|| format!("unable to open configuration {}", path.display()))?;
        let result = serde_json::from_reader(reader)
            .with_context(|| format!("unable to parse configuration {}", path.display()))?;
        Ok(result)
    }

    /// Builds the client, the environment being overridden by the configuration file,
    /// itself overridden by the `source` argument.
    pub fn build(self, source: Option<PathBuf>) -> anyhow::Result<Client> {
        let mut builder = ClientBuilder::from_env()?;
        if let Some(page_limit) = self.page_limit {
            builder.set_page_limit(page_limit);
        }
        if let Some(policy) = self.stale_cursor {
            builder.set_stale_cursor(policy);
        }
        let source = source
            .or(self.source)
            .context("no folder source provided, use --source or the configuration file")?;
        tracing::info!("reading folders from {}", source.display());
        builder.set_store(JsonFileStore::new(source));
        let client = builder.build()?;
        tracing::info!(
            "page limit {}, {} on stale cursor",
            client.page_limit(),
            client.stale_cursor().as_str()
        );
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use folders::StaleCursorPolicy;

    #[test]
    fn should_parse_file() {
        let root = crate::tests::create_root();
        let path = crate::tests::create_config(root.path(), Some("folders.json"), Some(5));
        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.page_limit, Some(5));
        assert_eq!(config.stale_cursor, Some(StaleCursorPolicy::Reject));
        assert_eq!(
            config.source.as_deref(),
            Some(std::path::Path::new("folders.json"))
        );
    }

    #[test]
    fn should_fail_on_malformed_file() {
        let root = crate::tests::create_root();
        let path = root.child("config.json");
        std::fs::write(&path, "page_limit = 3").unwrap();
        let err = Config::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("unable to parse configuration"));
    }

    #[test]
    fn should_require_source() {
        let err = Config::default().build(None).unwrap_err();
        assert!(err.to_string().contains("no folder source"));
    }

    #[test]
    fn should_reject_invalid_limit() {
        let config = Config {
            page_limit: Some(0),
            ..Default::default()
        };
        let err = config.build(Some("folders.json".into())).unwrap_err();
        assert!(err
            .downcast_ref::<folders::builder::Error>()
            .is_some());
    }
}
