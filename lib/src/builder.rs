use crate::pagination::StaleCursorPolicy;
use crate::store::FolderStore;
use std::sync::Arc;

/// Page size used when neither the request nor the configuration sets one.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

const PAGE_LIMIT_VAR: &str = "FOLDERS_PAGE_LIMIT";
const STALE_CURSOR_VAR: &str = "FOLDERS_STALE_CURSOR";

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no folder store was provided.
    #[error("no folder store configured")]
    MissingStore,
    /// Returned when the default page limit isn't a positive number.
    #[error("invalid page limit {0:?}, expected a positive number")]
    InvalidPageLimit(String),
    /// Returned when the stale cursor policy isn't `restart` or `reject`.
    #[error("invalid stale cursor policy {0:?}, expected restart or reject")]
    InvalidStaleCursor(String),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// ```
/// use folders::store::MemoryStore;
/// use folders::{ClientBuilder, StaleCursorPolicy};
///
/// let client = ClientBuilder::default()
///     .with_store(MemoryStore::default())
///     .with_page_limit(50)
///     .with_stale_cursor(StaleCursorPolicy::Reject)
///     .build()
///     .expect("unable to build client");
/// assert_eq!(client.page_limit(), 50);
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    store: Option<Arc<dyn FolderStore>>,
    page_limit: i64,
    stale_cursor: StaleCursorPolicy,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - No store is set.
    /// - The page limit is [`DEFAULT_PAGE_LIMIT`].
    /// - Stale tokens restart the listing from the beginning.
    fn default() -> Self {
        Self {
            store: None,
            page_limit: DEFAULT_PAGE_LIMIT,
            stale_cursor: StaleCursorPolicy::default(),
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `FOLDERS_PAGE_LIMIT` for the default page limit.
    /// - Uses `FOLDERS_STALE_CURSOR` (`restart` or `reject`) for the stale cursor policy.
    ///
    /// Unset variables keep their default value, the store still has to be provided.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::default();
        if let Some(value) = lookup(PAGE_LIMIT_VAR) {
            let limit = value
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::InvalidPageLimit(value.clone()))?;
            builder.set_page_limit(limit);
        }
        if let Some(value) = lookup(STALE_CURSOR_VAR) {
            let policy = value
                .trim()
                .parse::<StaleCursorPolicy>()
                .map_err(Error::InvalidStaleCursor)?;
            builder.set_stale_cursor(policy);
        }
        Ok(builder)
    }
}

impl ClientBuilder {
    /// Sets the folder store.
    pub fn set_store<S: FolderStore + 'static>(&mut self, store: S) {
        self.store = Some(Arc::new(store));
    }

    /// Sets the folder store and returns the modified builder.
    pub fn with_store<S: FolderStore + 'static>(mut self, store: S) -> Self {
        self.set_store(store);
        self
    }

    /// Sets a folder store already shared with other components.
    pub fn set_shared_store(&mut self, store: Arc<dyn FolderStore>) {
        self.store = Some(store);
    }

    /// Sets a shared folder store and returns the modified builder.
    pub fn with_shared_store(mut self, store: Arc<dyn FolderStore>) -> Self {
        self.set_shared_store(store);
        self
    }

    /// Sets the page limit applied to requests without one.
    pub fn set_page_limit(&mut self, page_limit: i64) {
        self.page_limit = page_limit;
    }

    /// Sets the default page limit and returns the modified builder.
    pub fn with_page_limit(mut self, page_limit: i64) -> Self {
        self.set_page_limit(page_limit);
        self
    }

    /// Sets the policy applied to tokens referring to unknown folders.
    pub fn set_stale_cursor(&mut self, policy: StaleCursorPolicy) {
        self.stale_cursor = policy;
    }

    /// Sets the stale cursor policy and returns the modified builder.
    pub fn with_stale_cursor(mut self, policy: StaleCursorPolicy) -> Self {
        self.set_stale_cursor(policy);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStore`] if no store was set.
    /// Returns [`Error::InvalidPageLimit`] if the page limit isn't positive.
    pub fn build(self) -> Result<crate::Client, Error> {
        if self.page_limit <= 0 {
            return Err(Error::InvalidPageLimit(self.page_limit.to_string()));
        }
        Ok(crate::Client {
            store: self.store.ok_or(Error::MissingStore)?,
            page_limit: self.page_limit,
            stale_cursor: self.stale_cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientBuilder, Error, DEFAULT_PAGE_LIMIT};
    use crate::store::{FolderStore, MemoryStore};
    use crate::StaleCursorPolicy;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn should_use_defaults() {
        let client = ClientBuilder::from_lookup(lookup(&[]))
            .unwrap()
            .with_store(MemoryStore::default())
            .build()
            .unwrap();
        assert_eq!(client.page_limit(), DEFAULT_PAGE_LIMIT);
        assert_eq!(client.stale_cursor(), StaleCursorPolicy::Restart);
    }

    #[test]
    fn should_read_variables() {
        let client = ClientBuilder::from_lookup(lookup(&[
            ("FOLDERS_PAGE_LIMIT", " 25 "),
            ("FOLDERS_STALE_CURSOR", "reject"),
        ]))
        .unwrap()
        .with_store(MemoryStore::default())
        .build()
        .unwrap();
        assert_eq!(client.page_limit(), 25);
        assert_eq!(client.stale_cursor(), StaleCursorPolicy::Reject);
    }

    #[test]
    fn should_reject_invalid_variables() {
        let err =
            ClientBuilder::from_lookup(lookup(&[("FOLDERS_PAGE_LIMIT", "many")])).unwrap_err();
        assert!(matches!(err, Error::InvalidPageLimit(ref value) if value == "many"));
        let err =
            ClientBuilder::from_lookup(lookup(&[("FOLDERS_STALE_CURSOR", "skip")])).unwrap_err();
        assert!(matches!(err, Error::InvalidStaleCursor(ref value) if value == "skip"));
    }

    #[test]
    fn should_require_store() {
        let err = ClientBuilder::default().build().unwrap_err();
        assert!(matches!(err, Error::MissingStore));
    }

    #[test]
    fn should_require_positive_limit() {
        let err = ClientBuilder::default()
            .with_store(MemoryStore::default())
            .with_page_limit(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPageLimit(_)));
    }

    #[test]
    fn should_share_store() {
        let store: Arc<dyn FolderStore> = Arc::new(MemoryStore::default());
        let first = ClientBuilder::default()
            .with_shared_store(store.clone())
            .build()
            .unwrap();
        let second = first.clone();
        assert_eq!(Arc::strong_count(&store), 3);
        drop(second);
        assert_eq!(Arc::strong_count(&store), 2);
    }
}
