//! The errors returned by the folder listing

use crate::store::StoreError;
use crate::token::TokenError;

/// All the possible errors returned by the [`Client`](crate::Client) and the pagination engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The continuation token is neither empty, the end sentinel, nor a decodable token
    #[error("invalid continuation token")]
    InvalidToken(#[from] TokenError),
    /// The requested page size is zero or negative
    #[error("invalid page limit {0}, expected a positive number")]
    InvalidLimit(i64),
    /// The token refers to a folder that is no longer in the listing.
    ///
    /// Only returned with [`StaleCursorPolicy::Reject`](crate::StaleCursorPolicy::Reject).
    #[error("continuation token refers to unknown folder {0}")]
    StaleToken(uuid::Uuid),
    /// Following the tokens came back to an already visited position
    #[error("continuation token {0:?} was already visited")]
    CursorLoop(String),
    /// The folder store failed to return the folders
    #[error("folder store failure")]
    Store(#[from] StoreError),
}

impl Error {
    /// Whether the error is caused by the request itself, so retrying it as is won't help.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken(_) | Self::InvalidLimit(_) | Self::StaleToken(_)
        )
    }

    pub fn as_store(&self) -> Option<&StoreError> {
        match self {
            Self::Store(value) => Some(value),
            _ => None,
        }
    }
}
