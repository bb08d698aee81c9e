//! Cursor pagination over an ordered snapshot of folders
//!
//! The engine is pure: it takes the full ordered listing, the token handed back by the previous
//! call and a page size, and returns the next page with the token to use after it. Nothing is
//! kept between calls, so concurrent listings of the same organization don't interfere.
//!
//! | token          | page                                   | next token                   |
//! |----------------|----------------------------------------|------------------------------|
//! | `""`           | first `limit` folders                  | last returned id or sentinel |
//! | `After(id)`    | `limit` folders following `id`         | last returned id or sentinel |
//! | `END_OF_DATA`  | empty                                  | `END_OF_DATA`                |

use crate::error::Error;
use crate::folder::Folder;
use crate::token::Cursor;
use std::str::FromStr;
use uuid::Uuid;

/// What to do when a token refers to a folder missing from the listing
///
/// This happens when the folder was removed from the store between two calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleCursorPolicy {
    /// Start again from the first folder. Already returned folders may be returned again.
    #[default]
    Restart,
    /// Fail with [`Error::StaleToken`].
    ///
    /// This includes an organization without any folder left: a resumable token can't point
    /// anywhere in an empty listing, so it is rejected instead of returning an empty last page.
    Reject,
}

impl StaleCursorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restart => "restart",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for StaleCursorPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "restart" => Ok(Self::Restart),
            "reject" => Ok(Self::Reject),
            _ => Err(value.to_string()),
        }
    }
}

/// One slice of the listing with the cursor to resume after it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub folders: Vec<Folder>,
    pub next: Cursor,
}

impl Page {
    fn exhausted() -> Self {
        Self {
            folders: Vec::new(),
            next: Cursor::EndOfData,
        }
    }

    /// The wire token to send to get the following page
    pub fn token(&self) -> String {
        self.next.encode()
    }

    pub fn is_last(&self) -> bool {
        self.next.is_end_of_data()
    }
}

fn resume_position(
    folders: &[Folder],
    last_id: Uuid,
    policy: StaleCursorPolicy,
) -> Result<usize, Error> {
    match folders.iter().position(|folder| folder.id == last_id) {
        Some(index) => Ok(index + 1),
        None if policy == StaleCursorPolicy::Reject => Err(Error::StaleToken(last_id)),
        None => {
            tracing::warn!("folder {last_id} not found, restarting from the first folder");
            Ok(0)
        }
    }
}

/// Computes the page following `token` in `folders`
///
/// # Errors
///
/// Returns [`Error::InvalidToken`] when the token can't be decoded, [`Error::InvalidLimit`] when
/// `limit` isn't positive, and [`Error::StaleToken`] when the token refers to an unknown folder
/// and the policy is [`StaleCursorPolicy::Reject`].
///
/// An exhausted token always returns an empty last page, whatever the limit.
///
/// ```
/// use folders::pagination::{paginate, StaleCursorPolicy};
/// use folders::Folder;
///
/// let org = uuid::Uuid::nil();
/// let folders: Vec<_> = (0..3u128)
///     .map(|i| Folder::new(uuid::Uuid::from_u128(i + 1), format!("f{i}"), org))
///     .collect();
/// let first = paginate(&folders, "", 2, StaleCursorPolicy::Restart).unwrap();
/// assert_eq!(first.folders.len(), 2);
/// let second = paginate(&folders, &first.token(), 2, StaleCursorPolicy::Restart).unwrap();
/// assert_eq!(second.folders.len(), 1);
/// assert!(second.is_last());
/// ```
pub fn paginate(
    folders: &[Folder],
    token: &str,
    limit: i64,
    policy: StaleCursorPolicy,
) -> Result<Page, Error> {
    let cursor = Cursor::decode(token)?;
    if cursor.is_end_of_data() {
        return Ok(Page::exhausted());
    }
    if limit <= 0 {
        return Err(Error::InvalidLimit(limit));
    }
    let start = match cursor.last_id() {
        Some(last_id) => resume_position(folders, last_id, policy)?,
        None => 0,
    };
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    let end = start.saturating_add(limit).min(folders.len());
    tracing::debug!(
        "slicing folders {start}..{end} out of {} with limit {limit}",
        folders.len()
    );
    let page = folders[start..end].to_vec();
    let next = if end >= folders.len() {
        Cursor::EndOfData
    } else {
        Cursor::After(folders[end - 1].id)
    };
    Ok(Page {
        folders: page,
        next,
    })
}
