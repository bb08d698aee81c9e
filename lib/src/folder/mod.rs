use uuid::Uuid;

pub mod list;
pub mod page;

/// A structure representing a folder owned by an organization
///
/// Soft deleted folders keep being listed, with `deleted` set.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    pub org_id: Uuid,
    #[serde(default)]
    pub deleted: bool,
}

impl Folder {
    pub fn new<N: Into<String>>(id: Uuid, name: N, org_id: Uuid) -> Self {
        Self {
            id,
            name: name.into(),
            org_id,
            deleted: false,
        }
    }

    pub fn set_deleted(&mut self, value: bool) {
        self.deleted = value;
    }

    pub fn with_deleted(mut self, value: bool) -> Self {
        self.deleted = value;
        self
    }
}

impl Eq for Folder {}

impl PartialEq for Folder {
    fn eq(&self, other: &Self) -> bool {
        self.id.eq(&other.id)
    }
}
