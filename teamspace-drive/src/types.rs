//! Drive entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teamspace_common::{define_id, UserId};

define_id!(
    /// Unique identifier for a drive entry
    FileId
);

/// Whether a drive entry is a folder or a plain file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Folder,
    File,
}

/// One entry in the drive tree.
///
/// Entries form a tree through `parent_id`; `None` means the entry sits
/// at the drive root. Folders carry a size of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveFile {
    /// Unique entry identifier
    pub id: FileId,
    /// Entry name shown in listings
    pub name: String,
    /// Folder or file
    pub kind: FileKind,
    /// The containing folder; `None` at the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<FileId>,
    /// File size in bytes; zero for folders
    #[serde(default)]
    pub size_bytes: u64,
    /// The user who uploaded or created the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl DriveFile {
    /// Creates a folder at the drive root.
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            id: FileId::new(),
            name: name.into(),
            kind: FileKind::Folder,
            parent_id: None,
            size_bytes: 0,
            owner_id: None,
            created_at: Utc::now(),
        }
    }

    /// Creates a file at the drive root.
    pub fn file(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: FileId::new(),
            name: name.into(),
            kind: FileKind::File,
            parent_id: None,
            size_bytes,
            owner_id: None,
            created_at: Utc::now(),
        }
    }

    /// Places the entry under a folder.
    pub fn with_parent(mut self, parent_id: FileId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Records the owning user.
    pub fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Whether the entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == FileKind::Folder
    }
}
