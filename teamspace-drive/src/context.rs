//! The drive context: file tree operations over a [`JsonStore`].

use teamspace_common::UserId;
use teamspace_store::JsonStore;
use tracing::debug;

use crate::error::{DriveError, Result};
use crate::tree;
use crate::types::{DriveFile, FileId};

/// Singleton collection drive entries are stored under
pub const FILES_COLLECTION: &str = "drive_files";

/// Operations on the shared drive.
///
/// Wraps a [`JsonStore`] and persists the flat entry list as one
/// collection; the tree structure itself is carried by the `parent_id`
/// links and interpreted by the pure functions in [`crate::tree`].
#[derive(Debug, Clone)]
pub struct DriveContext {
    store: JsonStore,
}

impl DriveContext {
    /// Creates a drive over the given store.
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Creates a folder, optionally inside another folder.
    pub async fn create_folder(
        &self,
        name: impl Into<String>,
        parent: Option<&FileId>,
        owner: Option<&UserId>,
    ) -> Result<DriveFile> {
        self.create(DriveFile::folder(name), parent, owner).await
    }

    /// Creates a file entry, optionally inside a folder.
    pub async fn create_file(
        &self,
        name: impl Into<String>,
        size_bytes: u64,
        parent: Option<&FileId>,
        owner: Option<&UserId>,
    ) -> Result<DriveFile> {
        self.create(DriveFile::file(name, size_bytes), parent, owner)
            .await
    }

    async fn create(
        &self,
        mut entry: DriveFile,
        parent: Option<&FileId>,
        owner: Option<&UserId>,
    ) -> Result<DriveFile> {
        let mut files = self.load_files().await?;

        if let Some(parent_id) = parent {
            let Some(parent) = files.iter().find(|f| &f.id == parent_id) else {
                return Err(DriveError::FileNotFound {
                    id: parent_id.to_string(),
                });
            };
            if !parent.is_folder() {
                return Err(DriveError::NotAFolder {
                    id: parent_id.to_string(),
                });
            }
            entry.parent_id = Some(parent_id.clone());
        }
        entry.owner_id = owner.cloned();

        files.push(entry.clone());
        self.save_files(&files).await?;
        Ok(entry)
    }

    /// Renames an entry.
    pub async fn rename(&self, id: &FileId, name: impl Into<String>) -> Result<()> {
        let files = self.load_files().await?;
        self.require(&files, id)?;
        let next = tree::rename(&files, id, name);
        self.save_files(&next).await?;
        Ok(())
    }

    /// Moves an entry under another folder (`None` moves it to the root).
    /// The target must exist and be a folder; moving a folder at or below
    /// itself is quietly left as is.
    pub async fn move_file(&self, id: &FileId, new_parent: Option<&FileId>) -> Result<()> {
        let files = self.load_files().await?;
        self.require(&files, id)?;

        if let Some(parent_id) = new_parent {
            let Some(parent) = files.iter().find(|f| &f.id == parent_id) else {
                return Err(DriveError::FileNotFound {
                    id: parent_id.to_string(),
                });
            };
            if !parent.is_folder() {
                return Err(DriveError::NotAFolder {
                    id: parent_id.to_string(),
                });
            }
        }

        let next = tree::reparent(&files, id, new_parent);
        self.save_files(&next).await?;
        Ok(())
    }

    /// Deletes an entry and everything below it.
    pub async fn delete(&self, id: &FileId) -> Result<()> {
        let files = self.load_files().await?;
        self.require(&files, id)?;

        let next = tree::delete_with_descendants(&files, id);
        self.save_files(&next).await?;
        debug!("deleted {} drive entries", files.len() - next.len());
        Ok(())
    }

    /// All entries, in storage order.
    pub async fn list(&self) -> Result<Vec<DriveFile>> {
        self.load_files().await
    }

    /// The entries inside one folder (`None` lists the root), sorted for
    /// display.
    pub async fn children(&self, parent: Option<&FileId>) -> Result<Vec<DriveFile>> {
        let files = self.load_files().await?;
        Ok(tree::children_of(&files, parent))
    }

    /// The root-to-entry chain for breadcrumbs.
    pub async fn path(&self, id: &FileId) -> Result<Vec<DriveFile>> {
        let files = self.load_files().await?;
        Ok(tree::folder_path(&files, id))
    }

    fn require(&self, files: &[DriveFile], id: &FileId) -> Result<()> {
        if files.iter().any(|f| &f.id == id) {
            Ok(())
        } else {
            Err(DriveError::FileNotFound { id: id.to_string() })
        }
    }

    async fn load_files(&self) -> Result<Vec<DriveFile>> {
        Ok(self.store.load_all(FILES_COLLECTION).await?)
    }

    async fn save_files(&self, files: &[DriveFile]) -> Result<()> {
        Ok(self.store.save_all(FILES_COLLECTION, files).await?)
    }
}
