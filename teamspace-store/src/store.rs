//! File-backed JSON collection store

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Name of the data directory a workspace keeps its collections in
pub const DATA_DIR_NAME: &str = ".teamspace";

/// File-backed JSON store rooted at one data directory.
///
/// Two shapes of collection are supported:
/// - singleton collections, one file for the whole collection
///   (`<root>/users.json`)
/// - keyed collections, one file per owning key
///   (`<root>/documents/<post-id>.json`)
///
/// Collections are JSON arrays. A missing file reads back as the empty
/// collection, so callers never need to special-case first use.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Create a store over an existing data directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the data directory if needed and return a store over it
    pub async fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(root);
        fs::create_dir_all(&store.root).await?;
        Ok(store)
    }

    /// The data directory this store reads and writes
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to a singleton collection file
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{}.json", collection))
    }

    /// Path to a keyed collection's directory
    pub fn keyed_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    /// Path to one key's file within a keyed collection
    pub fn keyed_path(&self, collection: &str, key: &str) -> PathBuf {
        self.keyed_dir(collection).join(format!("{}.json", key))
    }

    // =========================================================================
    // Singleton collections
    // =========================================================================

    /// Load a singleton collection; missing file yields the empty collection
    pub async fn load_all<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        read_collection(&self.collection_path(collection)).await
    }

    /// Write a singleton collection (atomic write via temp file)
    pub async fn save_all<T: Serialize>(&self, collection: &str, items: &[T]) -> Result<()> {
        write_collection(&self.collection_path(collection), items).await
    }

    /// Delete a singleton collection file if it exists
    pub async fn remove_collection(&self, collection: &str) -> Result<()> {
        let path = self.collection_path(collection);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    // =========================================================================
    // Keyed collections
    // =========================================================================

    /// Load one key's collection; missing file yields the empty collection
    pub async fn load_keyed<T: DeserializeOwned>(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Vec<T>> {
        read_collection(&self.keyed_path(collection, key)).await
    }

    /// Write one key's collection (atomic write via temp file)
    pub async fn save_keyed<T: Serialize>(
        &self,
        collection: &str,
        key: &str,
        items: &[T],
    ) -> Result<()> {
        write_collection(&self.keyed_path(collection, key), items).await
    }

    /// Delete one key's file if it exists
    pub async fn remove_keyed(&self, collection: &str, key: &str) -> Result<()> {
        let path = self.keyed_path(collection, key);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    /// List the keys present in a keyed collection by reading its directory
    pub async fn list_keys(&self, collection: &str) -> Result<Vec<String>> {
        let dir = self.keyed_dir(collection);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => keys.push(stem.to_string()),
                None => warn!("skipping entry with unreadable name: {}", path.display()),
            }
        }

        keys.sort();
        Ok(keys)
    }
}

async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).await?;
    let items = serde_json::from_str(&content)?;
    Ok(items)
}

async fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let content = serde_json::to_string_pretty(items)?;
    debug!("writing {} ({} entries)", path.display(), items.len());
    atomic_write(path, content.as_bytes()).await
}

async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    // Write to temp file in same directory
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path).await?;

    Ok(())
}

/// Resolve a user-provided path to a data directory path.
///
/// Rules:
/// - If path is itself a `.teamspace` directory, use it directly
/// - If path is inside a `.teamspace` directory, use that ancestor
/// - If path or any ancestor contains `.teamspace/`, use the nearest one
/// - Otherwise, assume `path/.teamspace` (created on first write)
pub fn resolve_data_dir(path: &Path) -> PathBuf {
    let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    for ancestor in path.ancestors() {
        if ancestor.file_name().and_then(|n| n.to_str()) == Some(DATA_DIR_NAME)
            && ancestor.is_dir()
        {
            return ancestor.to_path_buf();
        }
        let child = ancestor.join(DATA_DIR_NAME);
        if child.is_dir() {
            return child;
        }
    }

    path.join(DATA_DIR_NAME)
}
