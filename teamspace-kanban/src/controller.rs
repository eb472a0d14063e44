//! Board hosting: storage seam and stateful controller.
//!
//! The pure operations in [`crate::board`] know nothing about storage.
//! [`BoardController`] owns a post's columns and items, applies each pure
//! operation, persists the touched collections, and only then replaces its
//! in-memory state, so a failed save leaves the board as it was.

use crate::board;
use crate::error::Result;
use crate::types::{BoardColumn, BoardItem, ColumnId, ItemId, ItemPatch, NewItem};
use async_trait::async_trait;
use teamspace_common::PostId;
use teamspace_store::JsonStore;
use tracing::debug;

/// Keyed collection board columns are stored under
pub const BOARD_COLUMNS_COLLECTION: &str = "board_columns";

/// Keyed collection board items are stored under
pub const BOARD_ITEMS_COLLECTION: &str = "board_items";

/// Storage abstraction for per-post boards
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Load a post's columns; empty when none were saved
    async fn load_columns(&self, post: &PostId) -> Result<Vec<BoardColumn>>;

    /// Persist a post's columns
    async fn save_columns(&self, post: &PostId, columns: &[BoardColumn]) -> Result<()>;

    /// Load a post's items; empty when none were saved
    async fn load_items(&self, post: &PostId) -> Result<Vec<BoardItem>>;

    /// Persist a post's items
    async fn save_items(&self, post: &PostId, items: &[BoardItem]) -> Result<()>;

    /// Remove a post's saved columns and items
    async fn remove_board(&self, post: &PostId) -> Result<()>;
}

#[async_trait]
impl BoardStore for JsonStore {
    async fn load_columns(&self, post: &PostId) -> Result<Vec<BoardColumn>> {
        Ok(self
            .load_keyed(BOARD_COLUMNS_COLLECTION, post.as_str())
            .await?)
    }

    async fn save_columns(&self, post: &PostId, columns: &[BoardColumn]) -> Result<()> {
        Ok(self
            .save_keyed(BOARD_COLUMNS_COLLECTION, post.as_str(), columns)
            .await?)
    }

    async fn load_items(&self, post: &PostId) -> Result<Vec<BoardItem>> {
        Ok(self.load_keyed(BOARD_ITEMS_COLLECTION, post.as_str()).await?)
    }

    async fn save_items(&self, post: &PostId, items: &[BoardItem]) -> Result<()> {
        Ok(self
            .save_keyed(BOARD_ITEMS_COLLECTION, post.as_str(), items)
            .await?)
    }

    async fn remove_board(&self, post: &PostId) -> Result<()> {
        self.remove_keyed(BOARD_COLUMNS_COLLECTION, post.as_str())
            .await?;
        Ok(self.remove_keyed(BOARD_ITEMS_COLLECTION, post.as_str()).await?)
    }
}

/// Hosts one post's board over a [`BoardStore`].
///
/// Opening a board with no columns bootstraps the three defaults and
/// persists them immediately, so two openers see the same column ids.
/// Mutating methods save the touched collections before adopting the new
/// state.
#[derive(Debug)]
pub struct BoardController<S> {
    store: S,
    post_id: PostId,
    columns: Vec<BoardColumn>,
    items: Vec<BoardItem>,
}

impl<S: BoardStore> BoardController<S> {
    /// Load the board for a post, bootstrapping the default columns when
    /// none exist yet
    pub async fn open(store: S, post_id: PostId) -> Result<Self> {
        let mut columns = store.load_columns(&post_id).await?;
        let items = store.load_items(&post_id).await?;

        if columns.is_empty() {
            columns = BoardColumn::defaults(&post_id);
            store.save_columns(&post_id, &columns).await?;
            debug!("bootstrapped default columns for post {}", post_id);
        }

        Ok(Self {
            store,
            post_id,
            columns,
            items,
        })
    }

    /// The post this board belongs to
    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    /// The board's columns, sorted for display
    pub fn columns(&self) -> Vec<BoardColumn> {
        board::sorted_columns(&self.columns)
    }

    /// All items on the board, in storage order
    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    /// The items of one column, sorted for display
    pub fn items_in(&self, column_id: &ColumnId) -> Vec<BoardItem> {
        board::column_items(&self.items, column_id)
    }

    /// Append a new column
    pub async fn add_column(&mut self, title: impl Into<String>) -> Result<()> {
        let next = board::add_column(&self.columns, &self.post_id, title);
        self.apply_columns(next).await
    }

    /// Retitle a column and sync the status of its items
    pub async fn rename_column(&mut self, id: &ColumnId, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        let columns = board::rename_column(&self.columns, id, title.clone());
        let items = board::sync_item_status(&self.items, id, title);
        self.apply_both(columns, items).await
    }

    /// Delete a column and every item filed under it
    pub async fn delete_column(&mut self, id: &ColumnId) -> Result<()> {
        let columns = board::delete_column(&self.columns, id);
        let items = board::delete_items_in_column(&self.items, id);
        self.apply_both(columns, items).await
    }

    /// Create an item at the bottom of a column
    pub async fn add_item(&mut self, column_id: &ColumnId, fields: NewItem) -> Result<()> {
        let next = board::add_item(&self.items, &self.columns, column_id, fields);
        self.apply_items(next).await
    }

    /// Merge a patch into an item
    pub async fn update_item(&mut self, id: &ItemId, patch: ItemPatch) -> Result<()> {
        let next = board::update_item(&self.items, id, patch);
        self.apply_items(next).await
    }

    /// Delete an item
    pub async fn delete_item(&mut self, id: &ItemId) -> Result<()> {
        let next = board::delete_item(&self.items, id);
        self.apply_items(next).await
    }

    /// Move an item to a column, appending when `target_index` is `None`
    pub async fn move_item(
        &mut self,
        item_id: &ItemId,
        target_column_id: &ColumnId,
        target_index: Option<usize>,
    ) -> Result<()> {
        let next = board::move_item(
            &self.items,
            &self.columns,
            item_id,
            target_column_id,
            target_index,
        );
        self.apply_items(next).await
    }

    async fn apply_columns(&mut self, next: Vec<BoardColumn>) -> Result<()> {
        self.store.save_columns(&self.post_id, &next).await?;
        debug!("saved {} columns for post {}", next.len(), self.post_id);
        self.columns = next;
        Ok(())
    }

    async fn apply_items(&mut self, next: Vec<BoardItem>) -> Result<()> {
        self.store.save_items(&self.post_id, &next).await?;
        debug!("saved {} items for post {}", next.len(), self.post_id);
        self.items = next;
        Ok(())
    }

    async fn apply_both(&mut self, columns: Vec<BoardColumn>, items: Vec<BoardItem>) -> Result<()> {
        self.store.save_columns(&self.post_id, &columns).await?;
        self.store.save_items(&self.post_id, &items).await?;
        self.columns = columns;
        self.items = items;
        Ok(())
    }
}
