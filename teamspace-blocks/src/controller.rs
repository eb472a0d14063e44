//! Document hosting: storage seam and stateful controller.
//!
//! The pure operations in [`crate::document`] know nothing about storage.
//! [`DocumentController`] owns the current sequence for one post, applies
//! each pure edit, persists the result, and only then replaces its
//! in-memory state, so a failed save leaves the document as it was.

use crate::document;
use crate::error::Result;
use crate::mention_parser;
use crate::types::{Block, BlockId, BlockPatch, BlockType, ChecklistItemId, Mention};
use async_trait::async_trait;
use teamspace_common::PostId;
use teamspace_store::JsonStore;
use tracing::debug;

/// Keyed collection documents are stored under
pub const DOCUMENTS_COLLECTION: &str = "documents";

/// Storage abstraction for per-post block sequences
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the sequence for a post; empty when none was saved
    async fn load_blocks(&self, post: &PostId) -> Result<Vec<Block>>;

    /// Persist the sequence for a post
    async fn save_blocks(&self, post: &PostId, blocks: &[Block]) -> Result<()>;

    /// Remove a post's saved sequence
    async fn remove_blocks(&self, post: &PostId) -> Result<()>;
}

#[async_trait]
impl DocumentStore for JsonStore {
    async fn load_blocks(&self, post: &PostId) -> Result<Vec<Block>> {
        Ok(self.load_keyed(DOCUMENTS_COLLECTION, post.as_str()).await?)
    }

    async fn save_blocks(&self, post: &PostId, blocks: &[Block]) -> Result<()> {
        Ok(self
            .save_keyed(DOCUMENTS_COLLECTION, post.as_str(), blocks)
            .await?)
    }

    async fn remove_blocks(&self, post: &PostId) -> Result<()> {
        Ok(self.remove_keyed(DOCUMENTS_COLLECTION, post.as_str()).await?)
    }
}

/// Hosts one post's block sequence over a [`DocumentStore`].
///
/// Every mutating method threads the pure operation's result through a save
/// before adopting it, so the in-memory sequence always matches what was
/// last persisted (except the initial seed for an empty document, which is
/// only written once the first edit happens).
#[derive(Debug)]
pub struct DocumentController<S> {
    store: S,
    post_id: PostId,
    blocks: Vec<Block>,
}

impl<S: DocumentStore> DocumentController<S> {
    /// Load the document for a post, seeding one fresh text block when the
    /// stored sequence is empty
    pub async fn open(store: S, post_id: PostId) -> Result<Self> {
        let mut blocks = store.load_blocks(&post_id).await?;
        if blocks.is_empty() {
            blocks.push(Block::new(BlockType::Text));
        }
        Ok(Self {
            store,
            post_id,
            blocks,
        })
    }

    /// The post this document belongs to
    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    /// The current block sequence, in document order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Insert a fresh block after `after` (`None` prepends)
    pub async fn insert_block(
        &mut self,
        block_type: BlockType,
        after: Option<usize>,
    ) -> Result<()> {
        self.apply(document::insert_block(&self.blocks, block_type, after))
            .await
    }

    /// Merge a patch into a block
    pub async fn update_block(&mut self, id: &BlockId, patch: BlockPatch) -> Result<()> {
        self.apply(document::update_block(&self.blocks, id, patch)).await
    }

    /// Delete a block; the document never becomes empty
    pub async fn delete_block(&mut self, id: &BlockId) -> Result<()> {
        self.apply(document::delete_block(&self.blocks, id)).await
    }

    /// Move a block with splice semantics
    pub async fn move_block(&mut self, from: usize, to: usize) -> Result<()> {
        self.apply(document::move_block(&self.blocks, from, to)).await
    }

    /// Complete the active mention query in a block with the chosen
    /// candidate: rewrites the content, appends the candidate to the
    /// block's mentions, and persists both together. A missing block or an
    /// inactive query is a no-op.
    pub async fn insert_mention(&mut self, block_id: &BlockId, candidate: &Mention) -> Result<()> {
        let Some(block) = self.blocks.iter().find(|b| &b.id == block_id) else {
            return Ok(());
        };
        let Some(content) =
            mention_parser::insert_mention(&block.content, &candidate.display_name)
        else {
            return Ok(());
        };

        let mut mentions = block.mentions.clone();
        mentions.push(candidate.clone());
        self.apply(document::set_mentions(&self.blocks, block_id, content, mentions))
            .await
    }

    /// Append an empty item to a checklist block
    pub async fn add_checklist_item(&mut self, block_id: &BlockId) -> Result<()> {
        self.apply(document::add_checklist_item(&self.blocks, block_id))
            .await
    }

    /// Update one checklist item's text and/or checked state
    pub async fn update_checklist_item(
        &mut self,
        block_id: &BlockId,
        item_id: &ChecklistItemId,
        text: Option<&str>,
        checked: Option<bool>,
    ) -> Result<()> {
        self.apply(document::update_checklist_item(
            &self.blocks,
            block_id,
            item_id,
            text,
            checked,
        ))
        .await
    }

    /// Delete one checklist item; deleting the last item deletes the block
    pub async fn delete_checklist_item(
        &mut self,
        block_id: &BlockId,
        item_id: &ChecklistItemId,
    ) -> Result<()> {
        self.apply(document::delete_checklist_item(&self.blocks, block_id, item_id))
            .await
    }

    /// Append a row to a table block
    pub async fn add_table_row(&mut self, block_id: &BlockId) -> Result<()> {
        self.apply(document::add_table_row(&self.blocks, block_id)).await
    }

    /// Append a column to a table block
    pub async fn add_table_column(&mut self, block_id: &BlockId) -> Result<()> {
        self.apply(document::add_table_column(&self.blocks, block_id)).await
    }

    /// Delete a table row (never the last one)
    pub async fn delete_table_row(&mut self, block_id: &BlockId, index: usize) -> Result<()> {
        self.apply(document::delete_table_row(&self.blocks, block_id, index))
            .await
    }

    /// Delete a table column (never the last one)
    pub async fn delete_table_column(&mut self, block_id: &BlockId, index: usize) -> Result<()> {
        self.apply(document::delete_table_column(&self.blocks, block_id, index))
            .await
    }

    /// Set one table cell's content
    pub async fn set_cell(
        &mut self,
        block_id: &BlockId,
        row: usize,
        col: usize,
        content: impl Into<String> + Send,
    ) -> Result<()> {
        self.apply(document::set_cell(&self.blocks, block_id, row, col, content))
            .await
    }

    async fn apply(&mut self, next: Vec<Block>) -> Result<()> {
        self.store.save_blocks(&self.post_id, &next).await?;
        debug!("saved document {} ({} blocks)", self.post_id, next.len());
        self.blocks = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MentionKind;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, JsonStore, PostId) {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::init(temp.path().join(".teamspace")).await.unwrap();
        (temp, store, PostId::new())
    }

    #[tokio::test]
    async fn test_open_empty_document_seeds_text_block() {
        let (_temp, store, post) = setup().await;

        let controller = DocumentController::open(store.clone(), post.clone())
            .await
            .unwrap();
        assert_eq!(controller.blocks().len(), 1);
        assert_eq!(controller.blocks()[0].block_type, BlockType::Text);

        // The seed is not persisted until the first edit
        let stored = store.load_blocks(&post).await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn test_edits_persist_across_reopen() {
        let (_temp, store, post) = setup().await;

        let mut controller = DocumentController::open(store.clone(), post.clone())
            .await
            .unwrap();
        controller
            .insert_block(BlockType::Heading1, Some(0))
            .await
            .unwrap();
        let heading_id = controller.blocks()[1].id.clone();
        controller
            .update_block(&heading_id, BlockPatch::new().content("Kickoff"))
            .await
            .unwrap();

        let reopened = DocumentController::open(store, post).await.unwrap();
        assert_eq!(reopened.blocks().len(), 2);
        assert_eq!(reopened.blocks()[1].content, "Kickoff");
    }

    #[tokio::test]
    async fn test_mention_flow_round_trips() {
        let (_temp, store, post) = setup().await;

        let mut controller = DocumentController::open(store.clone(), post.clone())
            .await
            .unwrap();
        let block_id = controller.blocks()[0].id.clone();
        controller
            .update_block(&block_id, BlockPatch::new().content("hello @al"))
            .await
            .unwrap();

        let candidate = Mention::new("u1", MentionKind::User, "Alice");
        controller.insert_mention(&block_id, &candidate).await.unwrap();

        assert_eq!(controller.blocks()[0].content, "hello @Alice ");
        assert_eq!(controller.blocks()[0].mentions, vec![candidate.clone()]);

        let reopened = DocumentController::open(store, post).await.unwrap();
        assert_eq!(reopened.blocks()[0].content, "hello @Alice ");
        assert_eq!(reopened.blocks()[0].mentions, vec![candidate]);
    }

    #[tokio::test]
    async fn test_insert_mention_without_active_query_is_noop() {
        let (_temp, store, post) = setup().await;

        let mut controller = DocumentController::open(store, post).await.unwrap();
        let block_id = controller.blocks()[0].id.clone();
        controller
            .update_block(&block_id, BlockPatch::new().content("no query here"))
            .await
            .unwrap();

        let candidate = Mention::new("u1", MentionKind::User, "Alice");
        controller.insert_mention(&block_id, &candidate).await.unwrap();

        assert_eq!(controller.blocks()[0].content, "no query here");
        assert!(controller.blocks()[0].mentions.is_empty());
    }

    #[tokio::test]
    async fn test_delete_last_block_persists_fresh_text() {
        let (_temp, store, post) = setup().await;

        let mut controller = DocumentController::open(store.clone(), post.clone())
            .await
            .unwrap();
        let first_id = controller.blocks()[0].id.clone();
        controller.delete_block(&first_id).await.unwrap();

        assert_eq!(controller.blocks().len(), 1);
        assert_ne!(controller.blocks()[0].id, first_id);

        let stored = store.load_blocks(&post).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].block_type, BlockType::Text);
    }

    #[tokio::test]
    async fn test_checklist_lifecycle_through_controller() {
        let (_temp, store, post) = setup().await;

        let mut controller = DocumentController::open(store, post).await.unwrap();
        controller.insert_block(BlockType::Checklist, Some(0)).await.unwrap();
        let checklist_id = controller.blocks()[1].id.clone();

        controller.add_checklist_item(&checklist_id).await.unwrap();
        let item_id = controller.blocks()[1].items.as_ref().unwrap()[0].id.clone();
        controller
            .update_checklist_item(&checklist_id, &item_id, Some("ship it"), Some(true))
            .await
            .unwrap();

        let items = controller.blocks()[1].items.as_ref().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "ship it");
        assert!(items[0].checked);
    }
}
