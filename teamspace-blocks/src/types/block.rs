//! Block types: Block, BlockType, Alignment, BlockSize, BlockPatch

use super::checklist::ChecklistItem;
use super::ids::BlockId;
use super::mention::Mention;
use super::table::{empty_grid, TableCell, DEFAULT_TABLE_COLS, DEFAULT_TABLE_ROWS};
use serde::{Deserialize, Serialize};

/// Width an image block renders at when none was set
pub const DEFAULT_IMAGE_WIDTH_PERCENT: u8 = 100;

/// The content type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    Text,
    #[serde(rename = "heading-1")]
    Heading1,
    #[serde(rename = "heading-2")]
    Heading2,
    #[serde(rename = "heading-3")]
    Heading3,
    BulletItem,
    Checklist,
    Table,
    Image,
    Divider,
    BoardEmbed,
}

/// Horizontal alignment of a block's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Display size of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockSize {
    Small,
    Medium,
    #[default]
    Large,
}

/// One unit of content in a document.
///
/// Blocks live in an ordered sequence owned by a post; a block's position is
/// its array index, there is no order field. Payload fields are present only
/// for the block types that use them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub size: BlockSize,

    /// Checklist payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ChecklistItem>>,

    /// Table payload: rectangular grid, every row the same cell count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<TableCell>>>,

    /// Image payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width_percent: Option<u8>,

    /// Inline mentions; each display name appears as `@Name` in `content`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<Mention>,
}

impl Block {
    /// Create a block of the given type with a fresh id, empty content, and
    /// a type-appropriate empty payload: a checklist starts with one empty
    /// unchecked item, a table with a 2×3 grid of empty cells.
    pub fn new(block_type: BlockType) -> Self {
        let (items, rows) = match block_type {
            BlockType::Checklist => (Some(vec![ChecklistItem::new()]), None),
            BlockType::Table => (None, Some(empty_grid(DEFAULT_TABLE_ROWS, DEFAULT_TABLE_COLS))),
            _ => (None, None),
        };

        Self {
            id: BlockId::new(),
            block_type,
            content: String::new(),
            alignment: Alignment::default(),
            size: BlockSize::default(),
            items,
            rows,
            image_url: None,
            image_width_percent: None,
            mentions: Vec::new(),
        }
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the image reference
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Effective image width, falling back to the default
    pub fn image_width(&self) -> u8 {
        self.image_width_percent.unwrap_or(DEFAULT_IMAGE_WIDTH_PERCENT)
    }
}

/// Partial update merged into a block by
/// [`update_block`](crate::document::update_block). Unset fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct BlockPatch {
    pub block_type: Option<BlockType>,
    pub content: Option<String>,
    pub alignment: Option<Alignment>,
    pub size: Option<BlockSize>,
    pub items: Option<Vec<ChecklistItem>>,
    pub rows: Option<Vec<Vec<TableCell>>>,
    pub image_url: Option<String>,
    pub image_width_percent: Option<u8>,
    pub mentions: Option<Vec<Mention>>,
}

impl BlockPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_type(mut self, block_type: BlockType) -> Self {
        self.block_type = Some(block_type);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn size(mut self, size: BlockSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn items(mut self, items: Vec<ChecklistItem>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn rows(mut self, rows: Vec<Vec<TableCell>>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Width is clamped to the valid 1–100 range
    pub fn image_width_percent(mut self, percent: u8) -> Self {
        self.image_width_percent = Some(percent.clamp(1, 100));
        self
    }

    pub fn mentions(mut self, mentions: Vec<Mention>) -> Self {
        self.mentions = Some(mentions);
        self
    }

    /// Merge the set fields into a block
    pub fn apply(self, block: &mut Block) {
        if let Some(block_type) = self.block_type {
            block.block_type = block_type;
        }
        if let Some(content) = self.content {
            block.content = content;
        }
        if let Some(alignment) = self.alignment {
            block.alignment = alignment;
        }
        if let Some(size) = self.size {
            block.size = size;
        }
        if let Some(items) = self.items {
            block.items = Some(items);
        }
        if let Some(rows) = self.rows {
            block.rows = Some(rows);
        }
        if let Some(image_url) = self.image_url {
            block.image_url = Some(image_url);
        }
        if let Some(percent) = self.image_width_percent {
            block.image_width_percent = Some(percent.clamp(1, 100));
        }
        if let Some(mentions) = self.mentions {
            block.mentions = mentions;
        }
    }
}
