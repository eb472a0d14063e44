//! Core types for the block document model

mod block;
mod checklist;
mod ids;
mod mention;
mod table;

// Re-export all types
pub use block::{Alignment, Block, BlockPatch, BlockSize, BlockType, DEFAULT_IMAGE_WIDTH_PERCENT};
pub use checklist::ChecklistItem;
pub use ids::{BlockId, CellId, ChecklistItemId};
pub use mention::{Mention, MentionKind};
pub use table::{empty_grid, empty_row, TableCell, DEFAULT_TABLE_COLS, DEFAULT_TABLE_ROWS};
