//! Pure edit operations over a block sequence.
//!
//! Every operation takes the current sequence by reference and returns a new
//! one; inputs are never mutated. All operations are total: unknown ids and
//! out-of-range indices return a sequence equal to the input, and degenerate
//! deletes substitute defaults instead of failing. A document is never empty
//! and table payloads stay rectangular with at least one row and column.

use crate::types::{
    empty_row, Block, BlockId, BlockPatch, BlockType, ChecklistItem, ChecklistItemId, Mention,
    TableCell, DEFAULT_TABLE_COLS,
};

/// Insert a fresh block of `block_type` immediately after index `after`.
/// `None` prepends; positions past the end clamp to append.
pub fn insert_block(blocks: &[Block], block_type: BlockType, after: Option<usize>) -> Vec<Block> {
    let mut next = blocks.to_vec();
    let at = match after {
        Some(index) => index.saturating_add(1).min(next.len()),
        None => 0,
    };
    next.insert(at, Block::new(block_type));
    next
}

/// Merge a patch into the block matching `id`
pub fn update_block(blocks: &[Block], id: &BlockId, patch: BlockPatch) -> Vec<Block> {
    let mut next = blocks.to_vec();
    if let Some(block) = next.iter_mut().find(|b| &b.id == id) {
        patch.apply(block);
    }
    next
}

/// Remove the block matching `id`. A sequence never becomes empty: deleting
/// the only block yields a singleton with one fresh empty text block.
pub fn delete_block(blocks: &[Block], id: &BlockId) -> Vec<Block> {
    let mut next: Vec<Block> = blocks.iter().filter(|b| &b.id != id).cloned().collect();
    if next.is_empty() {
        next.push(Block::new(BlockType::Text));
    }
    next
}

/// Move the block at `from` so it lands at `to`, where `to` is interpreted
/// against the already-shortened sequence (splice semantics). An
/// out-of-range `from` is a no-op; `to` clamps to the end.
pub fn move_block(blocks: &[Block], from: usize, to: usize) -> Vec<Block> {
    let mut next = blocks.to_vec();
    if from >= next.len() {
        return next;
    }
    let block = next.remove(from);
    let at = to.min(next.len());
    next.insert(at, block);
    next
}

/// Atomically replace both `content` and `mentions` of the block matching
/// `id`. Used when a mention is inserted, so the rewritten text and the
/// extended mention list land together.
pub fn set_mentions(
    blocks: &[Block],
    id: &BlockId,
    content: impl Into<String>,
    mentions: Vec<Mention>,
) -> Vec<Block> {
    let content = content.into();
    let mut next = blocks.to_vec();
    if let Some(block) = next.iter_mut().find(|b| &b.id == id) {
        block.content = content;
        block.mentions = mentions;
    }
    next
}

// =========================================================================
// Checklist sub-operations
// =========================================================================

/// Append an empty unchecked item to a checklist block
pub fn add_checklist_item(blocks: &[Block], block_id: &BlockId) -> Vec<Block> {
    edit_block(blocks, block_id, |block| {
        if let Some(items) = block.items.as_mut() {
            items.push(ChecklistItem::new());
        }
    })
}

/// Update the text and/or checked state of one checklist item
pub fn update_checklist_item(
    blocks: &[Block],
    block_id: &BlockId,
    item_id: &ChecklistItemId,
    text: Option<&str>,
    checked: Option<bool>,
) -> Vec<Block> {
    edit_block(blocks, block_id, |block| {
        let Some(items) = block.items.as_mut() else {
            return;
        };
        if let Some(item) = items.iter_mut().find(|i| &i.id == item_id) {
            if let Some(text) = text {
                item.text = text.to_string();
            }
            if let Some(checked) = checked {
                item.checked = checked;
            }
        }
    })
}

/// Remove one checklist item. Deleting the last remaining item deletes the
/// whole block (so an emptied checklist never lingers); an unknown item id
/// is a no-op even when one item remains.
pub fn delete_checklist_item(
    blocks: &[Block],
    block_id: &BlockId,
    item_id: &ChecklistItemId,
) -> Vec<Block> {
    let Some(block) = blocks.iter().find(|b| &b.id == block_id) else {
        return blocks.to_vec();
    };
    let Some(items) = block.items.as_ref() else {
        return blocks.to_vec();
    };
    if !items.iter().any(|i| &i.id == item_id) {
        return blocks.to_vec();
    }
    if items.len() == 1 {
        return delete_block(blocks, block_id);
    }

    edit_block(blocks, block_id, |block| {
        if let Some(items) = block.items.as_mut() {
            items.retain(|i| &i.id != item_id);
        }
    })
}

// =========================================================================
// Table sub-operations
// =========================================================================

/// Append a row of empty cells matching the table's current width
pub fn add_table_row(blocks: &[Block], block_id: &BlockId) -> Vec<Block> {
    edit_block(blocks, block_id, |block| {
        let Some(rows) = block.rows.as_mut() else {
            return;
        };
        let cols = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => DEFAULT_TABLE_COLS,
        };
        rows.push(empty_row(cols));
    })
}

/// Append an empty cell to every row
pub fn add_table_column(blocks: &[Block], block_id: &BlockId) -> Vec<Block> {
    edit_block(blocks, block_id, |block| {
        let Some(rows) = block.rows.as_mut() else {
            return;
        };
        for row in rows.iter_mut() {
            row.push(TableCell::new());
        }
    })
}

/// Remove the row at `index`; a no-op when only one row remains or the
/// index is out of range
pub fn delete_table_row(blocks: &[Block], block_id: &BlockId, index: usize) -> Vec<Block> {
    edit_block(blocks, block_id, |block| {
        let Some(rows) = block.rows.as_mut() else {
            return;
        };
        if rows.len() <= 1 || index >= rows.len() {
            return;
        }
        rows.remove(index);
    })
}

/// Remove the column at `index` from every row; a no-op when only one
/// column remains or the index is out of range
pub fn delete_table_column(blocks: &[Block], block_id: &BlockId, index: usize) -> Vec<Block> {
    edit_block(blocks, block_id, |block| {
        let Some(rows) = block.rows.as_mut() else {
            return;
        };
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if width <= 1 || index >= width {
            return;
        }
        for row in rows.iter_mut() {
            if index < row.len() {
                row.remove(index);
            }
        }
    })
}

/// Set the content of one cell; out-of-range coordinates are a no-op
pub fn set_cell(
    blocks: &[Block],
    block_id: &BlockId,
    row: usize,
    col: usize,
    content: impl Into<String>,
) -> Vec<Block> {
    let content = content.into();
    edit_block(blocks, block_id, |block| {
        let cell = block
            .rows
            .as_mut()
            .and_then(|rows| rows.get_mut(row))
            .and_then(|cells| cells.get_mut(col));
        if let Some(cell) = cell {
            cell.content = content;
        }
    })
}

/// Clone the sequence and run `edit` on the block matching `id`, if any
fn edit_block<F>(blocks: &[Block], id: &BlockId, edit: F) -> Vec<Block>
where
    F: FnOnce(&mut Block),
{
    let mut next = blocks.to_vec();
    if let Some(block) = next.iter_mut().find(|b| &b.id == id) {
        edit(block);
    }
    next
}
