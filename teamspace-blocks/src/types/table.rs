//! Table payload types

use super::ids::CellId;
use serde::{Deserialize, Serialize};

/// Rows in a freshly created table block
pub const DEFAULT_TABLE_ROWS: usize = 2;

/// Columns in a freshly created table block, and the width a row falls back
/// to when a table has no usable first row
pub const DEFAULT_TABLE_COLS: usize = 3;

/// One cell of a table block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub id: CellId,
    #[serde(default)]
    pub content: String,
}

impl TableCell {
    /// Create an empty cell
    pub fn new() -> Self {
        Self {
            id: CellId::new(),
            content: String::new(),
        }
    }

    /// Set the cell content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

impl Default for TableCell {
    fn default() -> Self {
        Self::new()
    }
}

/// A row of empty cells
pub fn empty_row(cols: usize) -> Vec<TableCell> {
    (0..cols).map(|_| TableCell::new()).collect()
}

/// A rectangular grid of empty cells
pub fn empty_grid(rows: usize, cols: usize) -> Vec<Vec<TableCell>> {
    (0..rows).map(|_| empty_row(cols)).collect()
}
