//! Core types for the kanban board

mod column;
mod ids;
mod item;

pub use column::{BoardColumn, DEFAULT_COLUMN_TITLES};
pub use ids::{ColumnId, ItemId};
pub use item::{BoardItem, ItemPatch, NewItem, Priority};
