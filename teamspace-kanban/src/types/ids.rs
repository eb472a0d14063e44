//! Identifier types for board entities

use teamspace_common::define_id;

define_id!(
    /// Unique identifier for a board column
    ColumnId
);

define_id!(
    /// Unique identifier for a board item
    ItemId
);
