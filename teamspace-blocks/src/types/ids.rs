//! Identifier newtypes local to the document model

use teamspace_common::define_id;

define_id!(
    /// Identifies one block within a document
    BlockId
);

define_id!(
    /// Identifies one item within a checklist block
    ChecklistItemId
);

define_id!(
    /// Identifies one cell within a table block
    CellId
);
