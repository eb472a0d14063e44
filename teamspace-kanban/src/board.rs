//! Pure operations over a post's board.
//!
//! Every operation takes the current column or item collection by reference
//! and returns a new one; inputs are never mutated. All operations are
//! total: unknown ids return collections equal to the input, and insert
//! indices clamp into range. Deleting a column and deleting its items are
//! separate functions so callers can persist the two collections they
//! touch; [`crate::BoardController`] pairs them.

use teamspace_common::PostId;

use crate::types::{BoardColumn, BoardItem, ColumnId, ItemId, ItemPatch, NewItem};

/// Columns sorted by ascending order. Ties keep their input position.
pub fn sorted_columns(columns: &[BoardColumn]) -> Vec<BoardColumn> {
    let mut next = columns.to_vec();
    next.sort_by_key(|column| column.order);
    next
}

/// The items filed under one column, sorted by ascending order. Ties keep
/// their input position.
pub fn column_items(items: &[BoardItem], column_id: &ColumnId) -> Vec<BoardItem> {
    let mut next: Vec<BoardItem> = items
        .iter()
        .filter(|item| &item.column_id == column_id)
        .cloned()
        .collect();
    next.sort_by_key(|item| item.order);
    next
}

/// Append a new column after the existing ones
pub fn add_column(
    columns: &[BoardColumn],
    post_id: &PostId,
    title: impl Into<String>,
) -> Vec<BoardColumn> {
    let mut next = columns.to_vec();
    let order = next.len();
    next.push(BoardColumn::new(post_id.clone(), title, order));
    next
}

/// Retitle the column matching `id`. Callers that track item status pair
/// this with [`sync_item_status`].
pub fn rename_column(
    columns: &[BoardColumn],
    id: &ColumnId,
    title: impl Into<String>,
) -> Vec<BoardColumn> {
    let title = title.into();
    let mut next = columns.to_vec();
    if let Some(column) = next.iter_mut().find(|c| &c.id == id) {
        column.title = title;
    }
    next
}

/// Remove the column matching `id`. Remaining orders keep their gaps;
/// only relative ordering matters for display.
pub fn delete_column(columns: &[BoardColumn], id: &ColumnId) -> Vec<BoardColumn> {
    columns.iter().filter(|c| &c.id != id).cloned().collect()
}

/// Remove every item filed under `column_id`. Cascade partner of
/// [`delete_column`].
pub fn delete_items_in_column(items: &[BoardItem], column_id: &ColumnId) -> Vec<BoardItem> {
    items
        .iter()
        .filter(|item| &item.column_id != column_id)
        .cloned()
        .collect()
}

/// Rewrite `status` to `title` for every item filed under `column_id`
pub fn sync_item_status(
    items: &[BoardItem],
    column_id: &ColumnId,
    title: impl Into<String>,
) -> Vec<BoardItem> {
    let title = title.into();
    let mut next = items.to_vec();
    for item in next.iter_mut() {
        if &item.column_id == column_id {
            item.status = title.clone();
        }
    }
    next
}

/// Create an item at the bottom of `column_id` from the given fields.
/// The new item's order is the column's current item count and its status
/// is the column's title. Unknown column ids are a no-op.
pub fn add_item(
    items: &[BoardItem],
    columns: &[BoardColumn],
    column_id: &ColumnId,
    fields: NewItem,
) -> Vec<BoardItem> {
    let Some(column) = columns.iter().find(|c| &c.id == column_id) else {
        return items.to_vec();
    };
    let order = items
        .iter()
        .filter(|item| &item.column_id == column_id)
        .count();

    let mut next = items.to_vec();
    next.push(BoardItem {
        id: ItemId::new(),
        column_id: column_id.clone(),
        title: fields.title,
        description: fields.description,
        assignees: fields.assignees,
        priority: fields.priority,
        due_date: fields.due_date,
        status: column.title.clone(),
        order,
    });
    next
}

/// Merge a patch into the item matching `id`
pub fn update_item(items: &[BoardItem], id: &ItemId, patch: ItemPatch) -> Vec<BoardItem> {
    let mut next = items.to_vec();
    if let Some(item) = next.iter_mut().find(|i| &i.id == id) {
        patch.apply(item);
    }
    next
}

/// Remove the item matching `id`. Orders of the remaining items keep
/// their gaps.
pub fn delete_item(items: &[BoardItem], id: &ItemId) -> Vec<BoardItem> {
    items.iter().filter(|item| &item.id != id).cloned().collect()
}

/// Move an item to `target_column_id`.
///
/// With `target_index: None` the item is appended: its order becomes the
/// destination's current item count and no other item is renumbered.
/// Dropping an item onto the column it is already in without an index is
/// a no-op.
///
/// With `Some(index)` the item is spliced in at that position (clamped to
/// the destination length) and every affected column is renumbered to a
/// contiguous `0..n` sequence, so a drop between two cards lands exactly
/// where it was aimed.
///
/// Either way the moved item's status becomes the destination column's
/// title. Unknown item or column ids are a no-op.
pub fn move_item(
    items: &[BoardItem],
    columns: &[BoardColumn],
    item_id: &ItemId,
    target_column_id: &ColumnId,
    target_index: Option<usize>,
) -> Vec<BoardItem> {
    let Some(item) = items.iter().find(|i| &i.id == item_id) else {
        return items.to_vec();
    };
    let Some(target) = columns.iter().find(|c| &c.id == target_column_id) else {
        return items.to_vec();
    };
    let source_column_id = item.column_id.clone();

    let Some(index) = target_index else {
        if source_column_id == *target_column_id {
            return items.to_vec();
        }
        let order = items
            .iter()
            .filter(|i| &i.column_id == target_column_id)
            .count();
        let mut next = items.to_vec();
        if let Some(moved) = next.iter_mut().find(|i| &i.id == item_id) {
            moved.column_id = target_column_id.clone();
            moved.status = target.title.clone();
            moved.order = order;
        }
        return next;
    };

    // Destination sequence with the moved item spliced in at the clamped
    // index; built from ids so the single rewrite pass below can renumber
    // by position.
    let mut dest_ids: Vec<ItemId> = column_items(items, target_column_id)
        .into_iter()
        .filter(|i| &i.id != item_id)
        .map(|i| i.id)
        .collect();
    let at = index.min(dest_ids.len());
    dest_ids.insert(at, item_id.clone());

    // On a cross-column move the source closes its gap too.
    let source_ids: Vec<ItemId> = if source_column_id != *target_column_id {
        column_items(items, &source_column_id)
            .into_iter()
            .filter(|i| &i.id != item_id)
            .map(|i| i.id)
            .collect()
    } else {
        Vec::new()
    };

    let mut next = items.to_vec();
    for entry in next.iter_mut() {
        if let Some(order) = dest_ids.iter().position(|id| id == &entry.id) {
            if &entry.id == item_id {
                entry.column_id = target_column_id.clone();
                entry.status = target.title.clone();
            }
            entry.order = order;
        } else if let Some(order) = source_ids.iter().position(|id| id == &entry.id) {
            entry.order = order;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> PostId {
        PostId::from_string("post-1")
    }

    /// Board with two columns ("Todo", "Doing") and `counts` items in each,
    /// titled `t0..`, `d0..`.
    fn board(todo_count: usize, doing_count: usize) -> (Vec<BoardColumn>, Vec<BoardItem>) {
        let columns = vec![
            BoardColumn::new(post(), "Todo", 0),
            BoardColumn::new(post(), "Doing", 1),
        ];
        let mut items = Vec::new();
        for i in 0..todo_count {
            items = add_item(&items, &columns, &columns[0].id, NewItem::new(format!("t{i}")));
        }
        for i in 0..doing_count {
            items = add_item(&items, &columns, &columns[1].id, NewItem::new(format!("d{i}")));
        }
        (columns, items)
    }

    fn titles(items: &[BoardItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    fn orders(items: &[BoardItem]) -> Vec<usize> {
        items.iter().map(|i| i.order).collect()
    }

    #[test]
    fn test_add_column_appends_with_next_order() {
        let columns = add_column(&[], &post(), "Todo");
        let columns = add_column(&columns, &post(), "Doing");

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].order, 0);
        assert_eq!(columns[1].order, 1);
        assert_eq!(columns[1].title, "Doing");
    }

    #[test]
    fn test_sorted_columns_orders_by_order_field() {
        let mut columns = vec![
            BoardColumn::new(post(), "Last", 2),
            BoardColumn::new(post(), "First", 0),
            BoardColumn::new(post(), "Middle", 1),
        ];
        columns = sorted_columns(&columns);

        let titles: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["First", "Middle", "Last"]);
    }

    #[test]
    fn test_rename_column_changes_only_the_title() {
        let (columns, _) = board(0, 0);
        let renamed = rename_column(&columns, &columns[0].id, "Inbox");

        assert_eq!(renamed[0].title, "Inbox");
        assert_eq!(renamed[0].id, columns[0].id);
        assert_eq!(renamed[0].order, 0);
        assert_eq!(renamed[1], columns[1]);
    }

    #[test]
    fn test_rename_unknown_column_is_noop() {
        let (columns, _) = board(0, 0);
        let renamed = rename_column(&columns, &ColumnId::from_string("ghost"), "Inbox");
        assert_eq!(renamed, columns);
    }

    #[test]
    fn test_delete_column_keeps_remaining_orders() {
        let (mut columns, _) = board(0, 0);
        columns = add_column(&columns, &post(), "Done");

        let remaining = delete_column(&columns, &columns[1].id);
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].title, "Todo");
        assert_eq!(remaining[1].title, "Done");
        // Orders keep their gap; sorting still works.
        assert_eq!(remaining[1].order, 2);
    }

    #[test]
    fn test_delete_column_cascade_removes_only_its_items() {
        let (columns, items) = board(2, 1);

        let remaining_columns = delete_column(&columns, &columns[0].id);
        let remaining_items = delete_items_in_column(&items, &columns[0].id);

        assert_eq!(remaining_columns.len(), 1);
        assert_eq!(titles(&remaining_items), ["d0"]);
        assert_eq!(remaining_items[0].column_id, columns[1].id);
    }

    #[test]
    fn test_add_item_derives_order_and_status() {
        let (columns, items) = board(2, 0);

        let todo = column_items(&items, &columns[0].id);
        assert_eq!(orders(&todo), [0, 1]);
        assert_eq!(todo[0].status, "Todo");
        assert_eq!(todo[1].status, "Todo");
    }

    #[test]
    fn test_add_item_to_unknown_column_is_noop() {
        let (columns, items) = board(1, 0);
        let next = add_item(&items, &columns, &ColumnId::from_string("ghost"), NewItem::new("x"));
        assert_eq!(next, items);
    }

    #[test]
    fn test_update_item_merges_patch() {
        let (_, items) = board(1, 0);
        let id = items[0].id.clone();

        let next = update_item(&items, &id, ItemPatch::new().description("details"));
        assert_eq!(next[0].description, "details");
        assert_eq!(next[0].title, "t0");
    }

    #[test]
    fn test_update_unknown_item_is_noop() {
        let (_, items) = board(1, 0);
        let next = update_item(&items, &ItemId::from_string("ghost"), ItemPatch::new().title("x"));
        assert_eq!(next, items);
    }

    #[test]
    fn test_update_is_idempotent() {
        let (_, items) = board(1, 0);
        let id = items[0].id.clone();
        let patch = ItemPatch::new().title("renamed").priority(crate::Priority::High);

        let once = update_item(&items, &id, patch.clone());
        let twice = update_item(&once, &id, patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_delete_item_removes_only_that_item() {
        let (columns, items) = board(3, 0);
        let middle = column_items(&items, &columns[0].id)[1].id.clone();

        let next = delete_item(&items, &middle);
        assert_eq!(titles(&column_items(&next, &columns[0].id)), ["t0", "t2"]);
    }

    #[test]
    fn test_move_without_index_appends_to_target() {
        let (columns, items) = board(2, 2);
        let moved_id = column_items(&items, &columns[0].id)[0].id.clone();

        let next = move_item(&items, &columns, &moved_id, &columns[1].id, None);
        let doing = column_items(&next, &columns[1].id);

        assert_eq!(titles(&doing), ["d0", "d1", "t0"]);
        assert_eq!(doing[2].order, 2);
        assert_eq!(doing[2].status, "Doing");
        // The source column keeps its gap on an append-style move.
        assert_eq!(orders(&column_items(&next, &columns[0].id)), [1]);
    }

    #[test]
    fn test_move_without_index_within_same_column_is_noop() {
        let (columns, items) = board(2, 0);
        let id = column_items(&items, &columns[0].id)[0].id.clone();

        let next = move_item(&items, &columns, &id, &columns[0].id, None);
        assert_eq!(next, items);
    }

    #[test]
    fn test_move_with_index_renumbers_both_columns() {
        let (columns, items) = board(3, 2);
        let moved_id = column_items(&items, &columns[0].id)[1].id.clone();

        let next = move_item(&items, &columns, &moved_id, &columns[1].id, Some(1));

        let doing = column_items(&next, &columns[1].id);
        assert_eq!(titles(&doing), ["d0", "t1", "d1"]);
        assert_eq!(orders(&doing), [0, 1, 2]);

        let todo = column_items(&next, &columns[0].id);
        assert_eq!(titles(&todo), ["t0", "t2"]);
        assert_eq!(orders(&todo), [0, 1]);
    }

    #[test]
    fn test_move_with_index_reorders_within_a_column() {
        let (columns, items) = board(3, 0);
        let first = column_items(&items, &columns[0].id)[0].id.clone();

        let next = move_item(&items, &columns, &first, &columns[0].id, Some(2));
        let todo = column_items(&next, &columns[0].id);

        assert_eq!(titles(&todo), ["t1", "t2", "t0"]);
        assert_eq!(orders(&todo), [0, 1, 2]);
    }

    #[test]
    fn test_move_index_clamps_to_column_length() {
        let (columns, items) = board(1, 1);
        let id = column_items(&items, &columns[0].id)[0].id.clone();

        let next = move_item(&items, &columns, &id, &columns[1].id, Some(99));
        let doing = column_items(&next, &columns[1].id);

        assert_eq!(titles(&doing), ["d0", "t0"]);
        assert_eq!(orders(&doing), [0, 1]);
    }

    #[test]
    fn test_move_unknown_item_or_column_is_noop() {
        let (columns, items) = board(1, 1);
        let id = items[0].id.clone();

        let next = move_item(&items, &columns, &ItemId::from_string("ghost"), &columns[1].id, None);
        assert_eq!(next, items);

        let next = move_item(&items, &columns, &id, &ColumnId::from_string("ghost"), Some(0));
        assert_eq!(next, items);
    }

    #[test]
    fn test_move_updates_status_to_target_title() {
        let (columns, items) = board(1, 0);
        let id = items[0].id.clone();

        let next = move_item(&items, &columns, &id, &columns[1].id, Some(0));
        assert_eq!(next.iter().find(|i| i.id == id).map(|i| i.status.as_str()), Some("Doing"));
    }

    #[test]
    fn test_sync_item_status_rewrites_only_that_column() {
        let (columns, items) = board(2, 1);

        let renamed = rename_column(&columns, &columns[0].id, "Inbox");
        let synced = sync_item_status(&items, &columns[0].id, "Inbox");

        for item in column_items(&synced, &columns[0].id) {
            assert_eq!(item.status, "Inbox");
        }
        assert_eq!(column_items(&synced, &columns[1].id)[0].status, "Doing");
        assert_eq!(renamed[0].title, "Inbox");
    }

    #[test]
    fn test_column_items_sort_is_stable_on_ties() {
        let (columns, mut items) = board(2, 0);
        // Force an order tie; the earlier element must stay first.
        for item in items.iter_mut() {
            item.order = 0;
        }
        let todo = column_items(&items, &columns[0].id);
        assert_eq!(titles(&todo), ["t0", "t1"]);
    }
}
