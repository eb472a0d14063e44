//! Pure operations over the drive tree.
//!
//! The drive is stored as a flat list of entries linked by `parent_id`;
//! every operation here takes that list by reference and returns a new
//! one. All operations are total: unknown ids and invalid move targets
//! return a list equal to the input, and walks over the parent chain are
//! cycle-guarded so corrupted data cannot hang a traversal.

use std::collections::HashSet;

use crate::types::{DriveFile, FileId};

/// The entries directly inside `parent` (`None` lists the drive root):
/// folders first, then files, each group in case-insensitive name order.
pub fn children_of(files: &[DriveFile], parent: Option<&FileId>) -> Vec<DriveFile> {
    let mut children: Vec<DriveFile> = files
        .iter()
        .filter(|f| f.parent_id.as_ref() == parent)
        .cloned()
        .collect();
    children.sort_by(|a, b| {
        b.is_folder()
            .cmp(&a.is_folder())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    children
}

/// Whether `candidate` sits somewhere below `ancestor`
pub fn is_descendant(files: &[DriveFile], candidate: &FileId, ancestor: &FileId) -> bool {
    let mut seen = HashSet::new();
    let mut current = files
        .iter()
        .find(|f| &f.id == candidate)
        .and_then(|f| f.parent_id.clone());

    while let Some(id) = current {
        if &id == ancestor {
            return true;
        }
        if !seen.insert(id.clone()) {
            return false;
        }
        current = files
            .iter()
            .find(|f| f.id == id)
            .and_then(|f| f.parent_id.clone());
    }
    false
}

/// Rename an entry
pub fn rename(files: &[DriveFile], id: &FileId, name: impl Into<String>) -> Vec<DriveFile> {
    let name = name.into();
    let mut next = files.to_vec();
    if let Some(file) = next.iter_mut().find(|f| &f.id == id) {
        file.name = name;
    }
    next
}

/// Move an entry under `new_parent` (`None` moves it to the root).
///
/// The move is a no-op when the target does not exist, is not a folder,
/// or sits at or below the entry being moved. Reparenting a folder into
/// its own subtree would detach it from the root entirely.
pub fn reparent(files: &[DriveFile], id: &FileId, new_parent: Option<&FileId>) -> Vec<DriveFile> {
    if let Some(parent_id) = new_parent {
        let Some(parent) = files.iter().find(|f| &f.id == parent_id) else {
            return files.to_vec();
        };
        if !parent.is_folder() {
            return files.to_vec();
        }
        if parent_id == id || is_descendant(files, parent_id, id) {
            return files.to_vec();
        }
    }

    let mut next = files.to_vec();
    if let Some(file) = next.iter_mut().find(|f| &f.id == id) {
        file.parent_id = new_parent.cloned();
    }
    next
}

/// Remove an entry and everything below it in one batch
pub fn delete_with_descendants(files: &[DriveFile], id: &FileId) -> Vec<DriveFile> {
    let mut doomed: HashSet<FileId> = HashSet::new();
    doomed.insert(id.clone());
    let mut frontier = vec![id.clone()];

    while let Some(parent) = frontier.pop() {
        for file in files.iter().filter(|f| f.parent_id.as_ref() == Some(&parent)) {
            if doomed.insert(file.id.clone()) {
                frontier.push(file.id.clone());
            }
        }
    }

    files
        .iter()
        .filter(|f| !doomed.contains(&f.id))
        .cloned()
        .collect()
}

/// The chain from the root down to `id`, ending with the entry itself.
/// An unknown id gives an empty path; a cycle in the parent links stops
/// the walk instead of looping.
pub fn folder_path(files: &[DriveFile], id: &FileId) -> Vec<DriveFile> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut current = files.iter().find(|f| &f.id == id);

    while let Some(file) = current {
        if !seen.insert(file.id.clone()) {
            break;
        }
        path.push(file.clone());
        current = file
            .parent_id
            .as_ref()
            .and_then(|pid| files.iter().find(|f| &f.id == pid));
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive with `Designs/Archive/old.png`, `Designs/logo.png`, and a
    /// root-level `readme.md`.
    fn drive() -> (Vec<DriveFile>, FileId, FileId) {
        let designs = DriveFile::folder("Designs");
        let archive = DriveFile::folder("Archive").with_parent(designs.id.clone());
        let logo = DriveFile::file("logo.png", 1024).with_parent(designs.id.clone());
        let old = DriveFile::file("old.png", 512).with_parent(archive.id.clone());
        let readme = DriveFile::file("readme.md", 64);

        let designs_id = designs.id.clone();
        let archive_id = archive.id.clone();
        (vec![designs, archive, logo, old, readme], designs_id, archive_id)
    }

    fn names(files: &[DriveFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_children_sort_folders_first_then_name() {
        let files = vec![
            DriveFile::file("zeta.txt", 1),
            DriveFile::folder("beta"),
            DriveFile::file("Alpha.txt", 1),
            DriveFile::folder("Alpha"),
        ];
        let children = children_of(&files, None);
        assert_eq!(names(&children), ["Alpha", "beta", "Alpha.txt", "zeta.txt"]);
    }

    #[test]
    fn test_children_of_folder_lists_only_its_entries() {
        let (files, designs, _) = drive();
        let children = children_of(&files, Some(&designs));
        assert_eq!(names(&children), ["Archive", "logo.png"]);
    }

    #[test]
    fn test_is_descendant_walks_the_parent_chain() {
        let (files, designs, archive) = drive();
        let old = files.iter().find(|f| f.name == "old.png").unwrap();

        assert!(is_descendant(&files, &old.id, &archive));
        assert!(is_descendant(&files, &old.id, &designs));
        assert!(!is_descendant(&files, &designs, &old.id));
        assert!(!is_descendant(&files, &designs, &designs));
    }

    #[test]
    fn test_rename_changes_only_the_name() {
        let (files, designs, _) = drive();
        let renamed = rename(&files, &designs, "Assets");

        let folder = renamed.iter().find(|f| f.id == designs).unwrap();
        assert_eq!(folder.name, "Assets");
        assert_eq!(folder.parent_id, None);
        assert_eq!(renamed.len(), files.len());
    }

    #[test]
    fn test_reparent_moves_an_entry() {
        let (files, _, archive) = drive();
        let readme = files.iter().find(|f| f.name == "readme.md").unwrap().id.clone();

        let moved = reparent(&files, &readme, Some(&archive));
        let entry = moved.iter().find(|f| f.id == readme).unwrap();
        assert_eq!(entry.parent_id.as_ref(), Some(&archive));

        let back = reparent(&moved, &readme, None);
        assert_eq!(back.iter().find(|f| f.id == readme).unwrap().parent_id, None);
    }

    #[test]
    fn test_reparent_into_own_subtree_is_noop() {
        let (files, designs, archive) = drive();

        // Into a strict descendant, and into itself.
        assert_eq!(reparent(&files, &designs, Some(&archive)), files);
        assert_eq!(reparent(&files, &designs, Some(&designs)), files);
    }

    #[test]
    fn test_reparent_under_a_file_is_noop() {
        let (files, _, _) = drive();
        let readme = files.iter().find(|f| f.name == "readme.md").unwrap().id.clone();
        let logo = files.iter().find(|f| f.name == "logo.png").unwrap().id.clone();

        assert_eq!(reparent(&files, &readme, Some(&logo)), files);
    }

    #[test]
    fn test_reparent_to_unknown_target_is_noop() {
        let (files, _, _) = drive();
        let readme = files.iter().find(|f| f.name == "readme.md").unwrap().id.clone();

        assert_eq!(reparent(&files, &readme, Some(&FileId::from_string("ghost"))), files);
    }

    #[test]
    fn test_delete_removes_the_whole_subtree() {
        let (files, designs, _) = drive();
        let remaining = delete_with_descendants(&files, &designs);

        assert_eq!(names(&remaining), ["readme.md"]);
    }

    #[test]
    fn test_delete_leaf_keeps_the_rest() {
        let (files, _, archive) = drive();
        let remaining = delete_with_descendants(&files, &archive);

        let mut left = names(&remaining);
        left.sort();
        assert_eq!(left, ["Designs", "logo.png", "readme.md"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let (files, _, _) = drive();
        assert_eq!(delete_with_descendants(&files, &FileId::from_string("ghost")), files);
    }

    #[test]
    fn test_folder_path_runs_root_to_entry() {
        let (files, _, _) = drive();
        let old = files.iter().find(|f| f.name == "old.png").unwrap();

        let path = folder_path(&files, &old.id);
        assert_eq!(names(&path), ["Designs", "Archive", "old.png"]);
    }

    #[test]
    fn test_folder_path_of_unknown_id_is_empty() {
        let (files, _, _) = drive();
        assert!(folder_path(&files, &FileId::from_string("ghost")).is_empty());
    }

    #[test]
    fn test_folder_path_stops_on_a_cycle() {
        let mut a = DriveFile::folder("a");
        let b = DriveFile::folder("b").with_parent(a.id.clone());
        a.parent_id = Some(b.id.clone());
        let b_id = b.id.clone();

        let path = folder_path(&[a, b], &b_id);
        assert_eq!(path.len(), 2);
    }
}
