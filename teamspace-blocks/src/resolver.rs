//! Mention candidate resolution.
//!
//! Given the active query and the three candidate pools the host supplies
//! (team users, posts, projects), produce the ranked, capped list the
//! mention menu shows. Matching is case-insensitive substring containment
//! against display names; an empty query matches everything, which is the
//! intended "just typed @" behavior, not a bug.

use crate::types::Mention;

/// Maximum number of candidates [`resolve`] returns
pub const MAX_CANDIDATES: usize = 10;

/// Resolve a query against the three candidate pools.
///
/// All matching users come first (in pool order), then matching posts,
/// then matching projects; the combined list is truncated to
/// [`MAX_CANDIDATES`].
pub fn resolve(
    query: &str,
    users: &[Mention],
    posts: &[Mention],
    projects: &[Mention],
) -> Vec<Mention> {
    let needle = query.to_lowercase();
    users
        .iter()
        .chain(posts.iter())
        .chain(projects.iter())
        .filter(|candidate| candidate.display_name.to_lowercase().contains(&needle))
        .take(MAX_CANDIDATES)
        .cloned()
        .collect()
}
