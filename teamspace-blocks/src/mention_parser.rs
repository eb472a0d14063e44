//! Inline @mention detection, insertion, and content segmentation.
//!
//! Only the most recent `@…` run of a content string is ever an active
//! query (single-active-mention model): the parser scans backward for the
//! last `@` and treats the tail after it as a query iff the tail contains
//! no whitespace. Completing a query rewrites everything from that `@` to
//! the end of the string with `@Name ` and the caller records the mention.

use crate::types::Mention;

/// An in-progress mention query: the trailing `@…` run of a content string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveQuery<'a> {
    /// Byte offset of the `@` that opened the query
    pub at: usize,
    /// Text between the `@` and the end of the content
    pub query: &'a str,
}

/// Find the active mention query, if any.
///
/// Returns `None` when the content has no `@`, or when text after the last
/// `@` already contains whitespace (the run was finished or abandoned).
pub fn active_query(content: &str) -> Option<ActiveQuery<'_>> {
    let at = content.rfind('@')?;
    let query = &content[at + 1..];
    if query.chars().any(char::is_whitespace) {
        return None;
    }
    Some(ActiveQuery { at, query })
}

/// Complete the active query with a chosen display name.
///
/// Replaces everything from the last `@` to the end of the string with
/// `@{display_name} ` (trailing space included, so typing continues after
/// the mention). Returns `None` when no query is active.
pub fn insert_mention(content: &str, display_name: &str) -> Option<String> {
    let active = active_query(content)?;
    let mut next = String::with_capacity(active.at + display_name.len() + 2);
    next.push_str(&content[..active.at]);
    next.push('@');
    next.push_str(display_name);
    next.push(' ');
    Some(next)
}

/// One piece of a content string split around mention tokens
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Literal text between mentions
    Text(&'a str),
    /// A mention whose `@Name` token was found in the content
    Mention(&'a Mention),
}

/// Split content into literal and mention segments for rendering.
///
/// Mentions are matched by their `@{display_name}` token, ordered by first
/// occurrence, then located sequentially at or after the previous match's
/// end. A mention whose token is not found is silently skipped. Empty
/// literal runs are omitted; a trailing literal (even lone whitespace) is
/// kept.
pub fn split_segments<'a>(content: &'a str, mentions: &'a [Mention]) -> Vec<Segment<'a>> {
    if mentions.is_empty() {
        if content.is_empty() {
            return Vec::new();
        }
        return vec![Segment::Text(content)];
    }

    let mut ordered: Vec<(&Mention, String)> =
        mentions.iter().map(|m| (m, m.token())).collect();
    // None sorts first, so unmatched tokens are tried (and skipped) upfront
    ordered.sort_by_key(|(_, token)| content.find(token.as_str()));

    let mut segments = Vec::new();
    let mut last = 0;

    for (mention, token) in ordered {
        let Some(found) = content[last..].find(token.as_str()).map(|i| last + i) else {
            continue;
        };
        if found > last {
            segments.push(Segment::Text(&content[last..found]));
        }
        segments.push(Segment::Mention(mention));
        last = found + token.len();
    }

    if last < content.len() {
        segments.push(Segment::Text(&content[last..]));
    }

    segments
}
