//! One predicate per SearchRequest field. Each is vacuously true when its
//! constraint is absent or empty.

use chrono::{DateTime, Utc};

use crate::document::Document;
use crate::types::identifiers::AuthorId;

/// Case-insensitive starts-with against at least one prefix, lowercasing
/// both sides.
pub fn matches_title_prefixes(document: &Document, prefixes: &[String]) -> bool {
    if prefixes.is_empty() {
        return true;
    }
    let title = document.title.to_lowercase();
    prefixes
        .iter()
        .any(|prefix| title.starts_with(&prefix.to_lowercase()))
}

/// Case-insensitive substring match against at least one needle.
pub fn matches_contains_contents(document: &Document, needles: &[String]) -> bool {
    if needles.is_empty() {
        return true;
    }
    let content = document.content.to_lowercase();
    needles
        .iter()
        .any(|needle| content.contains(&needle.to_lowercase()))
}

/// Exact, case-sensitive membership of the document's author id.
pub fn matches_author_ids(document: &Document, author_ids: &[AuthorId]) -> bool {
    author_ids.is_empty() || author_ids.contains(&document.author.id)
}

/// Inclusive lower bound. A stored document without a `created` timestamp
/// (possible on the explicit-id first-insert path) fails any non-vacuous
/// range predicate: there is nothing to compare.
pub fn matches_created_from(document: &Document, from: Option<DateTime<Utc>>) -> bool {
    match from {
        None => true,
        Some(from) => document.created.is_some_and(|created| created >= from),
    }
}

/// Inclusive upper bound.
pub fn matches_created_to(document: &Document, to: Option<DateTime<Utc>>) -> bool {
    match to {
        None => true,
        Some(to) => document.created.is_some_and(|created| created <= to),
    }
}
