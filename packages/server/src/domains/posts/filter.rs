//! Search filtering over a fetched post collection.

use super::models::PostRecord;

/// Returns the posts whose title or body contains `query`, ignoring case.
///
/// A blank query (empty or whitespace only) returns every post. Relative
/// order of the input is always preserved and the input is never modified.
pub fn filter_posts(records: &[PostRecord], query: &str) -> Vec<PostRecord> {
    if is_blank(query) {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|post| post.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// True when the query should show the full collection.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}
