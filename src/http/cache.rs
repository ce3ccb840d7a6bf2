//! Conditional request support
//!
//! `ETag` values are derived from file content with the standard hasher,
//! which is plenty for a development server revalidating local edits.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute the quoted `ETag` for a body.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Whether the client's `If-None-Match` header revalidates against `etag`.
///
/// Accepts a comma-separated list of tags and the `*` wildcard.
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}
