//! Cache key generation utilities
//!
//! This module provides consistent cache key generation across the
//! application. Collection keys are derived from the full parameter set of a
//! request, canonicalized so that the order in which the client supplied the
//! parameters never changes the key.

use std::collections::BTreeMap;

/// Canonicalize an arbitrary parameter set into a deterministic cache key.
///
/// The map is serialized as JSON with keys in lexicographic order (BTreeMap
/// iteration order), so two requests carrying the same (key, value) pairs in
/// any order produce the same key. JSON escaping keeps the encoding
/// structural: `{"a":"1,2"}` and `{"2":"","a":"1"}` can never collide the way
/// naive string joining would.
pub fn canonicalize(prefix: &str, params: &BTreeMap<String, String>) -> String {
    format!(
        "{}:{}",
        prefix,
        serde_json::to_string(params).unwrap_or_default()
    )
}

/// Generate cache key for a single product lookup
pub fn product_detail(id: &str) -> String {
    format!("product:{}", id)
}
