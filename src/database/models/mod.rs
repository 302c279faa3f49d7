pub mod amenity;
pub mod branch;
pub mod venue;

// Re-export all models for easy importing
pub use amenity::*;
pub use branch::*;
pub use venue::*;

/// First non-blank value for `key` among raw query-string pairs, trimmed.
pub fn first_query_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
}
