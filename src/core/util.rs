//! Common utilities

use once_cell::sync::Lazy;
use regex::Regex;
use xxhash_rust::xxh3::xxh3_64;

static APOSTROPHE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"['’]").expect("Invalid APOSTROPHE_RE regex"));

static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid NON_SLUG_RE regex"));

/// Compute a hex fingerprint of bytes (xxh3, 64-bit)
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Lower-case, trim and collapse runs of whitespace into a single space
pub fn fold_whitespace(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Build a URL-safe slug from a term: "Citizen's Oath" -> "citizens-oath"
pub fn slugify(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    let stripped = APOSTROPHE_RE.replace_all(&lowered, "");
    let dashed = NON_SLUG_RE.replace_all(&stripped, "-");
    dashed.trim_matches('-').to_string()
}

/// Truncate string to max bytes, returning (truncated_string, was_truncated)
pub fn truncate_string(s: &str, max_bytes: usize) -> (String, bool) {
    if s.len() <= max_bytes {
        return (s.to_string(), false);
    }

    // Find a valid UTF-8 boundary
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    (s[..end].to_string(), true)
}
