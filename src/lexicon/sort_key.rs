//! Natural sort keys for heterogeneous entry ids
//!
//! Ids come in three shapes: plain integers (`6`), decimals (`1.1`) and
//! alphanumeric composites (`32a2`). `sort_key` maps each id to a string whose
//! plain lexicographic order is the intended reading order:
//!
//! ```text
//! 1      -> 000001|000000|000000
//! 1.1    -> 000001|000001|000000
//! 6c     -> 000006|999999|c00000|000000
//! 32a2   -> 000032|999999|a00000|000002
//! ???    -> 999999|999999|???
//! ```
//!
//! Every component is fixed at `SORT_KEY_WIDTH` characters. Numbers wider than
//! that, letter runs longer than that, and a major number equal to the
//! `999999` sentinel do not fit and fall into the unparseable bucket.

use once_cell::sync::Lazy;
use regex::Regex;

/// Width of every padded key component
pub const SORT_KEY_WIDTH: usize = 6;

const SENTINEL: &str = "999999";
const ZERO_BLOCK: &str = "000000";

static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)(?:\.([0-9]+))?$").expect("Invalid NUMERIC_RE regex"));

static COMPOSITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)([A-Za-z]+)([0-9]*)$").expect("Invalid COMPOSITE_RE regex")
});

/// Map an id to its sort key. Never fails; unknown shapes sort last.
pub fn sort_key(id: &str) -> String {
    let trimmed = id.trim();
    numeric_key(trimmed)
        .or_else(|| composite_key(trimmed))
        .unwrap_or_else(|| format!("{SENTINEL}|{SENTINEL}|{id}"))
}

/// `major|minor|000000`
fn numeric_key(id: &str) -> Option<String> {
    let caps = NUMERIC_RE.captures(id)?;
    let major = pad_major(caps.get(1)?.as_str())?;
    let minor = match caps.get(2) {
        Some(m) => pad_number(m.as_str())?,
        None => ZERO_BLOCK.to_string(),
    };
    Some(format!("{major}|{minor}|{ZERO_BLOCK}"))
}

/// `major|999999|letters|tail`
fn composite_key(id: &str) -> Option<String> {
    let caps = COMPOSITE_RE.captures(id)?;
    let major = pad_major(caps.get(1)?.as_str())?;
    let letters = caps.get(2)?.as_str().to_lowercase();
    if letters.len() > SORT_KEY_WIDTH {
        return None;
    }
    let tail = match caps.get(3).map(|m| m.as_str()) {
        Some(digits) if !digits.is_empty() => pad_number(digits)?,
        _ => ZERO_BLOCK.to_string(),
    };
    Some(format!(
        "{major}|{SENTINEL}|{letters:0<width$}|{tail}",
        width = SORT_KEY_WIDTH
    ))
}

fn pad_major(digits: &str) -> Option<String> {
    pad_number(digits).filter(|major| major != SENTINEL)
}

/// Zero-pad a digit run, or `None` when it does not fit the width
fn pad_number(digits: &str) -> Option<String> {
    let significant = digits.trim_start_matches('0');
    if significant.len() > SORT_KEY_WIDTH {
        return None;
    }
    Some(format!("{significant:0>width$}", width = SORT_KEY_WIDTH))
}
