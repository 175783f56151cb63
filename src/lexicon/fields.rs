//! Field coercion helpers
//!
//! Every target field has an ordered list of candidate source keys, each paired
//! with an extractor. The first candidate whose key exists and whose value the
//! extractor accepts wins. A missing key, `null`, or a value of the wrong shape
//! counts as absent; `0` and `""` are present values.

use serde_json::{Map, Value};

use crate::lexicon::entry::Subentry;

/// A raw JSON object
pub type Record = Map<String, Value>;

/// Converts a JSON value to a field value, or rejects it as absent
pub type Extract<T> = fn(&Value) -> Option<T>;

/// An ordered list of (source key, extractor) pairs
pub type Candidates<T> = &'static [(&'static str, Extract<T>)];

pub const ID: Candidates<String> = &[
    ("id", text),
    ("key", text),
    ("termId", text),
    ("number", text),
];

pub const TERM: Candidates<String> = &[
    ("title", text),
    ("term", text),
    ("name", text),
    ("heading", text),
];

pub const SECTION: Candidates<String> = &[("section", text), ("group", text), ("category", text)];

pub const CATEGORY: Candidates<String> = &[("category", text)];

// `pos` is a part-of-speech tag in some documents and an ordering number in others
pub const PART_OF_SPEECH: Candidates<String> = &[
    ("partOfSpeech", text),
    ("pos", word),
    ("meta", string),
    ("type", text),
];

pub const SHORT_DEFINITION: Candidates<String> = &[
    ("shortDefinition", text),
    ("definition", text),
    ("summary", text),
    ("gloss", text),
];

pub const LONG_DEFINITION: Candidates<String> = &[
    ("longDefinition", text),
    ("body", text),
    ("text", text),
    ("content", text),
];

pub const TAGS: Candidates<Vec<String>> = &[("tags", list), ("keywords", list)];

pub const SCOPE: Candidates<Vec<String>> = &[("scope", lines)];

pub const SUBENTRIES: Candidates<Vec<Subentry>> =
    &[("subentries", subentries), ("subEntries", subentries)];

pub const CROSS_REFS: Candidates<Vec<String>> = &[
    ("crossRefs", list),
    ("crossrefs", list),
    ("seeAlso", list),
    ("related", list),
];

pub const ORDER: Candidates<f64> = &[("order", number), ("pos", number), ("index", number)];

/// Return the first present candidate value
pub fn first<T>(record: &Record, candidates: Candidates<T>) -> Option<T> {
    candidates
        .iter()
        .find_map(|(key, extract)| record.get(*key).and_then(extract))
}

/// Scalars rendered as text; arrays, objects and null are rejected
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Strings only
pub fn string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// Strings that do not read as a number
pub fn word(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| s.trim().parse::<f64>().is_err())
        .map(str::to_string)
}

/// Finite numbers, either JSON numbers or numeric strings
pub fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// An array of scalars, or a comma-separated string
pub fn list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(text)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        Value::String(s) => Some(
            s.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
}

/// An array of scalars, or a single string taken as one item
pub fn lines(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(items.iter().filter_map(text).collect()),
        Value::String(s) if s.trim().is_empty() => Some(Vec::new()),
        Value::String(s) => Some(vec![s.clone()]),
        _ => None,
    }
}

/// An array of `{label, term, definition}` objects; other items are skipped
pub fn subentries(value: &Value) -> Option<Vec<Subentry>> {
    const LABEL: Candidates<String> = &[("label", text), ("letter", text)];
    const SUB_TERM: Candidates<String> = &[("term", text), ("title", text), ("name", text)];
    const SUB_DEFINITION: Candidates<String> =
        &[("definition", text), ("text", text), ("body", text)];

    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_object)
            .map(|record| Subentry {
                label: first(record, LABEL).unwrap_or_default(),
                term: first(record, SUB_TERM).unwrap_or_default(),
                definition: first(record, SUB_DEFINITION).unwrap_or_default(),
            })
            .collect(),
    )
}
