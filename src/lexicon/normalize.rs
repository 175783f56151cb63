//! Schema normalizer
//!
//! Accepts a lexicon document in any of the shapes seen in the wild and
//! produces a uniform collection of [`Entry`] values:
//!
//! - an array of entry objects,
//! - an object holding such an array under `terms`, `entries` or `items`,
//! - an object keyed by id, each value an entry object.
//!
//! Normalization never fails. Records without a usable id or term are dropped,
//! duplicate ids are last-seen-wins, and cross-references to ids missing from
//! the collection are removed.

use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::lexicon::entry::Entry;
use crate::lexicon::fields::{self, first, Record};

/// Properties that may hold the entry list, in priority order
pub const LIST_KEYS: &[&str] = &["terms", "entries", "items"];

/// Normalized entries plus what was discarded along the way
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    pub entries: Vec<Entry>,

    /// Records skipped for lacking both id and term, or not being objects
    pub dropped: usize,

    /// Ids seen more than once, one element per overwrite
    pub duplicates: Vec<String>,
}

/// Normalize a raw document into entries
#[allow(dead_code)]
pub fn normalize(raw: &Value) -> Vec<Entry> {
    normalize_report(raw).entries
}

/// Normalize a raw document, reporting dropped records and duplicate ids
pub fn normalize_report(raw: &Value) -> Normalized {
    let (records, skipped) = raw_records(raw);

    let mut out = Normalized {
        dropped: skipped,
        ..Normalized::default()
    };
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(entry) = coerce_entry(&record) else {
            out.dropped += 1;
            continue;
        };

        // Last-seen content wins, first-seen position is kept
        match positions.get(&entry.id) {
            Some(&pos) => {
                out.duplicates.push(entry.id.clone());
                out.entries[pos] = entry;
            }
            None => {
                positions.insert(entry.id.clone(), out.entries.len());
                out.entries.push(entry);
            }
        }
    }

    for entry in &mut out.entries {
        entry.cross_refs.retain(|id| positions.contains_key(id));
    }

    out
}

/// Locate the raw entry records in a document.
///
/// Returns the records and the number of list items that were not objects.
fn raw_records(raw: &Value) -> (Vec<Cow<'_, Record>>, usize) {
    if let Some(items) = raw.as_array() {
        return objects(items);
    }

    let Some(doc) = raw.as_object() else {
        return (Vec::new(), 0);
    };

    if let Some(items) = LIST_KEYS
        .iter()
        .find_map(|key| doc.get(*key).and_then(Value::as_array))
    {
        return objects(items);
    }

    // Map of id -> entry object. The key stands in for a missing `id`.
    let mut records = Vec::new();
    let mut skipped = 0;
    for (key, value) in doc {
        match value.as_object() {
            Some(obj) => {
                let mut record = obj.clone();
                if record.get("id").map_or(true, Value::is_null) {
                    record.insert("id".to_string(), Value::String(key.clone()));
                }
                records.push(Cow::Owned(record));
            }
            None => skipped += 1,
        }
    }
    (records, skipped)
}

fn objects(items: &[Value]) -> (Vec<Cow<'_, Record>>, usize) {
    let records: Vec<_> = items
        .iter()
        .filter_map(Value::as_object)
        .map(Cow::Borrowed)
        .collect();
    let skipped = items.len() - records.len();
    (records, skipped)
}

/// Coerce one raw record, or `None` when it has neither id nor term
fn coerce_entry(record: &Record) -> Option<Entry> {
    let id = trimmed(first(record, fields::ID));
    let term = trimmed(first(record, fields::TERM));

    if id.is_empty() && term.is_empty() {
        return None;
    }

    let (id, term) = match (id.is_empty(), term.is_empty()) {
        (true, _) => (term.clone(), term),
        (_, true) => (id.clone(), id),
        _ => (id, term),
    };

    Some(Entry {
        id,
        term,
        section: first(record, fields::SECTION).unwrap_or_default(),
        part_of_speech: first(record, fields::PART_OF_SPEECH).unwrap_or_default(),
        short_definition: first(record, fields::SHORT_DEFINITION).unwrap_or_default(),
        long_definition: first(record, fields::LONG_DEFINITION).unwrap_or_default(),
        category: first(record, fields::CATEGORY).unwrap_or_default(),
        tags: first(record, fields::TAGS).unwrap_or_default(),
        scope: first(record, fields::SCOPE).unwrap_or_default(),
        subentries: first(record, fields::SUBENTRIES).unwrap_or_default(),
        cross_refs: first(record, fields::CROSS_REFS).unwrap_or_default(),
        order: first(record, fields::ORDER).unwrap_or(0.0),
    })
}

fn trimmed(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}
