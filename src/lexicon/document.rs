//! Lexicon document
//!
//! A `Lexicon` is the immutable result of one load: document metadata, the
//! section list, static pages and the normalized entries in canonical order.

use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::lexicon::entry::Entry;
use crate::lexicon::fields::{self, first, Candidates, Record};
use crate::lexicon::normalize::normalize_report;
use crate::view::fragment::Route;

/// Document-level metadata (title block)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconMeta {
    pub title: String,
    pub subtitle: String,
    pub version: String,
    pub status: String,
    pub governing_authority: String,
    pub steward: String,
    pub year: String,
}

/// A section of the table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionInfo {
    pub id: String,
    pub title: String,
}

/// Counts of what normalization discarded
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizeStats {
    pub dropped: usize,
    pub duplicates: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub meta: LexiconMeta,
    pub sections: Vec<SectionInfo>,
    pub pages: BTreeMap<String, String>,
    pub stats: NormalizeStats,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Lexicon {
    /// Build a lexicon from a decoded JSON document. Never fails.
    pub fn from_value(raw: &Value) -> Self {
        let normalized = normalize_report(raw);
        let mut entries = normalized.entries;
        sort_entries(&mut entries);

        let index = entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.id.clone(), pos))
            .collect();

        let doc = raw.as_object();
        let sections = doc
            .and_then(|d| d.get("sections"))
            .and_then(section_list)
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| derive_sections(&entries));

        Self {
            meta: doc.map(read_meta).unwrap_or_default(),
            sections,
            pages: doc.map(read_pages).unwrap_or_default(),
            stats: NormalizeStats {
                dropped: normalized.dropped,
                duplicates: normalized.duplicates,
            },
            entries,
            index,
        }
    }

    /// Entries in canonical order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// Find the first entry whose term slug matches
    pub fn find_by_slug(&self, slug: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.slug() == slug)
    }

    /// Map a fragment route to the entry it selects
    pub fn resolve(&self, route: &Route) -> Option<&Entry> {
        match route {
            Route::Entry(id) => self.get(id).or_else(|| self.find_by_slug(id)),
            Route::Term(slug) => self.find_by_slug(slug).or_else(|| self.get(slug)),
            Route::Home | Route::Page(_) => None,
        }
    }

    /// Entries an entry cross-references, in reference order
    pub fn cross_refs(&self, entry: &Entry) -> Vec<&Entry> {
        entry
            .cross_refs
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// Display title for a section id, falling back to the id itself
    pub fn section_title<'a>(&'a self, section: &'a str) -> &'a str {
        self.sections
            .iter()
            .find(|s| s.id == section)
            .map_or(section, |s| s.title.as_str())
    }

    pub fn page(&self, name: &str) -> Option<&str> {
        self.pages.get(name).map(String::as_str)
    }
}

/// Canonical order: `order`, then id sort key, then original position
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_cached_key(|e| (OrderKey(e.order), e.sort_key()));
}

/// Total order over `f64` for use in sort keys
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrderKey(f64);

impl Eq for OrderKey {}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn read_meta(doc: &Record) -> LexiconMeta {
    let Some(meta) = doc.get("meta").and_then(Value::as_object) else {
        return LexiconMeta::default();
    };
    let get = |key: &str| meta.get(key).and_then(fields::text).unwrap_or_default();

    LexiconMeta {
        title: get("title"),
        subtitle: get("subtitle"),
        version: get("version"),
        status: get("status"),
        governing_authority: get("governingAuthority"),
        steward: get("steward"),
        year: get("year"),
    }
}

fn read_pages(doc: &Record) -> BTreeMap<String, String> {
    doc.get("pages")
        .and_then(Value::as_object)
        .map(|pages| {
            pages
                .iter()
                .filter_map(|(name, body)| Some((name.clone(), fields::text(body)?)))
                .collect()
        })
        .unwrap_or_default()
}

fn section_list(value: &Value) -> Option<Vec<SectionInfo>> {
    const SECTION_ID: Candidates<String> = &[("id", fields::text), ("key", fields::text)];
    const SECTION_TITLE: Candidates<String> =
        &[("title", fields::text), ("name", fields::text)];

    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| match item {
                Value::Object(record) => {
                    let id = first(record, SECTION_ID)?;
                    let title = first(record, SECTION_TITLE).unwrap_or_else(|| id.clone());
                    Some(SectionInfo { id, title })
                }
                other => fields::text(other).map(|id| SectionInfo {
                    title: id.clone(),
                    id,
                }),
            })
            .collect(),
    )
}

/// Distinct non-empty entry sections in first-seen order
fn derive_sections(entries: &[Entry]) -> Vec<SectionInfo> {
    let mut seen = std::collections::HashSet::new();
    entries
        .iter()
        .filter(|e| !e.section.is_empty() && seen.insert(e.section.as_str()))
        .map(|e| SectionInfo {
            id: e.section.clone(),
            title: e.section.clone(),
        })
        .collect()
}
