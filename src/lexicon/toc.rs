//! Table of contents and facet lists

use serde::Serialize;
use std::collections::BTreeSet;

use crate::lexicon::entry::Entry;

/// Group label for entries without a section
pub const DEFAULT_GROUP: &str = "Terms";

/// Entries sharing a section label
#[derive(Debug, Clone, Serialize)]
pub struct TocGroup<'a> {
    pub label: String,
    pub entries: Vec<&'a Entry>,
}

/// Group entries by section, groups in first-seen order, entries in input order
pub fn build_toc<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<TocGroup<'a>> {
    let mut groups: Vec<TocGroup<'a>> = Vec::new();

    for entry in entries {
        let label = if entry.section.is_empty() {
            DEFAULT_GROUP
        } else {
            entry.section.as_str()
        };

        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.entries.push(entry),
            None => groups.push(TocGroup {
                label: label.to_string(),
                entries: vec![entry],
            }),
        }
    }

    groups
}

/// Distinct values available to the section, tag and letter filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub sections: Vec<String>,
    pub tags: Vec<String>,
    pub letters: Vec<char>,
}

impl Facets {
    pub fn collect(entries: &[Entry]) -> Self {
        let sections = unique_sorted(entries.iter().map(|e| e.section.as_str()));
        let tags = unique_sorted(entries.iter().flat_map(|e| e.tags.iter().map(String::as_str)));
        let letters: BTreeSet<char> = entries.iter().filter_map(Entry::initial).collect();

        Self {
            sections,
            tags,
            letters: letters.into_iter().collect(),
        }
    }
}

/// Non-empty distinct values, ordered case-insensitively
fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.filter(|v| !v.is_empty()).collect();
    let mut out: Vec<String> = set.into_iter().map(str::to_string).collect();
    out.sort_by_cached_key(|v| v.to_lowercase());
    out
}
