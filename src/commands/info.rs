//! Document info and sort-key inspection

use anyhow::Result;

use crate::commands::browse::emit;
use crate::core::model::{ItemError, ResultItem, ResultSet};
use crate::core::render::RenderConfig;
use crate::lexicon::sort_key::sort_key;
use crate::source::load::Loaded;

/// Summarize a loaded document: provenance, counts and data-quality warnings
pub fn document_info(loaded: &Loaded) -> ResultSet {
    let lexicon = &loaded.lexicon;
    let data = serde_json::json!({
        "path": loaded.source.path,
        "bytes": loaded.source.bytes,
        "fingerprint": loaded.source.fingerprint,
        "loaded_at": loaded.source.loaded_at.to_rfc3339(),
        "meta": lexicon.meta,
        "entries": lexicon.len(),
        "sections": lexicon.sections,
        "pages": lexicon.pages.keys().collect::<Vec<_>>(),
        "dropped": lexicon.stats.dropped,
        "duplicates": lexicon.stats.duplicates,
    });

    let mut item = ResultItem::info("document", data);
    if lexicon.stats.dropped > 0 {
        item = item.with_error(ItemError::new(
            "DROPPED_RECORDS",
            format!(
                "{} record(s) had neither an id nor a term",
                lexicon.stats.dropped
            ),
        ));
    }
    for id in &lexicon.stats.duplicates {
        item = item.with_error(ItemError::new(
            "DUPLICATE_ID",
            format!("id '{}' appears more than once; the last record was kept", id),
        ));
    }

    let mut result_set = ResultSet::new();
    result_set.push(item);
    result_set
}

/// Sort keys for the given ids, in sorted order
pub fn sort_keys(ids: &[String]) -> ResultSet {
    let mut keyed: Vec<(String, &String)> = ids.iter().map(|id| (sort_key(id), id)).collect();
    keyed.sort();
    keyed
        .into_iter()
        .map(|(key, id)| ResultItem::sort_key(id.as_str(), key))
        .collect()
}

/// Run the info command
pub fn run_info(loaded: &Loaded, config: RenderConfig) -> Result<()> {
    emit(&document_info(loaded), config)
}

/// Run the sort-key command
pub fn run_sort_keys(ids: &[String], config: RenderConfig) -> Result<()> {
    emit(&sort_keys(ids), config)
}
