//! Show command - one entry (or page) selected by id or fragment

use anyhow::Result;

use crate::commands::browse::emit;
use crate::core::model::{ItemError, ResultItem, ResultSet};
use crate::core::render::RenderConfig;
use crate::lexicon::document::Lexicon;
use crate::view::state::ViewState;

/// Resolve a target (`32a2`, `#32a2`, `#term/justice`, `#preface`) to results.
///
/// The selected entry comes first, followed by the entries it
/// cross-references. Unknown targets yield a single NOT_FOUND error item.
pub fn show_target(lexicon: &Lexicon, target: &str) -> ResultSet {
    let state = ViewState::from_fragment(target, lexicon);
    let mut result_set = ResultSet::new();

    if let Some(entry) = state.selection(lexicon) {
        let mut item = ResultItem::entry(entry);
        item.link = Some(state.fragment());
        result_set.push(item);
        result_set.extend(
            lexicon
                .cross_refs(entry)
                .into_iter()
                .map(|r| ResultItem::entry(r).without_data()),
        );
        return result_set;
    }

    if let Some(page) = &state.page {
        return show_page(lexicon, page);
    }

    result_set.push(ResultItem::error(ItemError::new(
        "NOT_FOUND",
        format!("No entry matches '{}'", target),
    )));
    result_set
}

/// A static page by name
pub fn show_page(lexicon: &Lexicon, name: &str) -> ResultSet {
    let mut result_set = ResultSet::new();
    match lexicon.page(name) {
        Some(body) => result_set.push(ResultItem::page(name, body)),
        None => result_set.push(ResultItem::error(ItemError::new(
            "NOT_FOUND",
            format!("No page named '{}'", name),
        ))),
    }
    result_set
}

/// Run the show command
pub fn run_show(lexicon: &Lexicon, target: &str, config: RenderConfig) -> Result<()> {
    emit(&show_target(lexicon, target), config)
}

/// Run the page command
pub fn run_page(lexicon: &Lexicon, name: &str, config: RenderConfig) -> Result<()> {
    emit(&show_page(lexicon, name), config)
}
