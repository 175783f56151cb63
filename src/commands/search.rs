//! Ranked search command

use anyhow::Result;
use tracing::debug;

use crate::commands::browse::emit;
use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::RenderConfig;
use crate::lexicon::document::Lexicon;
use crate::view::state::ViewState;

/// Rank entries against the view's query
pub fn search_entries(lexicon: &Lexicon, state: &ViewState, max_bytes: usize) -> ResultSet {
    let ranked = state.ranked(lexicon);
    debug!(query = %state.query, hits = ranked.len(), "ranked search");

    ranked
        .iter()
        .map(|scored| ResultItem::hit(scored).with_excerpt_limit(max_bytes))
        .collect()
}

/// Run the search command
pub fn run_search(
    lexicon: &Lexicon,
    state: &ViewState,
    max_bytes: usize,
    config: RenderConfig,
) -> Result<()> {
    emit(&search_entries(lexicon, state, max_bytes), config)
}
