//! Browsing - list, toc and facets commands

use anyhow::{Context, Result};
use std::io;
use tracing::debug;

use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::lexicon::document::Lexicon;
use crate::lexicon::toc::{build_toc, Facets};
use crate::view::state::ViewState;

/// Default excerpt cap for listings
pub const DEFAULT_EXCERPT_BYTES: usize = 280;

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Canonical order: `order` field, then natural id order
    #[default]
    Key,
    /// Alphabetical by term
    Term,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "key" | "id" => Ok(SortOrder::Key),
            "term" | "alpha" => Ok(SortOrder::Term),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// List entries passing the view's query and filters
pub fn list_entries(
    lexicon: &Lexicon,
    state: &ViewState,
    sort: SortOrder,
    max_bytes: usize,
) -> ResultSet {
    let filters = state.filters();
    let mut visible = state.visible(lexicon);

    if sort == SortOrder::Term {
        visible.sort_by_cached_key(|e| e.term.to_lowercase());
    }

    debug!(
        query = %state.query,
        filtered = !filters.is_empty(),
        matched = visible.len(),
        total = lexicon.len(),
        "listed entries"
    );

    visible
        .into_iter()
        .map(|entry| ResultItem::entry(entry).with_excerpt_limit(max_bytes))
        .collect()
}

/// Table of contents over the visible entries, one group per section
pub fn list_toc(lexicon: &Lexicon, state: &ViewState) -> ResultSet {
    build_toc(state.visible(lexicon))
        .into_iter()
        .map(|group| ResultItem::group(lexicon.section_title(&group.label), &group.entries))
        .collect()
}

/// Distinct sections, tags and initial letters
pub fn list_facets(lexicon: &Lexicon) -> ResultSet {
    let facets = Facets::collect(lexicon.entries());

    let mut result_set = ResultSet::new();
    result_set.push(ResultItem::facet("sections", serde_json::json!(facets.sections)));
    result_set.push(ResultItem::facet("tags", serde_json::json!(facets.tags)));
    result_set.push(ResultItem::facet("letters", serde_json::json!(facets.letters)));
    result_set
}

/// Run the list command
pub fn run_list(
    lexicon: &Lexicon,
    state: &ViewState,
    sort: SortOrder,
    max_bytes: usize,
    config: RenderConfig,
) -> Result<()> {
    let result_set = list_entries(lexicon, state, sort, max_bytes);
    emit(&result_set, config)
}

/// Run the toc command
pub fn run_toc(lexicon: &Lexicon, state: &ViewState, config: RenderConfig) -> Result<()> {
    emit(&list_toc(lexicon, state), config)
}

/// Run the facets command
pub fn run_facets(lexicon: &Lexicon, config: RenderConfig) -> Result<()> {
    emit(&list_facets(lexicon), config)
}

/// Render a result set to stdout
pub fn emit(result_set: &ResultSet, config: RenderConfig) -> Result<()> {
    if result_set.is_empty() {
        debug!(format = ?config.format, "no results");
    } else {
        debug!(items = result_set.len(), format = ?config.format, "rendering results");
    }
    Renderer::with_config(config)
        .render_to(result_set, io::stdout().lock())
        .context("Failed to write output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Kind;
    use serde_json::json;

    fn lexicon() -> Lexicon {
        Lexicon::from_value(&json!({"entries": [
            {"id": "10", "term": "Water", "section": "Earth", "definition": "Rivers and wells."},
            {"id": "2", "term": "Land", "section": "Earth", "tags": ["soil"]},
            {"id": "1", "term": "Justice", "definition": "Fairness under law."}
        ]}))
    }

    fn ids(result_set: &ResultSet) -> Vec<&str> {
        result_set
            .items
            .iter()
            .filter_map(|i| i.id.as_deref())
            .collect()
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("term".parse::<SortOrder>().unwrap(), SortOrder::Term);
        assert_eq!("KEY".parse::<SortOrder>().unwrap(), SortOrder::Key);
        assert!("random".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_list_canonical_order() {
        let set = list_entries(&lexicon(), &ViewState::new(), SortOrder::Key, 100);
        assert_eq!(ids(&set), vec!["1", "2", "10"]);
        assert!(set.items.iter().all(|i| i.kind == Kind::Entry));
    }

    #[test]
    fn test_list_by_term() {
        let set = list_entries(&lexicon(), &ViewState::new(), SortOrder::Term, 100);
        assert_eq!(ids(&set), vec!["1", "2", "10"]);

        let mut state = ViewState::new();
        state.section = "Earth".to_string();
        let set = list_entries(&lexicon(), &state, SortOrder::Term, 100);
        assert_eq!(ids(&set), vec!["2", "10"]);
    }

    #[test]
    fn test_list_truncates_excerpts() {
        let set = list_entries(&lexicon(), &ViewState::new(), SortOrder::Key, 5);
        assert_eq!(set.items[0].excerpt.as_deref(), Some("Fairn"));
        assert!(set.items[0].meta.truncated);
    }

    #[test]
    fn test_toc_groups() {
        let set = list_toc(&lexicon(), &ViewState::new());
        let titles: Vec<_> = set.items.iter().filter_map(|i| i.title.as_deref()).collect();
        assert_eq!(titles, vec!["Terms", "Earth"]);
    }

    #[test]
    fn test_toc_follows_query() {
        let mut state = ViewState::new();
        state.query = "rivers".to_string();
        let set = list_toc(&lexicon(), &state);
        assert_eq!(set.len(), 1);
        assert_eq!(set.items[0].data.as_ref().unwrap()[0]["id"], "10");
    }

    #[test]
    fn test_facets() {
        let set = list_facets(&lexicon());
        assert_eq!(ids(&set), vec!["sections", "tags", "letters"]);
        assert_eq!(set.items[2].data, Some(json!(["J", "L", "W"])));
    }
}
