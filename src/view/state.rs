//! Viewer state
//!
//! The presentation layer owns one `ViewState` per session. It holds the
//! active query and filters plus the current selection, and derives every
//! visible list from the immutable [`Lexicon`] on demand.

use serde::Serialize;

use crate::lexicon::document::Lexicon;
use crate::lexicon::entry::Entry;
use crate::lexicon::search::{filter, rank, Filters, Scored};
use crate::view::fragment::Route;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub query: String,
    pub section: String,
    pub tag: String,
    pub letter: Option<char>,

    /// Widen the query to ids, part of speech, scope and subentries
    pub deep: bool,

    /// Selected entry id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,

    /// Selected static page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the selection carried by a fragment.
    ///
    /// A fragment naming an unknown entry restores nothing; the fragment is
    /// never authoritative over the lexicon.
    pub fn from_fragment(fragment: &str, lexicon: &Lexicon) -> Self {
        let mut state = Self::new();
        match Route::parse(fragment) {
            Route::Page(page) => state.page = Some(page),
            Route::Home => {}
            route => {
                if let Some(entry) = lexicon.resolve(&route) {
                    state.select(entry.id.as_str());
                }
            }
        }
        state
    }

    /// Fragment to write back after a selection change
    pub fn fragment(&self) -> String {
        let route = match (&self.selected, &self.page) {
            (Some(id), _) => Route::Entry(id.clone()),
            (None, Some(page)) => Route::Page(page.clone()),
            (None, None) => Route::Home,
        };
        route.to_string()
    }

    /// Select an entry, leaving any page view
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
        self.page = None;
    }

    pub fn filters(&self) -> Filters {
        let mut filters = Filters::new()
            .with_section(self.section.as_str())
            .with_tag(self.tag.as_str())
            .with_deep(self.deep);
        if let Some(letter) = self.letter {
            filters = filters.with_letter(letter);
        }
        filters
    }

    /// Entries passing the current query and filters, in canonical order
    pub fn visible<'a>(&self, lexicon: &'a Lexicon) -> Vec<&'a Entry> {
        filter(lexicon.entries(), &self.query, &self.filters())
    }

    /// Ranked matches for the current query
    pub fn ranked<'a>(&self, lexicon: &'a Lexicon) -> Vec<Scored<'a>> {
        rank(lexicon.entries(), &self.query)
    }

    /// The selected entry, if it still exists
    pub fn selection<'a>(&self, lexicon: &'a Lexicon) -> Option<&'a Entry> {
        self.selected.as_deref().and_then(|id| lexicon.get(id))
    }
}
