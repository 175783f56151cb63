//! Unified Result Model
//!
//! Every command maps its output to this model before rendering.

use serde::Serialize;

use crate::core::util::truncate_string;
use crate::lexicon::entry::Entry;
use crate::lexicon::search::Scored;
use crate::view::fragment::Route;

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Entry,
    Hit,
    Group,
    Facet,
    Page,
    Info,
    SortKey,
    Error,
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, Serialize)]
pub struct Meta {
    /// Natural sort key of the item id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,

    /// Whether the excerpt was truncated
    pub truncated: bool,
}

/// Error information for a result
#[derive(Debug, Clone, Serialize)]
pub struct ItemError {
    pub code: String,
    pub message: String,
}

impl ItemError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The unified result item that all commands must produce
#[derive(Debug, Clone, Serialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Entry id (or facet/page name for non-entry items)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display title: the entry term, group label or page name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Relevance score for ranked hits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,

    /// Short text shown under the title (may be truncated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Shareable fragment, e.g. `#32a2`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Structured payload: the full entry, group members, facet values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Metadata
    pub meta: Meta,

    /// Errors (if any)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ItemError>,
}

impl ResultItem {
    fn empty(kind: Kind) -> Self {
        Self {
            kind,
            id: None,
            title: None,
            score: None,
            excerpt: None,
            link: None,
            data: None,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create an entry result carrying the full entry as data
    pub fn entry(entry: &Entry) -> Self {
        let mut item = Self::empty(Kind::Entry);
        item.id = Some(entry.id.clone());
        item.title = Some(entry.term.clone());
        item.excerpt = Some(entry.definition().to_string()).filter(|d| !d.is_empty());
        item.link = Some(Route::Entry(entry.id.clone()).to_string());
        item.data = serde_json::to_value(entry).ok();
        item.meta.sort_key = Some(entry.sort_key());
        item
    }

    /// Create a ranked search hit
    pub fn hit(scored: &Scored<'_>) -> Self {
        let mut item = Self::entry(scored.entry);
        item.kind = Kind::Hit;
        item.score = Some(scored.score);
        item
    }

    /// Create a table-of-contents group listing its members
    pub fn group(label: impl Into<String>, entries: &[&Entry]) -> Self {
        let members: Vec<_> = entries
            .iter()
            .map(|e| serde_json::json!({ "id": e.id, "term": e.term }))
            .collect();

        let mut item = Self::empty(Kind::Group);
        item.title = Some(label.into());
        item.data = Some(serde_json::Value::Array(members));
        item
    }

    /// Create a facet result (one filter dimension and its values)
    pub fn facet(name: impl Into<String>, values: serde_json::Value) -> Self {
        let name = name.into();
        let mut item = Self::empty(Kind::Facet);
        item.id = Some(name.clone());
        item.title = Some(name);
        item.data = Some(values);
        item
    }

    /// Create a static page result
    pub fn page(name: impl Into<String>, body: impl Into<String>) -> Self {
        let name = name.into();
        let mut item = Self::empty(Kind::Page);
        item.link = Some(Route::Page(name.clone()).to_string());
        item.id = Some(name.clone());
        item.title = Some(name);
        item.excerpt = Some(body.into());
        item
    }

    /// Create a document info result
    pub fn info(title: impl Into<String>, data: serde_json::Value) -> Self {
        let mut item = Self::empty(Kind::Info);
        item.title = Some(title.into());
        item.data = Some(data);
        item
    }

    /// Create a sort key result
    pub fn sort_key(id: impl Into<String>, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut item = Self::empty(Kind::SortKey);
        item.id = Some(id.into());
        item.excerpt = Some(key.clone());
        item.meta.sort_key = Some(key);
        item
    }

    /// Create a new error result
    pub fn error(error: ItemError) -> Self {
        let mut item = Self::empty(Kind::Error);
        item.errors.push(error);
        item
    }

    /// Drop the structured payload (compact listings)
    pub fn without_data(mut self) -> Self {
        self.data = None;
        self
    }

    /// Cap the excerpt at `max_bytes`, marking the item truncated when cut
    pub fn with_excerpt_limit(mut self, max_bytes: usize) -> Self {
        if let Some(excerpt) = self.excerpt.take() {
            let (excerpt, truncated) = truncate_string(&excerpt, max_bytes);
            self.excerpt = Some(excerpt);
            self.meta.truncated |= truncated;
        }
        self
    }

    /// Add an error
    pub fn with_error(mut self, error: ItemError) -> Self {
        self.errors.push(error);
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
