//! Search and filter engine
//!
//! Two modes over an immutable entry slice:
//! - `filter`: unranked, keeps every entry satisfying all active constraints,
//!   in input order
//! - `rank`: scores entries against a query and returns the best `RANK_LIMIT`

use serde::Serialize;

use crate::core::util::fold_whitespace;
use crate::lexicon::entry::Entry;

/// Maximum number of ranked results
pub const RANK_LIMIT: usize = 30;

pub const SCORE_ID_EXACT: u32 = 50;
pub const SCORE_TERM_EXACT: u32 = 40;
pub const SCORE_TERM_CONTAINS: u32 = 20;
pub const SCORE_DEFINITION_CONTAINS: u32 = 5;

/// Exact-match constraints for unranked filtering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Entry section must equal this value
    pub section: Option<String>,
    /// Entry tags must contain this value
    pub tag: Option<String>,
    /// First letter of the term, compared upper-cased
    pub letter: Option<char>,
    /// Match the query against id, part of speech, scope and subentries too
    pub deep: bool,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set section filter; an empty value clears it
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into()).filter(|s| !s.is_empty());
        self
    }

    /// Set tag filter; an empty value clears it
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into()).filter(|t| !t.is_empty());
        self
    }

    pub fn with_letter(mut self, letter: char) -> Self {
        self.letter = letter.to_uppercase().next();
        self
    }

    pub fn with_deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    /// Check if any filters are set
    pub fn is_empty(&self) -> bool {
        self.section.is_none() && self.tag.is_none() && self.letter.is_none()
    }

    /// Check if an entry passes all filters
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(ref section) = self.section {
            if entry.section != *section {
                return false;
            }
        }

        if let Some(ref tag) = self.tag {
            if !entry.tags.iter().any(|t| t == tag) {
                return false;
            }
        }

        if let Some(letter) = self.letter {
            let wanted = letter.to_uppercase().next();
            if entry.initial() != wanted {
                return false;
            }
        }

        true
    }
}

/// Keep entries matching the free-text query and all filters, in input order.
///
/// The query is matched case-insensitively as a substring of the entry's
/// search text; an empty query matches everything.
pub fn filter<'a>(entries: &'a [Entry], query: &str, filters: &Filters) -> Vec<&'a Entry> {
    let query = fold_whitespace(query);

    entries
        .iter()
        .filter(|entry| filters.matches(entry))
        .filter(|entry| {
            if query.is_empty() {
                return true;
            }
            let haystack = if filters.deep {
                entry.full_text()
            } else {
                entry.search_text()
            };
            haystack.contains(&query)
        })
        .collect()
}

/// An entry with its relevance score
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scored<'a> {
    pub entry: &'a Entry,
    pub score: u32,
}

/// Relevance of an entry for a lower-cased, trimmed query
pub fn score(entry: &Entry, query: &str) -> u32 {
    let id = entry.id.to_lowercase();
    let term = entry.term.to_lowercase();

    let mut score = 0;
    if id == query {
        score += SCORE_ID_EXACT;
    }
    if term == query {
        score += SCORE_TERM_EXACT;
    }
    if term.contains(query) {
        score += SCORE_TERM_CONTAINS;
    }
    if entry.short_definition.to_lowercase().contains(query)
        || entry.long_definition.to_lowercase().contains(query)
    {
        score += SCORE_DEFINITION_CONTAINS;
    }
    score
}

/// Rank entries by relevance.
///
/// Entries scoring zero are excluded; ties keep input order. An empty query
/// ranks nothing.
pub fn rank<'a>(entries: &'a [Entry], query: &str) -> Vec<Scored<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<Scored<'a>> = entries
        .iter()
        .map(|entry| Scored {
            entry,
            score: score(entry, &query),
        })
        .filter(|s| s.score > 0)
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(RANK_LIMIT);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, term: &str, definition: &str) -> Entry {
        Entry {
            id: id.to_string(),
            term: term.to_string(),
            short_definition: definition.to_string(),
            ..Entry::default()
        }
    }

    fn sample() -> Vec<Entry> {
        let mut land = entry("2", "Land", "Ground held in common.");
        land.section = "Earth".to_string();
        land.tags = vec!["soil".to_string()];

        let mut water = entry("3", "Water", "Rivers and wells.");
        water.section = "Earth".to_string();
        water.category = "Element".to_string();

        let mut justice = entry("1", "Justice", "Fairness under law.");
        justice.section = "Civic".to_string();
        justice.tags = vec!["law".to_string(), "soil".to_string()];

        vec![justice, land, water]
    }

    fn ids<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<&'a str> {
        entries.into_iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let entries = sample();
        let got = filter(&entries, "   ", &Filters::new());
        assert_eq!(ids(got), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let entries = sample();
        assert_eq!(ids(filter(&entries, "RIVERS", &Filters::new())), vec!["3"]);
        assert_eq!(ids(filter(&entries, "element", &Filters::new())), vec!["3"]);
        assert_eq!(ids(filter(&entries, "soil", &Filters::new())), vec!["1", "2"]);
    }

    #[test]
    fn test_query_whitespace_is_folded() {
        let entries = sample();
        let got = filter(&entries, "  held   in ", &Filters::new());
        assert_eq!(ids(got), vec!["2"]);
    }

    #[test]
    fn test_query_ignores_id_scope_and_part_of_speech() {
        let mut land = entry("6", "Land", "");
        land.scope = vec!["Held at majority.".to_string()];
        land.part_of_speech = "noun".to_string();
        let entries = vec![land];

        for query in ["6", "majority", "noun"] {
            assert!(filter(&entries, query, &Filters::new()).is_empty(), "{query}");
        }

        let deep = Filters::new().with_deep(true);
        for query in ["6", "majority", "noun"] {
            assert_eq!(ids(filter(&entries, query, &deep)), vec!["6"], "{query}");
        }
    }

    #[test]
    fn test_filters_are_anded() {
        let entries = sample();
        let filters = Filters::new().with_section("Earth").with_tag("soil");
        assert_eq!(ids(filter(&entries, "", &filters)), vec!["2"]);

        let filters = Filters::new().with_section("Earth");
        assert_eq!(ids(filter(&entries, "rivers", &filters)), vec!["3"]);
    }

    #[test]
    fn test_letter_filter() {
        let entries = sample();
        let filters = Filters::new().with_letter('w');
        assert_eq!(ids(filter(&entries, "", &filters)), vec!["3"]);
    }

    #[test]
    fn test_unknown_section_yields_empty() {
        let entries = sample();
        let filters = Filters::new().with_section("Nowhere");
        assert!(filter(&entries, "", &filters).is_empty());
    }

    #[test]
    fn test_empty_filter_values_pass() {
        let filters = Filters::new().with_section("").with_tag("");
        assert!(filters.is_empty());
        let entries = sample();
        assert_eq!(filter(&entries, "", &filters).len(), 3);
    }

    #[test]
    fn test_score_exact_term() {
        let justice = entry("9", "Justice", "");
        assert_eq!(
            score(&justice, "justice"),
            SCORE_TERM_EXACT + SCORE_TERM_CONTAINS
        );

        let rooted = entry("10", "Equity", "A principle rooted in justice and care.");
        assert_eq!(score(&rooted, "justice"), SCORE_DEFINITION_CONTAINS);
    }

    #[test]
    fn test_score_exact_id() {
        let e = entry("32A2", "Covenant", "");
        assert_eq!(score(&e, "32a2"), SCORE_ID_EXACT);
    }

    #[test]
    fn test_rank_orders_by_score_then_input() {
        let entries = vec![
            entry("1", "Equity", "rooted in justice"),
            entry("2", "Social justice", ""),
            entry("3", "Justice", ""),
            entry("4", "Restorative justice", ""),
            entry("5", "Land", "nothing here"),
        ];
        let ranked = rank(&entries, "  Justice ");
        let got: Vec<(&str, u32)> = ranked.iter().map(|s| (s.entry.id.as_str(), s.score)).collect();
        assert_eq!(got, vec![("3", 60), ("2", 20), ("4", 20), ("1", 5)]);
    }

    #[test]
    fn test_rank_empty_query() {
        let entries = sample();
        assert!(rank(&entries, "").is_empty());
        assert!(rank(&entries, "   ").is_empty());
    }

    #[test]
    fn test_rank_limit_and_monotonic() {
        let entries: Vec<Entry> = (0..50)
            .map(|i| {
                let term = if i % 3 == 0 { "tide".to_string() } else { format!("tide {i}") };
                entry(&i.to_string(), &term, "the tide turns")
            })
            .collect();
        let ranked = rank(&entries, "tide");
        assert_eq!(ranked.len(), RANK_LIMIT);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
