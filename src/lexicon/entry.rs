//! Normalized lexicon entry

use serde::Serialize;

use crate::core::util::{fold_whitespace, slugify};
use crate::lexicon::sort_key::sort_key;

/// A lettered sub-sense of an entry ("a. Civic duty — ...")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subentry {
    pub label: String,
    pub term: String,
    pub definition: String,
}

/// One normalized glossary record.
///
/// String fields are never absent: a missing source value becomes `""`.
/// Field names serialize in camelCase so a serialized collection can be fed
/// back through the normalizer unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub term: String,
    pub section: String,
    pub part_of_speech: String,
    pub short_definition: String,
    pub long_definition: String,
    pub category: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subentries: Vec<Subentry>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cross_refs: Vec<String>,

    pub order: f64,
}

impl Entry {
    /// Primary gloss: the short definition, or the long one when there is no short one
    pub fn definition(&self) -> &str {
        if self.short_definition.is_empty() {
            &self.long_definition
        } else {
            &self.short_definition
        }
    }

    /// Slug used by `#term/<slug>` links
    pub fn slug(&self) -> String {
        slugify(&self.term)
    }

    /// Upper-cased first character of the trimmed term
    pub fn initial(&self) -> Option<char> {
        self.term
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
    }

    pub fn sort_key(&self) -> String {
        sort_key(&self.id)
    }

    /// Lower-cased haystack for substring search: term, both definitions,
    /// section, category and tags.
    pub fn search_text(&self) -> String {
        fold_whitespace(&self.search_parts().join(" "))
    }

    /// Search text extended with id, part of speech, scope bullets and
    /// subentries (`--deep`)
    pub fn full_text(&self) -> String {
        let mut parts = self.search_parts();
        parts.push(self.id.as_str());
        parts.push(self.part_of_speech.as_str());
        parts.extend(self.scope.iter().map(String::as_str));
        for sub in &self.subentries {
            parts.push(&sub.label);
            parts.push(&sub.term);
            parts.push(&sub.definition);
        }
        fold_whitespace(&parts.join(" "))
    }

    fn search_parts(&self) -> Vec<&str> {
        let mut parts = vec![
            self.term.as_str(),
            self.short_definition.as_str(),
            self.long_definition.as_str(),
            self.section.as_str(),
            self.category.as_str(),
        ];
        parts.extend(self.tags.iter().map(String::as_str));
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry {
            id: "32a2".to_string(),
            term: "  civic Duty".to_string(),
            short_definition: "Obligation owed to the community.".to_string(),
            long_definition: "Extended gloss.".to_string(),
            tags: vec!["Governance".to_string()],
            subentries: vec![Subentry {
                label: "a".to_string(),
                term: "Jury service".to_string(),
                definition: "Sitting in judgment.".to_string(),
            }],
            ..Entry::default()
        }
    }

    #[test]
    fn test_definition_prefers_short() {
        let mut e = entry();
        assert_eq!(e.definition(), "Obligation owed to the community.");
        e.short_definition.clear();
        assert_eq!(e.definition(), "Extended gloss.");
    }

    #[test]
    fn test_initial_and_slug() {
        let e = entry();
        assert_eq!(e.initial(), Some('C'));
        assert_eq!(e.slug(), "civic-duty");
        assert_eq!(Entry::default().initial(), None);
    }

    #[test]
    fn test_search_text_fields() {
        let mut e = entry();
        e.part_of_speech = "noun".to_string();
        e.scope = vec!["Taken at majority.".to_string()];

        let text = e.search_text();
        assert!(text.contains("civic duty"));
        assert!(text.contains("governance"));
        assert!(text.contains("extended gloss."));
        assert!(!text.contains("  "));
        assert!(!text.contains("32a2"));
        assert!(!text.contains("noun"));
        assert!(!text.contains("majority"));
        assert!(!text.contains("jury service"));
    }

    #[test]
    fn test_full_text_adds_id_scope_and_subentries() {
        let mut e = entry();
        e.part_of_speech = "noun".to_string();
        e.scope = vec!["Taken at majority.".to_string()];

        let text = e.full_text();
        assert!(text.starts_with(&e.search_text()));
        assert!(text.contains("32a2"));
        assert!(text.contains("noun"));
        assert!(text.contains("majority"));
        assert!(text.contains("jury service"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&entry()).unwrap();
        assert!(json.contains("\"shortDefinition\""));
        assert!(json.contains("\"partOfSpeech\":\"\""));
        assert!(!json.contains("crossRefs"));
    }
}
