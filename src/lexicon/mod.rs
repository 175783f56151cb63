//! Lexicon module - The pure core over a loaded glossary document
//!
//! Provides:
//! - Tolerant multi-shape JSON coercion into uniform entries
//! - Natural sort keys for mixed numeric/alphanumeric ids
//! - Unranked filtering and ranked search
//! - Table of contents, facets and cross-reference resolution

pub mod document;
pub mod entry;
pub mod fields;
pub mod normalize;
pub mod search;
pub mod sort_key;
pub mod toc;
