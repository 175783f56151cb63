//! URL fragment codec
//!
//! Viewer links carry the current selection after `#`:
//! - `#term/<slug>` selects an entry by the slug of its term
//! - `#<percent-encoded id>` selects an entry by id
//! - `#home`, `#preface`, `#rules`, `#afterword`, `#citation` select a view

use std::fmt;

/// Static page views
pub const PAGES: &[&str] = &["preface", "rules", "afterword", "citation"];

const TERM_PREFIX: &str = "term/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Page(String),
    Term(String),
    Entry(String),
}

impl Route {
    /// Parse a fragment, with or without the leading `#`
    pub fn parse(fragment: &str) -> Self {
        let raw = fragment.trim().trim_start_matches('#');

        if let Some(rest) = raw.strip_prefix(TERM_PREFIX) {
            let slug = rest.split('/').next().unwrap_or_default();
            return Route::Term(decode(slug));
        }

        let decoded = decode(raw);
        match decoded.as_str() {
            "" | "home" => Route::Home,
            page if PAGES.contains(&page) => Route::Page(page.to_string()),
            _ => Route::Entry(decoded),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "#home"),
            Route::Page(page) => write!(f, "#{}", page),
            Route::Term(slug) => write!(f, "#{}{}", TERM_PREFIX, urlencoding::encode(slug)),
            Route::Entry(id) => write!(f, "#{}", urlencoding::encode(id)),
        }
    }
}

/// Percent-decode, keeping the raw text when it is not valid UTF-8 after decoding
fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
