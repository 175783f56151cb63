//! Document loading
//!
//! The only I/O in the crate: read the lexicon JSON once, decode it, and build
//! an immutable [`Lexicon`]. A failed load is terminal; there is no retry.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::util::hash_bytes;
use crate::lexicon::document::Lexicon;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Stable error code for result output
    pub fn code(&self) -> &'static str {
        "LOAD_FAILED"
    }
}

/// Provenance of a loaded document
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub path: String,
    pub bytes: usize,
    /// xxh3 fingerprint of the raw document
    pub fingerprint: String,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub lexicon: Lexicon,
    pub source: SourceInfo,
}

/// Load a lexicon from a file, or from stdin when `path` is `-`
pub fn load(path: &Path) -> Result<Loaded, LoadError> {
    let label = path.to_string_lossy().to_string();

    let bytes = if label == STDIN_PATH {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|source| LoadError::Read {
                path: label.clone(),
                source,
            })?;
        buf
    } else {
        std::fs::read(path).map_err(|source| LoadError::Read {
            path: label.clone(),
            source,
        })?
    };

    load_bytes(&label, &bytes)
}

/// Decode and normalize an in-memory document
pub fn load_bytes(label: &str, bytes: &[u8]) -> Result<Loaded, LoadError> {
    let raw: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
            path: label.to_string(),
            source,
        })?;

    let lexicon = Lexicon::from_value(&raw);

    debug!(
        path = label,
        bytes = bytes.len(),
        entries = lexicon.len(),
        "loaded lexicon"
    );
    if lexicon.is_empty() {
        warn!(path = label, "document holds no entries");
    }
    if lexicon.stats.dropped > 0 {
        warn!(
            path = label,
            dropped = lexicon.stats.dropped,
            "skipped records without an id or term"
        );
    }
    // Duplicates were resolved last-seen-wins; surface each overwrite
    for id in &lexicon.stats.duplicates {
        warn!(path = label, id = %id, "duplicate entry id, later record replaces earlier");
    }

    Ok(Loaded {
        lexicon,
        source: SourceInfo {
            path: label.to_string(),
            bytes: bytes.len(),
            fingerprint: hash_bytes(bytes),
            loaded_at: Utc::now(),
        },
    })
}
