//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats
//! - Text utilities (slugs, whitespace folding, truncation, fingerprints)

pub mod model;
pub mod render;
pub mod util;
