//! Source module - Reads the lexicon document from disk or stdin

pub mod load;
