//! Commands module - Handlers behind each CLI subcommand
//!
//! Each handler builds a ResultSet from the loaded lexicon (testable without
//! I/O) and a `run_*` wrapper renders it to stdout.

pub mod browse;
pub mod info;
pub mod search;
pub mod show;
