//! View module - Explicit viewer state and URL fragment routing

pub mod fragment;
pub mod state;
