// src/lib.rs

//! URL safety pre-screening: syntactic validation, bounded content
//! retrieval with classified failure handling, and heuristic threat
//! detection over the fetched HTML.
//!
//! The library exposes one logical operation,
//! [`core::assess::run_assessment`], which returns an ordered list of
//! human-readable report lines and never fails.

pub mod core;
pub mod logging;
