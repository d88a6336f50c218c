// src/core/mod.rs

// The `core` module holds the whole assessment pipeline. The binary in
// `main.rs` is a thin caller: everything with behavior lives below.

/// Pipeline entry point: validate, retrieve, scan, report.
pub mod assess;

/// Runtime configuration loaded from the project config directory.
pub mod config;

/// The HTTP capability both pipeline stages retrieve content through,
/// with its `reqwest`-backed production implementation.
pub mod fetcher;

/// Static database of finding details. Detector codes resolve to report
/// messages and verbose explanations here.
pub mod knowledge_base;

/// Data structures shared across the pipeline, such as `Report`,
/// `Finding`, and the classified `FetchError` set.
pub mod models;

/// Houses the content scanning logic: one module per detector family,
/// run as an ordered chain.
pub mod scanner;

/// Syntactic URL validation, the gate in front of all network access.
pub mod validator;
