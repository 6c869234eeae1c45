//! The analysis engine: taxonomy, extraction, reconciliation, and heuristics.
//! Everything here is pure, synchronous, and deterministic; `handlers` is the
//! only module that touches axum.

pub mod extractor;
pub mod handlers;
pub mod heuristics;
pub mod reconciler;
pub mod resources;
pub mod roles;
pub mod suggestions;
pub mod taxonomy;
