use std::sync::Arc;

use crate::analysis::extractor::SkillExtractor;
use crate::analysis::taxonomy::Taxonomy;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The taxonomy is built once at startup and never mutated afterward, so it is
/// shared read-only across concurrent requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub taxonomy: Arc<Taxonomy>,
    /// Pluggable extractor seam. Default (and only) backend: KeywordExtractor.
    pub extractor: Arc<dyn SkillExtractor>,
    pub config: Config,
}
