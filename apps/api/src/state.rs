use std::sync::Arc;

use crate::config::Config;
use crate::matching::{JobCatalog, MatchScorer};
use crate::reference::ReferenceData;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Alias, metadata, taxonomy and resource tables. Read-only after startup.
    pub reference: Arc<ReferenceData>,
    pub catalog: Arc<JobCatalog>,
    /// Pluggable match scorer. Default: WeightedMatchScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
}
