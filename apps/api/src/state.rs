use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::drafts::DraftService;
use crate::shares::ShareService;
use crate::store::KvStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Backing store shared by drafts and shares; exposed for health reporting.
    pub store: Arc<dyn KvStore>,
    pub drafts: DraftService,
    pub shares: ShareService,
    pub analyzer: Analyzer,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn KvStore>) -> Self {
        let drafts = DraftService::new(store.clone());
        let shares = ShareService::new(store.clone(), drafts.clone());
        let analyzer = Analyzer::new(config.analysis_delay);
        Self {
            config,
            store,
            drafts,
            shares,
            analyzer,
        }
    }
}
