use std::sync::Arc;

use crate::config::Config;
use crate::storage::ArtifactStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Generated documents awaiting download. Default: LocalArtifactStore under UPLOAD_DIR.
    pub store: Arc<dyn ArtifactStore>,
}
