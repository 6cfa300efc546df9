use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::recommend::selector::Selector;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Bundled job catalog. Default: `JsonFileCatalog` on `CATALOG_PATH`.
    pub catalog: Arc<dyn CatalogStore>,
    /// Smaller dataset used when the primary catalog cannot be loaded.
    pub fallback_catalog: Arc<dyn CatalogStore>,
    pub selector: Selector,
    pub lookup_data_path: PathBuf,
}
