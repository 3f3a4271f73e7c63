use std::sync::Arc;

use annum_catalog::source::CatalogSource;
use annum_core::manifest::Manifest;

/// Shared application state passed to all handlers. Both fields are
/// immutable once the server is up.
#[derive(Clone)]
pub struct AppState {
    pub manifest: Arc<Manifest>,
    pub source: Arc<dyn CatalogSource>,
}
