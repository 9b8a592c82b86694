//! Shared application state for axum handlers.

use std::sync::Arc;

use homeport_app::ports::DocumentStore;
use homeport_app::services::catalog_service::CatalogService;

use crate::auth::SessionGate;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone` —
/// only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Catalog service owning the in-memory document.
    pub catalog: Arc<CatalogService<S>>,
    /// Optional single-user session gate; `None` leaves the API open.
    pub sessions: Option<Arc<SessionGate>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            sessions: self.sessions.as_ref().map(Arc::clone),
        }
    }
}

impl<S> AppState<S>
where
    S: DocumentStore + Send + Sync + 'static,
{
    /// Create a new application state from the catalog service and an
    /// optional session gate.
    pub fn new(catalog: CatalogService<S>, sessions: Option<SessionGate>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: sessions.map(Arc::new),
        }
    }
}
