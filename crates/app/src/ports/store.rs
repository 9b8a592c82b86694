//! Document store port — wholesale persistence for the dashboard document.

use std::future::Future;

use homeport_domain::document::Document;
use homeport_domain::error::HomeportError;

/// Persistence boundary for the full [`Document`].
///
/// Reads and writes are wholesale: `save` replaces the entire persisted
/// document, never a delta. Concurrent writers race last-writer-wins, with
/// no locking and no conflict detection. That limitation is part of the
/// contract, not something an implementation should paper over.
pub trait DocumentStore {
    /// Read the persisted document.
    ///
    /// When the underlying resource does not exist yet, the implementation
    /// bootstraps a default empty document before the first read instead of
    /// failing; the bootstrap must be idempotent and safe under concurrent
    /// startup.
    fn load(&self) -> impl Future<Output = Result<Document, HomeportError>> + Send;

    /// Atomically replace the persisted document with `document`.
    fn save(&self, document: Document) -> impl Future<Output = Result<(), HomeportError>> + Send;
}
