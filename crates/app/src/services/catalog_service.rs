//! Catalog service — use-cases for the service collection and category order.

use tokio::sync::Mutex;

use homeport_domain::document::Document;
use homeport_domain::error::HomeportError;
use homeport_domain::id::ServiceId;
use homeport_domain::render::{RenderModel, compute_render_model};
use homeport_domain::service::{Service, ServiceFields};

use crate::ports::DocumentStore;

/// Application service owning the in-memory dashboard document.
///
/// Mutations are serialised behind an async mutex (single logical writer)
/// and each one persists the full document before the next proceeds. When a
/// save fails the in-memory state keeps the attempted change while the
/// persisted document stays stale; the error is surfaced to the caller and
/// nothing is retried.
pub struct CatalogService<S> {
    store: S,
    document: Mutex<Document>,
}

impl<S: DocumentStore> CatalogService<S> {
    /// Read the persisted document and build a service around it.
    ///
    /// # Errors
    ///
    /// Returns [`HomeportError::Storage`] when the initial read fails.
    pub async fn load(store: S) -> Result<Self, HomeportError> {
        let document = store.load().await?;
        Ok(Self {
            store,
            document: Mutex::new(document),
        })
    }

    /// Snapshot of the current in-memory document.
    pub async fn document(&self) -> Document {
        self.document.lock().await.clone()
    }

    /// Re-read the persisted document, replacing the in-memory copy.
    ///
    /// Picks up writes made by other processes since the last read.
    ///
    /// # Errors
    ///
    /// Returns [`HomeportError::Storage`] when the read fails; the
    /// in-memory copy is left untouched in that case.
    pub async fn reload(&self) -> Result<Document, HomeportError> {
        let mut current = self.document.lock().await;
        *current = self.store.load().await?;
        Ok(current.clone())
    }

    /// Replace the whole document and persist it as-is.
    ///
    /// # Errors
    ///
    /// Returns [`HomeportError::Storage`] when the save fails.
    pub async fn replace_document(&self, document: Document) -> Result<(), HomeportError> {
        let mut current = self.document.lock().await;
        *current = document;
        self.store.save(current.clone()).await
    }

    /// Add a new service and persist the document.
    ///
    /// # Errors
    ///
    /// Returns [`HomeportError::Validation`] when a required field is
    /// empty, or [`HomeportError::Storage`] when the save fails.
    pub async fn add_service(&self, fields: ServiceFields) -> Result<Service, HomeportError> {
        let mut document = self.document.lock().await;
        let created = document.add_service(fields)?;
        tracing::debug!(id = %created.id, name = %created.name, "service added");
        self.store.save(document.clone()).await?;
        Ok(created)
    }

    /// Replace the writable fields of an existing service and persist.
    ///
    /// # Errors
    ///
    /// Returns [`HomeportError::Validation`] when a required field is
    /// empty, [`HomeportError::NotFound`] when `id` matches no service, or
    /// [`HomeportError::Storage`] when the save fails.
    pub async fn edit_service(
        &self,
        id: ServiceId,
        fields: ServiceFields,
    ) -> Result<Service, HomeportError> {
        let mut document = self.document.lock().await;
        let updated = document.edit_service(id, fields)?;
        tracing::debug!(id = %updated.id, "service edited");
        self.store.save(document.clone()).await?;
        Ok(updated)
    }

    /// Delete a service by id and persist. Idempotent when `id` is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`HomeportError::Storage`] when the save fails.
    pub async fn delete_service(&self, id: ServiceId) -> Result<(), HomeportError> {
        let mut document = self.document.lock().await;
        document.delete_service(id);
        tracing::debug!(id = %id, "service deleted");
        self.store.save(document.clone()).await
    }

    /// Replace the category order wholesale and persist.
    ///
    /// `new_order` must be the full current category set, never one derived
    /// from a filtered view.
    ///
    /// # Errors
    ///
    /// Returns [`HomeportError::Storage`] when the save fails.
    pub async fn reorder_categories(&self, new_order: Vec<String>) -> Result<(), HomeportError> {
        let mut document = self.document.lock().await;
        document.reorder_categories(new_order);
        self.store.save(document.clone()).await
    }

    /// Compute the display view of the current document for `filter`.
    pub async fn render(&self, filter: &str) -> RenderModel {
        let document = self.document.lock().await;
        compute_render_model(&document.services, &document.categories, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeport_domain::error::{StorageError, ValidationError};
    use std::future::Future;
    use std::sync::Mutex as StdMutex;

    /// Store stub persisting into process memory.
    struct InMemoryStore {
        saved: StdMutex<Document>,
    }

    impl Default for InMemoryStore {
        fn default() -> Self {
            Self {
                saved: StdMutex::new(Document::default()),
            }
        }
    }

    impl DocumentStore for InMemoryStore {
        fn load(&self) -> impl Future<Output = Result<Document, HomeportError>> + Send {
            let document = self.saved.lock().unwrap().clone();
            async move { Ok(document) }
        }

        fn save(&self, document: Document) -> impl Future<Output = Result<(), HomeportError>> + Send {
            *self.saved.lock().unwrap() = document;
            async { Ok(()) }
        }
    }

    /// Store whose saves always fail.
    struct BrokenStore;

    impl DocumentStore for BrokenStore {
        fn load(&self) -> impl Future<Output = Result<Document, HomeportError>> + Send {
            async { Ok(Document::default()) }
        }

        fn save(&self, _document: Document) -> impl Future<Output = Result<(), HomeportError>> + Send {
            async {
                Err(StorageError::Io(std::io::Error::other("disk full")).into())
            }
        }
    }

    fn fields(name: &str, category: &str) -> ServiceFields {
        ServiceFields {
            name: name.to_string(),
            url: format!("http://{}.local", name.to_lowercase()),
            category: category.to_string(),
            icon: String::new(),
            description: String::new(),
        }
    }

    async fn make_service() -> CatalogService<InMemoryStore> {
        CatalogService::load(InMemoryStore::default()).await.unwrap()
    }

    #[tokio::test]
    async fn should_persist_full_document_after_add() {
        let svc = make_service().await;

        svc.add_service(fields("Router", "Network")).await.unwrap();

        let persisted = svc.store.saved.lock().unwrap().clone();
        assert_eq!(persisted.services.len(), 1);
        assert_eq!(persisted.categories, vec!["Network"]);
    }

    #[tokio::test]
    async fn should_reject_add_when_required_field_missing() {
        let svc = make_service().await;
        let mut bad = fields("Router", "Network");
        bad.category = String::new();

        let result = svc.add_service(bad).await;

        assert!(matches!(
            result,
            Err(HomeportError::Validation(ValidationError::EmptyField(
                "category"
            )))
        ));
        assert!(svc.document().await.services.is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_editing_unknown_id() {
        let svc = make_service().await;
        let result = svc.edit_service(ServiceId::new(), fields("Ghost", "Nowhere")).await;
        assert!(matches!(result, Err(HomeportError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_edit_and_persist() {
        let svc = make_service().await;
        let created = svc.add_service(fields("NAS", "Storage")).await.unwrap();

        let updated = svc
            .edit_service(created.id, fields("TrueNAS", "Storage"))
            .await
            .unwrap();

        assert_eq!(updated.name, "TrueNAS");
        let persisted = svc.store.saved.lock().unwrap().clone();
        assert_eq!(persisted.services[0].name, "TrueNAS");
    }

    #[tokio::test]
    async fn should_delete_idempotently() {
        let svc = make_service().await;
        let created = svc.add_service(fields("Router", "Network")).await.unwrap();

        svc.delete_service(created.id).await.unwrap();
        svc.delete_service(created.id).await.unwrap();

        let document = svc.document().await;
        assert!(document.services.is_empty());
        assert_eq!(document.categories, vec!["Network"]);
    }

    #[tokio::test]
    async fn should_render_groups_in_reordered_order() {
        let svc = make_service().await;
        svc.add_service(fields("Router", "Network")).await.unwrap();
        svc.add_service(fields("Jellyfin", "Media")).await.unwrap();

        svc.reorder_categories(vec!["Media".to_string(), "Network".to_string()])
            .await
            .unwrap();

        let model = svc.render("").await;
        let RenderModel::Groups(groups) = model else {
            panic!("expected groups");
        };
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Media", "Network"]);
    }

    #[tokio::test]
    async fn should_keep_in_memory_change_when_save_fails() {
        let svc = CatalogService::load(BrokenStore).await.unwrap();

        let result = svc.add_service(fields("Router", "Network")).await;

        assert!(matches!(result, Err(HomeportError::Storage(_))));
        // The attempted change stays visible; the persisted copy is stale.
        assert_eq!(svc.document().await.services.len(), 1);
    }

    #[tokio::test]
    async fn should_replace_document_wholesale() {
        let svc = make_service().await;
        svc.add_service(fields("Router", "Network")).await.unwrap();

        let mut incoming = Document::default();
        incoming.add_service(fields("Jellyfin", "Media")).unwrap();
        svc.replace_document(incoming.clone()).await.unwrap();

        assert_eq!(svc.document().await, incoming);
        let persisted = svc.store.saved.lock().unwrap().clone();
        assert_eq!(persisted, incoming);
    }

    #[tokio::test]
    async fn should_reload_pick_up_external_writes() {
        let svc = make_service().await;

        let mut external = Document::default();
        external.add_service(fields("Grafana", "Monitoring")).unwrap();
        *svc.store.saved.lock().unwrap() = external.clone();

        let reloaded = svc.reload().await.unwrap();
        assert_eq!(reloaded, external);
        assert_eq!(svc.document().await, external);
    }
}
