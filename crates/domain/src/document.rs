//! Document — the full persisted dashboard state and its mutations.
//!
//! The document owns the service list and the ordered category list and
//! keeps the two consistent: adding or editing a service with a novel
//! category appends that category to the ordered list. Categories are never
//! removed implicitly — a category whose last service is deleted stays
//! listed, since the order itself is user-meaningful structure.

use serde::{Deserialize, Serialize};

use crate::error::{HomeportError, NotFoundError};
use crate::id::ServiceId;
use crate::service::{Service, ServiceFields};

/// The entire persisted state: services plus the ordered category list.
///
/// Service order within the list carries no meaning; category order does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Document {
    /// Add a new service under a freshly generated unique id.
    ///
    /// The service's category is appended to the ordered category list when
    /// it is not already present. Returns the created record.
    ///
    /// # Errors
    ///
    /// Returns [`HomeportError::Validation`] when a required field is empty;
    /// nothing is mutated in that case.
    pub fn add_service(&mut self, fields: ServiceFields) -> Result<Service, HomeportError> {
        fields.validate()?;
        let service = Service::from_fields(self.fresh_id(), fields);
        self.ensure_category_listed(&service.category);
        self.services.push(service.clone());
        Ok(service)
    }

    /// Replace every writable field of an existing service.
    ///
    /// The id is immutable and the service keeps its position in the list.
    /// A novel category is appended to the ordered list as in
    /// [`add_service`](Self::add_service).
    ///
    /// # Errors
    ///
    /// Returns [`HomeportError::Validation`] when a required field is empty,
    /// or [`HomeportError::NotFound`] when `id` matches no service; nothing
    /// is mutated in either case.
    pub fn edit_service(
        &mut self,
        id: ServiceId,
        fields: ServiceFields,
    ) -> Result<Service, HomeportError> {
        fields.validate()?;
        let Some(service) = self.services.iter_mut().find(|service| service.id == id) else {
            return Err(NotFoundError {
                entity: "Service",
                id: id.to_string(),
            }
            .into());
        };
        service.apply_fields(fields);
        let updated = service.clone();
        self.ensure_category_listed(&updated.category);
        Ok(updated)
    }

    /// Remove the service with the given id.
    ///
    /// Idempotent: removing an unknown id is a no-op. The service's category
    /// stays in the ordered list even when it loses its last member.
    pub fn delete_service(&mut self, id: ServiceId) {
        self.services.retain(|service| service.id != id);
    }

    /// Replace the category order wholesale with exactly `new_order`.
    ///
    /// Nothing is validated against the current services. Callers must pass
    /// the full current category set — an order computed from a filtered
    /// view would silently drop the hidden categories.
    pub fn reorder_categories(&mut self, new_order: Vec<String>) {
        self.categories = new_order;
    }

    /// Generate an id unused by any current service.
    fn fresh_id(&self) -> ServiceId {
        let mut id = ServiceId::new();
        while self.services.iter().any(|service| service.id == id) {
            id = ServiceId::new();
        }
        id
    }

    fn ensure_category_listed(&mut self, category: &str) {
        if !self.categories.iter().any(|listed| listed == category) {
            self.categories.push(category.to_string());
        }
    }
}
