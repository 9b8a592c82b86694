//! Service — one dashboard entry pointing at a self-hosted application.

use serde::{Deserialize, Serialize};

use crate::error::{HomeportError, ValidationError};
use crate::id::ServiceId;

/// One dashboard entry: a named link grouped under a category.
///
/// `icon` holds an emoji or an image URL and `description` a short blurb;
/// both are optional and persist as empty strings when unset so documents
/// keep a uniform shape on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

impl Service {
    /// Build a service from a generated id and already-validated fields.
    #[must_use]
    pub(crate) fn from_fields(id: ServiceId, fields: ServiceFields) -> Self {
        Self {
            id,
            name: fields.name,
            url: fields.url,
            category: fields.category,
            icon: fields.icon,
            description: fields.description,
        }
    }

    /// Overwrite every writable field; the id is untouched.
    ///
    /// Full-replace semantics: a field submitted empty clears the stored
    /// value, it does not fall back to the previous one.
    pub(crate) fn apply_fields(&mut self, fields: ServiceFields) {
        self.name = fields.name;
        self.url = fields.url;
        self.category = fields.category;
        self.icon = fields.icon;
        self.description = fields.description;
    }
}

/// The writable field set submitted on add and edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceFields {
    pub name: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

impl ServiceFields {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeportError::Validation`] when `name`, `url`, or
    /// `category` is empty after trimming. `icon` and `description` may be
    /// empty.
    pub fn validate(&self) -> Result<(), HomeportError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        if self.url.trim().is_empty() {
            return Err(ValidationError::EmptyField("url").into());
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyField("category").into());
        }
        Ok(())
    }
}
