//! # homeport-domain
//!
//! Pure domain model for the homeport personal dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Services** (dashboard entries: name, URL, category, icon, description)
//! - Define the **Document** (the full persisted state: the service list plus
//!   the ordered category list) and its mutation operations
//! - Compute the **render model** (the filtered, grouped, ordered view)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod document;
pub mod error;
pub mod id;
pub mod render;
pub mod service;
