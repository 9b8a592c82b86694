//! # homeport-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`DocumentStore` port** that persistence adapters implement
//! - Provide the **`CatalogService`** use-case object: it owns the in-memory
//!   [`Document`](homeport_domain::document::Document), applies mutations one
//!   at a time, and persists the full document after every mutation
//!
//! ## Dependency rule
//! Depends on `homeport-domain` only (plus `tokio::sync` for the catalog
//! mutex). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod ports;
pub mod services;
