//! # homeport-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON document API** (`GET`/`POST /api/services`)
//! - Gate the API behind an optional **single-user session** (login,
//!   logout, auth-status, one-time anti-forgery tokens)
//! - Serve the **static dashboard frontend** from a configured directory
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `homeport-app` (for the store port and catalog service) and
//! `homeport-domain` (for the document types used in request/response
//! mapping). Never leaks axum types into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;
