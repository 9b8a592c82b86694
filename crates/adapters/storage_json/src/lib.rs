//! # homeport-adapter-storage-json
//!
//! Persistence adapter storing the dashboard document as a single JSON file.
//!
//! ## Responsibilities
//! - Implement the [`DocumentStore`](homeport_app::ports::DocumentStore) port
//! - Bootstrap a default empty document when the file does not exist yet
//! - Write atomically (temp file in the same directory, then rename) so a
//!   crashed save never leaves a truncated document behind
//!
//! Writes are wholesale: the entire document replaces the file on every
//! save. Concurrent writers race last-writer-wins; there is no locking and
//! no versioning. The file is pretty-printed so operators can inspect and
//! hand-edit it.

mod store;

pub use store::JsonDocumentStore;
