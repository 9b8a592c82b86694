//! JSON-file implementation of [`DocumentStore`].

use std::fs;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use homeport_app::ports::DocumentStore;
use homeport_domain::document::Document;
use homeport_domain::error::{HomeportError, StorageError};

/// Document store backed by a single pretty-printed JSON file.
pub struct JsonDocumentStore {
    path: PathBuf,
}

impl JsonDocumentStore {
    /// Create a store reading and writing the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonDocumentStore {
    fn load(&self) -> impl Future<Output = Result<Document, HomeportError>> + Send {
        let path = self.path.clone();
        async move {
            let document = tokio::task::spawn_blocking(move || load_sync(&path))
                .await
                .map_err(|err| StorageError::Io(std::io::Error::other(err)))??;
            Ok(document)
        }
    }

    fn save(&self, document: Document) -> impl Future<Output = Result<(), HomeportError>> + Send {
        let path = self.path.clone();
        async move {
            let shown = path.display().to_string();
            tokio::task::spawn_blocking(move || write_atomic(&path, &document))
                .await
                .map_err(|err| StorageError::Io(std::io::Error::other(err)))??;
            tracing::debug!(path = %shown, "document saved");
            Ok(())
        }
    }
}

fn load_sync(path: &Path) -> Result<Document, StorageError> {
    if !path.exists() {
        // Idempotent bootstrap: concurrent startups each write the same
        // default atomically, so whichever rename lands last is identical.
        write_atomic(path, &Document::default())?;
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_atomic(path: &Path, document: &Document) -> Result<(), StorageError> {
    let parent = parent_dir(path);
    fs::create_dir_all(parent)?;
    let json = serde_json::to_string_pretty(document)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(json.as_bytes())?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| StorageError::Io(err.error))?;
    Ok(())
}

/// A bare file name has no parent component; treat it as the working
/// directory.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
