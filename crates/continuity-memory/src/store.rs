//! Knowledge store implementations.

use crate::error::MemoryError;
use crate::model::MemoryRecord;
use crate::search::find_newest_match;
use async_trait::async_trait;
use log::{debug, info};
use parking_lot::Mutex;
use serde::Serialize;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

#[async_trait]
/// Durable collection of knowledge records used by the resolver.
pub trait KnowledgeStore: Send + Sync {
    /// Read every record, oldest first, creating empty storage if absent.
    async fn load_all(&self) -> Result<Vec<MemoryRecord>, MemoryError>;

    /// Append a record to the end of the collection.
    async fn append(&self, record: MemoryRecord) -> Result<(), MemoryError>;

    /// Find the newest record whose issue occurs inside `needle`.
    async fn find_by_substring(&self, needle: &str) -> Result<Option<MemoryRecord>, MemoryError> {
        let records = self.load_all().await?;
        Ok(find_newest_match(&records, needle).cloned())
    }
}

/// File-backed store keeping all records in one JSON array document.
///
/// Every append rewrites the whole document through a uniquely named sibling
/// temporary file that is renamed over the target, so a failed write leaves
/// the previous document intact and separate writers never share a temp file.
/// Clones share one lock, which serializes the read-modify-write sequence
/// within a process.
#[derive(Debug, Clone)]
pub struct FileKnowledgeStore {
    /// Location of the JSON document.
    path: PathBuf,
    /// Guards read-modify-write cycles.
    lock: Arc<Mutex<()>>,
}

impl FileKnowledgeStore {
    /// Open the store at `path`, creating parent directories and an empty
    /// document when nothing exists yet.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, MemoryError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| MemoryError::StorageWrite {
                path: path.clone(),
                source,
            })?;
        }
        let store = Self {
            path,
            lock: Arc::new(Mutex::new(())),
        };
        {
            let _guard = store.lock.lock();
            if !store.path.exists() {
                store.write_records(&[])?;
            }
        }
        info!(
            "initialized file knowledge store (path={})",
            store.path.display()
        );
        Ok(store)
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that holds the document and its temporary siblings.
    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Load all records, bootstrapping an empty document when missing.
    ///
    /// Callers must hold the lock.
    fn read_records(&self) -> Result<Vec<MemoryRecord>, MemoryError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.write_records(&[])?;
                info!(
                    "created empty knowledge store (path={})",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(MemoryError::StorageRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| MemoryError::StorageCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the document with `records` atomically.
    ///
    /// Callers must hold the lock.
    fn write_records(&self, records: &[MemoryRecord]) -> Result<(), MemoryError> {
        let payload = encode_records(records)?;
        replace_file(&self.path, self.parent_dir(), &payload).map_err(|source| {
            MemoryError::StorageWrite {
                path: self.path.clone(),
                source,
            }
        })
    }
}

#[async_trait]
impl KnowledgeStore for FileKnowledgeStore {
    async fn load_all(&self) -> Result<Vec<MemoryRecord>, MemoryError> {
        let _guard = self.lock.lock();
        let records = self.read_records()?;
        debug!(
            "loaded knowledge records (path={}, count={})",
            self.path.display(),
            records.len()
        );
        Ok(records)
    }

    async fn append(&self, record: MemoryRecord) -> Result<(), MemoryError> {
        record.validate()?;
        let _guard = self.lock.lock();
        let mut records = self.read_records()?;
        let issue_len = record.issue.len();
        records.push(record);
        self.write_records(&records)?;
        debug!(
            "appended knowledge record (path={}, issue_len={}, count={})",
            self.path.display(),
            issue_len,
            records.len()
        );
        Ok(())
    }
}

/// Encode records as a JSON array indented with four spaces.
fn encode_records(records: &[MemoryRecord]) -> Result<Vec<u8>, MemoryError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Write `payload` to a fresh temp file in `dir`, sync it, then rename it
/// over `path`. The temp file is removed if any step fails.
fn replace_file(path: &Path, dir: &Path, payload: &[u8]) -> std::io::Result<()> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(payload)?;
    file.as_file().sync_all()?;
    file.persist(path)?;
    Ok(())
}
