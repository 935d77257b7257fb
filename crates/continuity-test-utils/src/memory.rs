use async_trait::async_trait;
use continuity_memory::{KnowledgeStore, MemoryError, MemoryRecord};
use parking_lot::Mutex;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<MemoryRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<MemoryRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn snapshot(&self) -> Vec<MemoryRecord> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl KnowledgeStore for InMemoryStore {
    async fn load_all(&self) -> Result<Vec<MemoryRecord>, MemoryError> {
        Ok(self.snapshot())
    }

    async fn append(&self, record: MemoryRecord) -> Result<(), MemoryError> {
        record.validate()?;
        self.records.lock().push(record);
        Ok(())
    }
}

/// Store whose disk has gone away: reads and writes both fail.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn path() -> PathBuf {
        PathBuf::from("/unavailable/memory.json")
    }
}

#[async_trait]
impl KnowledgeStore for FailingStore {
    async fn load_all(&self) -> Result<Vec<MemoryRecord>, MemoryError> {
        Err(MemoryError::StorageRead {
            path: Self::path(),
            source: std::io::Error::other("disk unavailable"),
        })
    }

    async fn append(&self, _record: MemoryRecord) -> Result<(), MemoryError> {
        Err(MemoryError::StorageWrite {
            path: Self::path(),
            source: std::io::Error::other("disk unavailable"),
        })
    }
}
