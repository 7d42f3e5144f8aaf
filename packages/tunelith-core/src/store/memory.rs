//! In-memory message store (no persistence).

use super::{AppendOutcome, MessageStore};
use crate::record::MessageRecord;
use crate::{Error, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Message store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    records: Mutex<Vec<MessageRecord>>,
    /// When set, reads fail as if the JSON store were corrupt
    corrupt: AtomicBool,
}

impl MemoryMessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with records.
    pub fn with_records(records: Vec<MessageRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            corrupt: AtomicBool::new(false),
        }
    }

    /// Make subsequent reads fail with [`Error::StorageRead`].
    pub fn set_corrupt(&self, corrupt: bool) {
        self.corrupt.store(corrupt, Ordering::SeqCst);
    }

    fn records(&self) -> MutexGuard<'_, Vec<MessageRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MessageStore for MemoryMessageStore {
    fn append(&self, record: &MessageRecord) -> Result<AppendOutcome> {
        let mut records = self.records();
        // Appending heals a corrupt store, like the file-backed one.
        if self.corrupt.swap(false, Ordering::SeqCst) {
            records.clear();
        }
        records.push(record.clone());
        Ok(AppendOutcome { json_synced: true })
    }

    fn load_all(&self) -> Result<Vec<MessageRecord>> {
        if self.corrupt.load(Ordering::SeqCst) {
            return Err(Error::StorageRead {
                path: PathBuf::from("memory"),
                source: serde::de::Error::custom("store marked corrupt"),
            });
        }
        Ok(self.records().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_load() {
        let store = MemoryMessageStore::new();
        let record = MessageRecord::with_timestamp("2024-01-01 10:00:00", "Ada", "a@b.c", "Hi");

        store.append(&record).unwrap();

        assert_eq!(store.load_all().unwrap(), vec![record]);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_corrupt_store_fails_reads() {
        let store = MemoryMessageStore::new();
        store.set_corrupt(true);

        assert!(matches!(store.load_all(), Err(Error::StorageRead { .. })));
        assert!(matches!(store.count(), Err(Error::StorageRead { .. })));
    }

    #[test]
    fn test_append_heals_corrupt_store() {
        let store = MemoryMessageStore::with_records(vec![MessageRecord::with_timestamp(
            "2024-01-01 10:00:00",
            "Old",
            "a@b.c",
            "Hi",
        )]);
        store.set_corrupt(true);

        store
            .append(&MessageRecord::with_timestamp("2024-01-02 10:00:00", "New", "a@b.c", "Hi"))
            .unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "New");
    }
}
