//! File-backed message store.

use super::{AppendOutcome, MessageStore};
use crate::record::MessageRecord;
use crate::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Transcript file name inside the data directory.
pub const TRANSCRIPT_FILE_NAME: &str = "messages.txt";

/// JSON store file name inside the data directory.
pub const JSON_FILE_NAME: &str = "messages.json";

/// Message store writing `messages.txt` and `messages.json`.
#[derive(Debug)]
pub struct FileMessageStore {
    /// Append-only human-readable transcript
    transcript_path: PathBuf,
    /// JSON array of all records
    json_path: PathBuf,
    /// Serializes appends and reads so neither sees a half-rewritten JSON file
    io_lock: Mutex<()>,
}

impl FileMessageStore {
    /// Create a store keeping both files in `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self::with_paths(dir.join(TRANSCRIPT_FILE_NAME), dir.join(JSON_FILE_NAME))
    }

    /// Create a store with explicit file paths.
    pub fn with_paths(transcript_path: PathBuf, json_path: PathBuf) -> Self {
        Self {
            transcript_path,
            json_path,
            io_lock: Mutex::new(()),
        }
    }

    pub fn transcript_path(&self) -> &Path {
        &self.transcript_path
    }

    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // Poisoning leaves the files intact.
        self.io_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn append_transcript(&self, record: &MessageRecord) -> io::Result<()> {
        ensure_parent(&self.transcript_path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.transcript_path)?;
        file.write_all(record.transcript_block().as_bytes())
    }

    /// Read the JSON store for appending. Missing or corrupt contents count as empty.
    fn load_for_append(&self) -> Vec<MessageRecord> {
        let content = match fs::read_to_string(&self.json_path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::debug!(
                        "Treating unreadable {} as empty: {}",
                        self.json_path.display(),
                        e
                    );
                }
                return Vec::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::debug!(
                "Treating unparseable {} as empty: {}",
                self.json_path.display(),
                e
            );
            Vec::new()
        })
    }

    fn append_json(&self, record: &MessageRecord) -> Result<()> {
        let mut records = self.load_for_append();
        records.push(record.clone());

        ensure_parent(&self.json_path)?;
        let content = serde_json::to_string_pretty(&records)?;
        fs::write(&self.json_path, content)?;
        Ok(())
    }
}

impl MessageStore for FileMessageStore {
    fn append(&self, record: &MessageRecord) -> Result<AppendOutcome> {
        let _guard = self.lock();

        self.append_transcript(record)
            .map_err(|source| Error::StorageWrite {
                path: self.transcript_path.clone(),
                source,
            })?;

        let json_synced = match self.append_json(record) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Failed to save message to {}: {}",
                    self.json_path.display(),
                    e
                );
                false
            }
        };

        Ok(AppendOutcome { json_synced })
    }

    fn load_all(&self) -> Result<Vec<MessageRecord>> {
        let _guard = self.lock();
        if !self.json_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.json_path)?;
        serde_json::from_str(&content).map_err(|source| Error::StorageRead {
            path: self.json_path.clone(),
            source,
        })
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
