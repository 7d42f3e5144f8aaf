//! Message persistence.
//!
//! Every handler receives its storage through the [`MessageStore`] trait. The
//! file-backed implementation writes two sinks per record: a human-readable
//! transcript that serves as a write-only audit log, and a JSON array that is
//! the queryable dataset.

mod file;
mod memory;

pub use file::{FileMessageStore, JSON_FILE_NAME, TRANSCRIPT_FILE_NAME};
pub use memory::MemoryMessageStore;

use crate::record::MessageRecord;
use crate::Result;

/// Result of a successful append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Whether the JSON store was rewritten with the new record.
    ///
    /// `false` means only the transcript holds the record.
    pub json_synced: bool,
}

/// Storage interface for contact messages.
pub trait MessageStore: Send + Sync {
    /// Persist a new record.
    ///
    /// Fails only if the transcript could not be written. A failure on the
    /// JSON side is logged and reported through [`AppendOutcome`].
    fn append(&self, record: &MessageRecord) -> Result<AppendOutcome>;

    /// Load every record in insertion order.
    ///
    /// A missing store is empty; an unparseable one is an error.
    fn load_all(&self) -> Result<Vec<MessageRecord>>;

    /// Number of stored records.
    fn count(&self) -> Result<usize> {
        Ok(self.load_all()?.len())
    }
}
