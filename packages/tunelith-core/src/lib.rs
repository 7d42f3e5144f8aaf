//! Tunelith Core - Contact message persistence and site data.
//!
//! This crate provides everything behind the Tunelith website's HTTP surface:
//!
//! - **Message store**: dual-sink persistence (text transcript + JSON array)
//! - **Contact form**: submission validation and recording
//! - **Message viewer**: newest-first listing of stored messages
//! - **Site stats and health**: static counters plus a live message count
//!
//! # Example
//!
//! ```rust,no_run
//! use tunelith_core::contact::{submit, ContactSubmission};
//! use tunelith_core::store::{FileMessageStore, MessageStore};
//!
//! // Files land in ./messages.txt and ./messages.json
//! let store = FileMessageStore::new(".");
//!
//! let submission = ContactSubmission::new("Ada", "ada@example.com", "Bonjour !");
//! let record = submit(&store, submission)?;
//! println!("Stored message from {} at {}", record.name, record.timestamp);
//! println!("Total messages: {}", store.count()?);
//! # Ok::<(), tunelith_core::Error>(())
//! ```

pub mod contact;
pub mod health;
pub mod record;
pub mod stats;
pub mod store;
pub mod viewer;

use std::path::PathBuf;

// Re-export commonly used types
pub use contact::{submit, ContactSubmission, ValidSubmission, ValidationError};
pub use health::{health, HealthStatus};
pub use record::{MessageRecord, TIMESTAMP_FORMAT};
pub use stats::{site_stats, SiteStats};
pub use store::{AppendOutcome, FileMessageStore, MemoryMessageStore, MessageStore};
pub use viewer::recent_messages;

/// Error types for tunelith-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("failed to read message store {}: {source}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for tunelith-core operations.
pub type Result<T> = std::result::Result<T, Error>;
