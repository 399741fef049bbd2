//! Submission storage
//!
//! Two real backends plus an explicit "no store" mode, selected once at
//! process start and injected into the intake service. Never a hidden
//! module-level singleton.

use crate::model::{DuplicateKey, NewSubmission, Submission};
use crate::Result;

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Backing store for submissions.
///
/// Degradation is a documented mode, not an error: the user-facing form must
/// keep working when no durable store is reachable.
pub enum SubmissionStore {
    /// Durable SQLite-backed store
    Sqlite(SqliteStore),
    /// Process-local list; contents do not survive a restart
    Memory(MemoryStore),
    /// No store at all: submissions are accepted but not persisted
    Absent,
}

impl SubmissionStore {
    /// Look for a prior submission with the same duplicate key. Read-only.
    pub async fn find_matching(&self, key: &DuplicateKey) -> Result<Option<Submission>> {
        match self {
            SubmissionStore::Sqlite(store) => store.find_matching(key).await,
            SubmissionStore::Memory(store) => Ok(store.find_matching(key)),
            SubmissionStore::Absent => Ok(None),
        }
    }

    /// Insert a new submission, assigning id and creation time.
    ///
    /// Returns None only in `Absent` mode: the submit still succeeds, the
    /// missing id is how a careful caller detects non-persistence.
    pub async fn insert(&self, data: NewSubmission) -> Result<Option<Submission>> {
        match self {
            SubmissionStore::Sqlite(store) => Ok(Some(store.insert(data).await?)),
            SubmissionStore::Memory(store) => Ok(Some(store.insert(data))),
            SubmissionStore::Absent => Ok(None),
        }
    }

    /// All submissions, newest first. Empty in `Absent` mode.
    pub async fn list_all(&self) -> Result<Vec<Submission>> {
        match self {
            SubmissionStore::Sqlite(store) => store.list_all().await,
            SubmissionStore::Memory(store) => Ok(store.list_all()),
            SubmissionStore::Absent => Ok(Vec::new()),
        }
    }

    /// Human-readable mode name for startup logging.
    pub fn mode(&self) -> &'static str {
        match self {
            SubmissionStore::Sqlite(_) => "sqlite",
            SubmissionStore::Memory(_) => "memory",
            SubmissionStore::Absent => "absent",
        }
    }
}
