//! Process-local fallback store
//!
//! Stands in when no database URL is configured or the connection failed.
//! Contents are lost on restart and are not shared across instances; that is
//! the documented degradation mode for the long-running server.

use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::model::{DuplicateKey, NewSubmission, Submission};

pub struct MemoryStore {
    // Newest first, mirroring the list order of the durable backend
    inner: Mutex<Vec<Submission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    pub fn find_matching(&self, key: &DuplicateKey) -> Option<Submission> {
        let list = self.inner.lock().expect("submission list mutex poisoned");
        list.iter().find(|s| s.matches_key(key)).cloned()
    }

    pub fn insert(&self, data: NewSubmission) -> Submission {
        let submission = Submission {
            id: Uuid::new_v4().to_string(),
            student_name: data.student_name,
            current_class: data.current_class,
            phone: data.phone,
            board: data.board,
            interested_exam: data.interested_exam,
            message: data.message,
            created_at: Utc::now(),
        };

        let mut list = self.inner.lock().expect("submission list mutex poisoned");
        list.insert(0, submission.clone());
        submission
    }

    pub fn list_all(&self) -> Vec<Submission> {
        let list = self.inner.lock().expect("submission list mutex poisoned");
        list.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
