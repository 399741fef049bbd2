//! Intake service
//!
//! The one submission-handling core both entry points consume: validate,
//! normalize, duplicate-check, insert. Keeping it in one place removes the
//! drift risk the two hosting adapters would otherwise carry.

use std::sync::Arc;

use crate::auth::AccessGuard;
use crate::model::{NewSubmission, Submission, SubmissionRequest, CLASS_LABELS};
use crate::phone::normalize_phone;
use crate::store::SubmissionStore;
use crate::{Error, Result};

pub struct IntakeService {
    store: SubmissionStore,
    guard: Arc<dyn AccessGuard>,
}

impl IntakeService {
    pub fn new(store: SubmissionStore, guard: Arc<dyn AccessGuard>) -> Self {
        Self { store, guard }
    }

    /// Accept a form submission.
    ///
    /// Returns the created id, or None when no store is configured: the
    /// submit still reports success so infrastructure issues never block the
    /// user-facing form.
    ///
    /// The duplicate check and the insert are not atomic; two concurrent
    /// identical submissions can both pass the check. Accepted at this load.
    pub async fn submit(&self, request: SubmissionRequest) -> Result<Option<String>> {
        if request.student_name.trim().is_empty()
            || request.current_class.trim().is_empty()
            || request.phone.trim().is_empty()
        {
            return Err(Error::Validation(
                "Student name, class and phone are required".to_string(),
            ));
        }

        if !CLASS_LABELS.contains(&request.current_class.as_str()) {
            return Err(Error::Validation(format!(
                "Unknown class {:?}; expected one of {}",
                request.current_class,
                CLASS_LABELS.join(", ")
            )));
        }

        let phone = normalize_phone(&request.phone)?;

        let data = NewSubmission {
            student_name: request.student_name.trim().to_string(),
            current_class: request.current_class,
            phone,
            board: request.board,
            interested_exam: request.interested_exam,
            message: request.message,
        };

        if self.store.find_matching(&data.duplicate_key()).await?.is_some() {
            return Err(Error::Conflict);
        }

        let saved = self.store.insert(data).await?;
        Ok(saved.map(|s| s.id))
    }

    /// List all submissions, newest first, behind the access guard.
    pub async fn list(&self, username: &str, password: &str) -> Result<Vec<Submission>> {
        if !self.guard.verify(username, password) {
            return Err(Error::Auth);
        }

        self.store.list_all().await
    }

    pub fn store_mode(&self) -> &'static str {
        self.store.mode()
    }
}
