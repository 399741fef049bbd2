//! Submission model and duplicate key
//!
//! Wire field names are camelCase (`studentName`, `currentClass`, ...) to
//! match the dashboard and form clients; storage columns are snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grade labels the inquiry form offers. `currentClass` must be one of these.
pub const CLASS_LABELS: &[&str] = &["8th", "9th", "10th", "11th", "12th", "repeat"];

/// A stored inquiry submission. Created once, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub student_name: String,
    pub current_class: String,
    pub phone: String,
    pub board: String,
    pub interested_exam: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Raw submit payload as posted by the form. Missing optional fields
/// deserialize to empty strings; required-field checks happen in the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionRequest {
    pub student_name: String,
    pub current_class: String,
    pub phone: String,
    pub board: String,
    pub interested_exam: String,
    pub message: String,
}

/// Validated, normalized submission data ready for insertion.
/// Id and creation time are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub student_name: String,
    pub current_class: String,
    pub phone: String,
    pub board: String,
    pub interested_exam: String,
    pub message: String,
}

/// The five fields that identify a repeat submission. `message` and
/// `createdAt` are deliberately excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub student_name: String,
    pub current_class: String,
    pub phone: String,
    pub board: String,
    pub interested_exam: String,
}

impl NewSubmission {
    pub fn duplicate_key(&self) -> DuplicateKey {
        DuplicateKey {
            student_name: self.student_name.clone(),
            current_class: self.current_class.clone(),
            phone: self.phone.clone(),
            board: self.board.clone(),
            interested_exam: self.interested_exam.clone(),
        }
    }
}

impl Submission {
    pub fn duplicate_key(&self) -> DuplicateKey {
        DuplicateKey {
            student_name: self.student_name.clone(),
            current_class: self.current_class.clone(),
            phone: self.phone.clone(),
            board: self.board.clone(),
            interested_exam: self.interested_exam.clone(),
        }
    }

    /// Exact string equality against a candidate key, post-normalization.
    /// No fuzzy matching, no case folding.
    pub fn matches_key(&self, key: &DuplicateKey) -> bool {
        self.student_name == key.student_name
            && self.current_class == key.current_class
            && self.phone == key.phone
            && self.board == key.board
            && self.interested_exam == key.interested_exam
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Submission {
        Submission {
            id: "test-id".to_string(),
            student_name: "Amit Kumar".to_string(),
            current_class: "10th".to_string(),
            phone: "+91 9876543210".to_string(),
            board: "CBSE".to_string(),
            interested_exam: String::new(),
            message: "first message".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_message_excluded_from_key() {
        let a = sample();
        let mut b = sample();
        b.message = "a different message".to_string();
        assert_eq!(a.duplicate_key(), b.duplicate_key());
        assert!(a.matches_key(&b.duplicate_key()));
    }

    #[test]
    fn test_any_key_field_differs() {
        let a = sample();

        let mut b = sample();
        b.board = "ICSE".to_string();
        assert!(!a.matches_key(&b.duplicate_key()));

        let mut c = sample();
        c.phone = "+91 9876543211".to_string();
        assert!(!a.matches_key(&c.duplicate_key()));
    }

    #[test]
    fn test_key_equality_is_case_sensitive() {
        let a = sample();
        let mut b = sample();
        b.student_name = "amit kumar".to_string();
        assert!(!a.matches_key(&b.duplicate_key()));
    }

    #[test]
    fn test_request_defaults_missing_fields() {
        let req: SubmissionRequest =
            serde_json::from_str(r#"{"studentName":"Amit","currentClass":"10th"}"#).unwrap();
        assert_eq!(req.student_name, "Amit");
        assert_eq!(req.phone, "");
        assert_eq!(req.board, "");
        assert_eq!(req.message, "");
    }
}
