//! Durable SQLite-backed submission store

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::model::{DuplicateKey, NewSubmission, Submission};
use crate::Result;

// No UNIQUE constraint on the duplicate-key columns: the check-then-insert
// sequence is not transactional and two concurrent identical submissions can
// both land. Accepted at this load (human form posts).
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS submissions (
    id              TEXT PRIMARY KEY,
    student_name    TEXT NOT NULL,
    current_class   TEXT NOT NULL,
    phone           TEXT NOT NULL,
    board           TEXT NOT NULL DEFAULT '',
    interested_exam TEXT NOT NULL DEFAULT '',
    message         TEXT NOT NULL DEFAULT '',
    created_at      TEXT NOT NULL
)";

const COLUMNS: &str = "id, student_name, current_class, phone, board, interested_exam, message, created_at";

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect and ensure the submissions table exists.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(url).await?;
        Self::from_pool(pool).await
    }

    /// Build from an existing pool (tests use an in-memory database).
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn find_matching(&self, key: &DuplicateKey) -> Result<Option<Submission>> {
        let sql = format!(
            "SELECT {} FROM submissions \
             WHERE student_name = ? AND current_class = ? AND phone = ? \
               AND board = ? AND interested_exam = ? \
             LIMIT 1",
            COLUMNS
        );

        let found = sqlx::query_as::<_, Submission>(&sql)
            .bind(&key.student_name)
            .bind(&key.current_class)
            .bind(&key.phone)
            .bind(&key.board)
            .bind(&key.interested_exam)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found)
    }

    pub async fn insert(&self, data: NewSubmission) -> Result<Submission> {
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

        sqlx::query(
            "INSERT INTO submissions \
             (id, student_name, current_class, phone, board, interested_exam, message, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&submission.id)
        .bind(&submission.student_name)
        .bind(&submission.current_class)
        .bind(&submission.phone)
        .bind(&submission.board)
        .bind(&submission.interested_exam)
        .bind(&submission.message)
        .bind(submission.created_at)
        .execute(&self.pool)
        .await?;

        Ok(submission)
    }

    pub async fn list_all(&self) -> Result<Vec<Submission>> {
        let sql = format!(
            "SELECT {} FROM submissions ORDER BY created_at DESC",
            COLUMNS
        );

        let rows = sqlx::query_as::<_, Submission>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_store() -> SqliteStore {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Should open in-memory database");
        SqliteStore::from_pool(pool)
            .await
            .expect("Should create schema")
    }

    fn sample(name: &str, message: &str) -> NewSubmission {
        NewSubmission {
            student_name: name.to_string(),
            current_class: "10th".to_string(),
            phone: "+91 9876543210".to_string(),
            board: "CBSE".to_string(),
            interested_exam: String::new(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let store = setup_store().await;
        let saved = store.insert(sample("Amit Kumar", "")).await.unwrap();

        assert!(!saved.id.is_empty());
        assert_eq!(saved.phone, "+91 9876543210");
    }

    #[tokio::test]
    async fn test_find_matching_ignores_message() {
        let store = setup_store().await;
        store.insert(sample("Amit Kumar", "first")).await.unwrap();

        let key = sample("Amit Kumar", "something else").duplicate_key();
        let found = store.find_matching(&key).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_find_matching_misses_on_key_field() {
        let store = setup_store().await;
        store.insert(sample("Amit Kumar", "")).await.unwrap();

        let mut key = sample("Amit Kumar", "").duplicate_key();
        key.board = "ICSE".to_string();
        assert!(store.find_matching(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let store = setup_store().await;
        store.insert(sample("First Student", "")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        store.insert(sample("Second Student", "")).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].student_name, "Second Student");
        assert_eq!(all[1].student_name, "First Student");
    }
}
