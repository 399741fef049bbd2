//! HTTP API handlers for enquiry-sv

pub mod chat;
pub mod health;
pub mod submissions;

pub use chat::chat_reply;
pub use health::health_check;
pub use submissions::{create_submission, list_submissions};
