//! # Enquiry Common Library
//!
//! Shared code for both enquiry intake entry points including:
//! - Submission model and duplicate key
//! - Phone number normalization
//! - Submission store (SQLite, in-memory, absent)
//! - Intake service (validate → normalize → duplicate check → insert)
//! - Access guard for the dashboard listing
//! - Configuration loading

pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod phone;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use service::IntakeService;
