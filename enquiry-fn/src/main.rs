//! enquiry-fn - single-invocation inquiry intake
//!
//! Stateless entry point: one JSON request envelope on stdin, one JSON
//! response envelope on stdout, then exit. Without a configured database
//! there is nothing to fall back to across invocations, so submissions are
//! accepted without persistence (success with a null id).

use std::io::Read;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use enquiry_common::auth::StaticCredentials;
use enquiry_common::config::Config;
use enquiry_common::store::{SqliteStore, SubmissionStore};
use enquiry_common::IntakeService;
use enquiry_fn::{handle, Event, Reply};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the response envelope; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::load()?;

    let store = match &config.database_url {
        Some(url) => match SqliteStore::connect(url).await {
            Ok(store) => SubmissionStore::Sqlite(store),
            Err(e) => {
                warn!("Database connection failed ({}), skipping persistence", e);
                SubmissionStore::Absent
            }
        },
        None => {
            info!("No DATABASE_URL set, skipping persistence");
            SubmissionStore::Absent
        }
    };

    let guard = StaticCredentials::new(&config.admin_username, &config.admin_password);
    let service = IntakeService::new(store, Arc::new(guard));

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let reply = match serde_json::from_str::<Event>(&input) {
        Ok(event) => handle(&service, event).await,
        Err(e) => Reply {
            status: 400,
            body: serde_json::json!({ "error": format!("Malformed request envelope: {}", e) }),
        },
    };

    println!("{}", serde_json::to_string(&reply)?);
    Ok(())
}
