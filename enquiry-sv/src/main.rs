//! enquiry-sv - Inquiry intake HTTP server
//!
//! Long-running entry point: accepts contact-form submissions, serves the
//! dashboard listing behind the access guard, and proxies the chat widget.
//! Falls back to an in-memory store when no database is configured or
//! reachable; the form keeps working either way.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use enquiry_common::auth::StaticCredentials;
use enquiry_common::config::Config;
use enquiry_common::store::{MemoryStore, SqliteStore, SubmissionStore};
use enquiry_common::IntakeService;
use enquiry_sv::chat::ChatClient;
use enquiry_sv::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting enquiry-sv v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;

    // Store selection happens exactly once, here. Degraded mode keeps the
    // form working; the listing just reflects whatever this process holds.
    let store = match &config.database_url {
        Some(url) => match SqliteStore::connect(url).await {
            Ok(store) => {
                info!("Connected to submission database");
                SubmissionStore::Sqlite(store)
            }
            Err(e) => {
                warn!("Database connection failed ({}), submissions held in memory only", e);
                SubmissionStore::Memory(MemoryStore::new())
            }
        },
        None => {
            info!("No DATABASE_URL set, submissions held in memory only (lost on restart)");
            SubmissionStore::Memory(MemoryStore::new())
        }
    };

    let guard = StaticCredentials::new(&config.admin_username, &config.admin_password);
    let service = Arc::new(IntakeService::new(store, Arc::new(guard)));

    if config.gemini_api_key.is_none() {
        info!("No GEMINI_API_KEY set, chat endpoint will answer with the fallback reply");
    }
    let chat = Arc::new(ChatClient::new(config.gemini_api_key.clone()));

    let state = AppState::new(service, chat);
    let app = build_router(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("enquiry-sv listening on http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
