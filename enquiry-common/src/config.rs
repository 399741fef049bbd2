//! Environment-driven configuration shared by both entry points

use crate::{Error, Result};
use std::env;
use tracing::warn;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Runtime configuration, loaded once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind port (long-running variant only)
    pub port: u16,
    /// SQLite URL; None means degraded mode (no durable store)
    pub database_url: Option<String>,
    /// Dashboard credentials, trimmed
    pub admin_username: String,
    pub admin_password: String,
    /// Generative-language API key for the chat proxy; None disables upstream calls
    pub gemini_api_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("Invalid PORT value {:?}: {}", v, e)))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = non_empty(env::var("DATABASE_URL").ok());
        let gemini_api_key = non_empty(env::var("GEMINI_API_KEY").ok());

        let admin_username = env::var("ADMIN_USERNAME")
            .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string())
            .trim()
            .to_string();
        let admin_password = env::var("ADMIN_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string())
            .trim()
            .to_string();

        // Unset credentials are a configuration warning, not a hard failure:
        // the listing is low-stakes, but a production deployment should not
        // silently run on the known defaults.
        if admin_username == DEFAULT_ADMIN_USERNAME && admin_password == DEFAULT_ADMIN_PASSWORD {
            warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set, using default dashboard credentials");
        }

        Ok(Self {
            port,
            database_url,
            admin_username,
            admin_password,
            gemini_api_key,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_filters_blank() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(
            non_empty(Some("sqlite://enquiry.db".to_string())),
            Some("sqlite://enquiry.db".to_string())
        );
    }
}
