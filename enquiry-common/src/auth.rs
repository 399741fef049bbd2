//! Access guard for the dashboard listing
//!
//! A static username/password comparison gating `GET /api/submissions`.
//! Intentionally minimal: no hashing, no rate limiting, no lockout. This
//! gates a low-stakes internal listing and is not a security boundary.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Credential check seam. Kept as a trait so a real auth provider can be
/// swapped in without touching the intake service.
pub trait AccessGuard: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Guard backed by two configured reference values.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Reference values are trimmed once here; comparison is case-sensitive.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        }
    }
}

impl AccessGuard for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username.trim() == self.username && password == self.password
    }
}

/// Decode an `Authorization: Basic <base64(user:pass)>` header value.
///
/// Returns None for anything that is not well-formed Basic auth: wrong
/// scheme, empty payload, invalid base64, non-UTF-8, or a missing colon.
/// The username half is trimmed; the password is returned verbatim.
pub fn parse_basic_auth(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?.trim();
    if encoded.is_empty() {
        return None;
    }

    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    let (username, password) = decoded.split_once(':')?;
    Some((username.trim().to_string(), password.to_string()))
}
