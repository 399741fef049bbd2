//! enquiry-fn library - per-invocation adapter for the inquiry intake
//!
//! The stateless counterpart to enquiry-sv: one JSON request envelope in,
//! one JSON response envelope out. All submission semantics live in
//! `enquiry_common::IntakeService`; this crate only dispatches, so the two
//! hosting models cannot drift apart.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use enquiry_common::auth::parse_basic_auth;
use enquiry_common::model::SubmissionRequest;
use enquiry_common::{Error, IntakeService};

/// One request, as delivered by the hosting runtime.
#[derive(Debug, Deserialize)]
pub struct Event {
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Value,
}

/// The response envelope written to stdout.
#[derive(Debug, Serialize)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

/// Dispatch a single invocation: POST submits, GET lists, anything else 405.
pub async fn handle(service: &IntakeService, event: Event) -> Reply {
    match event.method.to_ascii_uppercase().as_str() {
        "POST" => submit(service, event.body).await,
        "GET" => list(service, &event.headers).await,
        _ => Reply {
            status: 405,
            body: json!({ "error": "Method not allowed" }),
        },
    }
}

async fn submit(service: &IntakeService, body: Value) -> Reply {
    let request: SubmissionRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => {
            return Reply {
                status: 400,
                body: json!({ "error": format!("Malformed body: {}", e) }),
            }
        }
    };

    match service.submit(request).await {
        Ok(id) => Reply {
            status: 201,
            body: json!({ "success": true, "id": id }),
        },
        Err(e) => error_reply(e),
    }
}

async fn list(service: &IntakeService, headers: &HashMap<String, String>) -> Reply {
    // Header names arrive in whatever casing the runtime uses
    let header_value = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("authorization"))
        .map(|(_, v)| v.as_str())
        .unwrap_or_default();

    let Some((username, password)) = parse_basic_auth(header_value) else {
        return error_reply(Error::Auth);
    };

    match service.list(&username, &password).await {
        Ok(submissions) => Reply {
            status: 200,
            body: serde_json::to_value(submissions).unwrap_or_else(|_| json!([])),
        },
        Err(e) => error_reply(e),
    }
}

fn error_reply(e: Error) -> Reply {
    Reply {
        status: e.status().as_u16(),
        body: json!({ "error": e.public_message() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enquiry_common::auth::StaticCredentials;
    use enquiry_common::store::{MemoryStore, SubmissionStore};
    use std::sync::Arc;

    fn service(store: SubmissionStore) -> IntakeService {
        IntakeService::new(store, Arc::new(StaticCredentials::new("admin", "admin123")))
    }

    fn basic_auth_headers(user: &str, pass: &str) -> HashMap<String, String> {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        let mut headers = HashMap::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", STANDARD.encode(format!("{}:{}", user, pass))),
        );
        headers
    }

    fn post_event(body: Value) -> Event {
        Event {
            method: "POST".to_string(),
            headers: HashMap::new(),
            body,
        }
    }

    #[tokio::test]
    async fn test_post_without_store_succeeds_with_null_id() {
        let svc = service(SubmissionStore::Absent);
        let reply = handle(
            &svc,
            post_event(json!({
                "studentName": "Amit Kumar",
                "currentClass": "10th",
                "phone": "9876543210"
            })),
        )
        .await;

        assert_eq!(reply.status, 201);
        assert_eq!(reply.body["success"], true);
        assert!(reply.body["id"].is_null());
    }

    #[tokio::test]
    async fn test_post_then_get_round_trip() {
        let svc = service(SubmissionStore::Memory(MemoryStore::new()));

        let reply = handle(
            &svc,
            post_event(json!({
                "studentName": "Amit Kumar",
                "currentClass": "10th",
                "phone": "9876543210",
                "board": "CBSE"
            })),
        )
        .await;
        assert_eq!(reply.status, 201);

        let reply = handle(
            &svc,
            Event {
                method: "GET".to_string(),
                headers: basic_auth_headers("admin", "admin123"),
                body: Value::Null,
            },
        )
        .await;

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body[0]["phone"], "+91 9876543210");
    }

    #[tokio::test]
    async fn test_get_with_bad_credentials_is_401() {
        let svc = service(SubmissionStore::Absent);
        let reply = handle(
            &svc,
            Event {
                method: "get".to_string(),
                headers: basic_auth_headers("admin", "wrong"),
                body: Value::Null,
            },
        )
        .await;

        assert_eq!(reply.status, 401);
    }

    #[tokio::test]
    async fn test_get_without_header_is_401() {
        let svc = service(SubmissionStore::Absent);
        let reply = handle(
            &svc,
            Event {
                method: "GET".to_string(),
                headers: HashMap::new(),
                body: Value::Null,
            },
        )
        .await;

        assert_eq!(reply.status, 401);
    }

    #[tokio::test]
    async fn test_unknown_method_is_405() {
        let svc = service(SubmissionStore::Absent);
        let reply = handle(
            &svc,
            Event {
                method: "DELETE".to_string(),
                headers: HashMap::new(),
                body: Value::Null,
            },
        )
        .await;

        assert_eq!(reply.status, 405);
        assert_eq!(reply.body["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn test_duplicate_maps_to_409() {
        let svc = service(SubmissionStore::Memory(MemoryStore::new()));
        let payload = json!({
            "studentName": "Amit Kumar",
            "currentClass": "10th",
            "phone": "9876543210"
        });

        assert_eq!(handle(&svc, post_event(payload.clone())).await.status, 201);

        let reply = handle(&svc, post_event(payload)).await;
        assert_eq!(reply.status, 409);
        assert_eq!(reply.body["error"], "Already submitted");
    }
}
