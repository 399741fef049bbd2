//! Chat proxy client
//!
//! Forwards visitor questions to the generative-language API and returns the
//! reply text. Any failure, including a missing API key, yields a canned
//! fallback so the widget never shows an error state.

use serde::{Deserialize, Serialize};
use tracing::warn;

const MODEL: &str = "gemini-3-flash-preview";
const ENDPOINT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const FALLBACK_REPLY: &str = "I'm sorry, I'm having trouble connecting right now. \
Please call us at +91 9767113503 or +91 9049969555 directly!";

const SYSTEM_INSTRUCTION: &str = "You are 'Nestly', the AI assistant for 'Nest Achievers - \
Academic Coaching Nagpur'. Your goal is to answer questions about our center politely and \
professionally.

Key details about us:
- We are located in Nandanvan, Nagpur (Address: PLOT NO. L-230, HOUSE NO 1288/D/230, \
UTTAM KRUPA, MHADA LIG. COLONY, NANDANVAN, NAGPUR, MAHARASTRA \u{2013} 440009).
- We provide coaching for Classes 8th to 12th.
- High-priority focus areas: IIT-JEE (Main & Advanced) and NEET preparation.
- Boards covered: ICSE, CBSE, State, and CET.
- We offer specialized foundation courses for 8th-10th and rigorous science coaching for 11th-12th.
- Contact numbers: +91 9767113503 and +91 9049969555.

Guidelines:
- Keep answers concise and encouraging.
- Always mention our expertise in JEE/NEET and the classes we cover (8th-12th).
- If someone asks for location, say Nandanvan, Nagpur.
- Direct users to the 'Contact Us' page for admission inquiries.";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

pub struct ChatClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Answer a visitor message. Infallible by contract: upstream problems
    /// degrade to the fallback reply.
    pub async fn reply(&self, user_message: &str) -> String {
        let Some(api_key) = &self.api_key else {
            return FALLBACK_REPLY.to_string();
        };

        match self.generate(api_key, user_message).await {
            Ok(text) => text,
            Err(e) => {
                warn!("chat upstream error: {}", e);
                FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn generate(&self, api_key: &str, user_message: &str) -> anyhow::Result<String> {
        let url = format!("{}/{}:generateContent?key={}", ENDPOINT_BASE, MODEL, api_key);

        let body = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                parts: vec![Part {
                    text: user_message.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;

        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow::anyhow!("empty candidate list in response"))?;

        Ok(text)
    }
}
