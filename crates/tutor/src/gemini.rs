//! Blocking HTTP transport for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};

use crate::config::TutorConfig;
use crate::conversation::{ChatMessage, Role};
use crate::error::TutorError;
use crate::transport::{Transport, TutorRequest};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// All text parts of all candidates, concatenated.
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect()
    }
}

fn content(role: Option<Role>, text: &str) -> Content<'_> {
    Content {
        role,
        parts: [Part { text }],
    }
}

fn message(m: &ChatMessage) -> Content<'_> {
    content(Some(m.role), &m.text)
}

pub struct GeminiTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl GeminiTransport {
    pub fn new(config: &TutorConfig) -> Result<Self, TutorError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TutorError::Transport(format!("client setup: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }
}

impl Transport for GeminiTransport {
    fn send(&self, api_key: &str, request: &TutorRequest) -> Result<String, TutorError> {
        let mut contents: Vec<Content<'_>> = request.history.iter().map(message).collect();
        contents.push(content(Some(Role::User), &request.prompt));
        let body = GenerateRequest {
            system_instruction: content(None, &request.system_instruction),
            contents,
        };

        let url = format!("{}/{}:generateContent", self.endpoint, request.model);
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| TutorError::Transport(format!("HTTP error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(TutorError::Transport(format!("API returned {status}: {text}")));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| TutorError::Transport(format!("JSON parse error: {e}")))?;
        Ok(parsed.text())
    }
}
