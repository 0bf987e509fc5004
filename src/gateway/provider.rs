//! The generation capability boundary and its HTTP implementation.

use crate::config::Config;
use crate::gateway::error::{GenerationError, GenerationResult};
use crate::gateway::types::ConversationTurn;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// One structured-generation or chat call. `history` is replayed in full on
/// every call; there is no server-side session.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub system_instruction: Option<String>,
    pub history: Vec<ConversationTurn>,
    pub prompt: String,
    pub response_schema: Option<Value>,
}

impl GenerateRequest {
    pub fn structured(prompt: String, system_instruction: &str, response_schema: Value) -> Self {
        Self {
            system_instruction: Some(system_instruction.to_string()),
            history: Vec::new(),
            prompt,
            response_schema: Some(response_schema),
        }
    }

    pub fn freeform(prompt: String, system_instruction: Option<&str>) -> Self {
        Self {
            system_instruction: system_instruction.map(str::to_string),
            history: Vec::new(),
            prompt,
            response_schema: None,
        }
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }
}

/// The external model service, reduced to one fallible call.
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> GenerationResult<String>;
}

#[async_trait::async_trait]
impl<P: Provider + ?Sized> Provider for std::sync::Arc<P> {
    async fn generate(&self, request: GenerateRequest) -> GenerationResult<String> {
        (**self).generate(request).await
    }
}

/// Gemini-style `generateContent` REST provider.
pub struct GeminiProvider {
    client: Client,
    config: Config,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
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
    text: Option<String>,
}

impl GeminiProvider {
    pub fn new(config: Config) -> GenerationResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| GenerationError::transport(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_body(&self, request: &GenerateRequest) -> Value {
        let mut contents: Vec<Value> = request
            .history
            .iter()
            .map(|turn| {
                json!({
                    "role": turn.role.provider_name(),
                    "parts": [{ "text": turn.content }]
                })
            })
            .collect();
        contents.push(json!({
            "role": "user",
            "parts": [{ "text": request.prompt }]
        }));

        let mut body = json!({ "contents": contents });
        if let Some(instruction) = &request.system_instruction {
            body["systemInstruction"] = json!({ "parts": [{ "text": instruction }] });
        }
        if let Some(schema) = &request.response_schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema
            });
        }
        body
    }
}

#[async_trait::async_trait]
impl Provider for GeminiProvider {
    async fn generate(&self, request: GenerateRequest) -> GenerationResult<String> {
        let body = self.build_body(&request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::transport("request timeout - the API took too long to respond")
                } else if e.is_connect() {
                    GenerationError::transport("connection error - unable to reach the API")
                } else {
                    GenerationError::transport(format!("network error: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "generation call rejected");
            return Err(match status.as_u16() {
                401 => GenerationError::transport("authentication failed - check your API key"),
                403 => GenerationError::transport("access forbidden - insufficient permissions"),
                429 => GenerationError::transport("rate limit exceeded - too many requests"),
                500..=599 => {
                    GenerationError::transport(format!("server error ({}): {}", status, error_text))
                }
                _ => GenerationError::transport(format!("HTTP error {}: {}", status, error_text)),
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::schema(format!("response body is not valid JSON: {}", e)))?;

        let text: String = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::Empty);
        }

        debug!(chars = text.len(), "generation call succeeded");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::types::Role;

    #[test]
    fn body_replays_history_then_prompt() {
        let provider = GeminiProvider::new(Config::for_tests()).unwrap();
        let request = GenerateRequest::freeform("next".to_string(), Some("sys"))
            .with_history(vec![
                ConversationTurn::user("q1"),
                ConversationTurn::assistant("a1"),
            ]);
        let body = provider.build_body(&request);

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], Role::Assistant.provider_name());
        assert_eq!(contents[2]["parts"][0]["text"], "next");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "sys");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn structured_request_sets_json_mime_and_schema() {
        let provider = GeminiProvider::new(Config::for_tests()).unwrap();
        let request = GenerateRequest::structured(
            "p".to_string(),
            "sys",
            serde_json::json!({"type": "OBJECT"}),
        );
        let body = provider.build_body(&request);
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let mut config = Config::for_tests();
        config.api_url = "https://example.test/v1beta/".to_string();
        let provider = GeminiProvider::new(config).unwrap();
        assert_eq!(
            provider.endpoint(),
            "https://example.test/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn empty_candidate_payload_decodes_to_empty_text() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
