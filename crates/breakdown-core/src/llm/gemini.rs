//! Gemini `generateContent` client.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{GenerateRequest, LanguageModel, LlmError};
use crate::config::LlmConfig;

/// Public Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini API client
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from configuration.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!("GeminiClient::from_config: {config:?}");
        let http = Client::builder().build()?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    /// Build the request body for the Gemini API.
    fn build_request_body(request: &GenerateRequest) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.response_schema,
                "temperature": request.temperature,
            },
        })
    }

    /// Concatenate the text parts of the first candidate.
    fn response_text(response: GeminiResponse) -> Result<String, LlmError> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(LlmError::Blocked(reason));
            }
            return Ok(String::new());
        };

        Ok(candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String, LlmError> {
        let url = self.endpoint(&request.model);
        debug!("generate: POST {url} (temperature {})", request.temperature);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::build_request_body(&request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!("generate: {url} answered {status}");
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::InvalidResponse(format!("unexpected response envelope: {e}")))?;
        Self::response_text(parsed)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn client_for(url: &str) -> GeminiClient {
        let mut config = LlmConfig::new("test-key");
        config.base_url = format!("{url}/");
        GeminiClient::from_config(&config).unwrap()
    }

    fn request() -> GenerateRequest {
        GenerateRequest {
            model: "gemini-2.5-flash".to_string(),
            prompt: "Is this plannable?".to_string(),
            response_schema: json!({ "type": "OBJECT" }),
            temperature: 0.1,
        }
    }

    fn candidate_body(parts: &[&str]) -> String {
        let parts: Vec<Value> = parts.iter().map(|p| json!({ "text": p })).collect();
        json!({
            "candidates": [{ "content": { "role": "model", "parts": parts } }]
        })
        .to_string()
    }

    #[test]
    fn test_request_body_shape() {
        let body = GeminiClient::build_request_body(&request());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Is this plannable?");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_generate_sends_key_and_joins_parts() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body(&["{\"isPlannable\":", " true}"]))
            .expect(1)
            .create_async()
            .await;

        let text = client_for(&server.url()).generate(request()).await.unwrap();
        assert_eq!(text, "{\"isPlannable\": true}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_maps_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(403)
            .with_body("API key not valid")
            .create_async()
            .await;

        let err = client_for(&server.url()).generate(request()).await.unwrap_err();
        match err {
            LlmError::ApiError { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_without_candidates_is_empty_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let text = client_for(&server.url()).generate(request()).await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_generate_reports_blocked_prompt() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string())
            .create_async()
            .await;

        let err = client_for(&server.url()).generate(request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Blocked(reason) if reason == "SAFETY"));
    }

    #[tokio::test]
    async fn test_generate_rejects_non_json_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let err = client_for(&server.url()).generate(request()).await.unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }
}
