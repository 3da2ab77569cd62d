use breakdown_core::{Orchestrator, OrchestratorBuilder};
use mockito::{Mock, ServerGuard};
use serde_json::json;

pub const VALIDATION_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
pub const DECOMPOSITION_PATH: &str = "/v1beta/models/gemini-2.5-pro:generateContent";

/// Helper function to create an orchestrator talking to a local mock server
pub fn create_test_orchestrator(server: &ServerGuard) -> Orchestrator {
    OrchestratorBuilder::new()
        .with_api_key("test-key")
        .with_base_url(Some(server.url()))
        .build()
        .expect("Failed to create orchestrator")
}

/// Wrap `text` in a generateContent response envelope
pub fn gemini_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

/// Register a mock answering `path` with `text`, expected exactly `hits` times
pub async fn mock_reply(server: &mut ServerGuard, path: &str, text: &str, hits: usize) -> Mock {
    server
        .mock("POST", path)
        .match_header("x-goog-api-key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(text))
        .expect(hits)
        .create_async()
        .await
}
