//! Analysis agent: generation against ready media.

use tracing::{debug, error};

use vidsage_models::{ComposedPrompt, MediaState, RemoteMediaHandle};

use crate::client::GenAiClient;
use crate::error::{GenAiError, GenAiResult};
use crate::types::{
    Content, GenerateRequest, GenerateResponse, GoogleSearch, Part, ToolDeclaration,
};

/// Optional capability the agent may be augmented with.
///
/// Capabilities are fixed at construction time, not per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AugmentationTool {
    /// Live web search for external context
    WebSearch,
}

/// Reasoning agent that answers a composed prompt against ingested media.
#[derive(Debug, Clone)]
pub struct AnalysisAgent {
    client: GenAiClient,
    tools: Vec<AugmentationTool>,
}

impl AnalysisAgent {
    pub fn new(client: GenAiClient, tools: Vec<AugmentationTool>) -> Self {
        Self { client, tools }
    }

    /// Whether the web-search capability is attached.
    pub fn has_web_search(&self) -> bool {
        self.tools.contains(&AugmentationTool::WebSearch)
    }

    fn tool_declarations(&self) -> Vec<ToolDeclaration> {
        self.tools
            .iter()
            .map(|tool| match tool {
                AugmentationTool::WebSearch => ToolDeclaration {
                    google_search: Some(GoogleSearch {}),
                },
            })
            .collect()
    }

    /// Run the prompt against a ready media handle.
    ///
    /// The handle must be in the `Ready` state; anything else is an
    /// orchestration bug, not a recoverable service failure. Backend errors
    /// (quota, malformed reference, timeout) wrap into `GenerationFailed`
    /// and are always recoverable by the caller.
    pub async fn run(
        &self,
        prompt: &ComposedPrompt,
        media: &RemoteMediaHandle,
    ) -> GenAiResult<String> {
        if media.state != MediaState::Ready {
            error!(
                "Agent invoked with non-ready media handle {} (state: {})",
                media.remote_id, media.state
            );
            return Err(GenAiError::NotReady(media.state.to_string()));
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.client.config.base_url,
            self.client.config.model
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::text(prompt.as_str()),
                    Part::file(media.uri.clone(), media.mime_type.clone()),
                ],
            }],
            tools: self.tool_declarations(),
        };

        debug!(
            "Generating against {} with model {} (web search: {})",
            media.remote_id,
            self.client.config.model,
            self.has_web_search()
        );

        let response = self
            .client
            .http
            .post(&url)
            .header("x-goog-api-key", &self.client.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenAiError::GenerationFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::GenerationFailed(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenAiError::GenerationFailed(e.to_string()))?;

        generated
            .text()
            .ok_or_else(|| GenAiError::InvalidResponse("response contained no text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wiremock::matchers::{body_partial_json, method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use vidsage_models::compose;
    use vidsage_models::AnalysisDepth;

    use crate::client::GenAiConfig;

    fn agent_for(server: &MockServer, tools: Vec<AugmentationTool>) -> AnalysisAgent {
        let mut config = GenAiConfig::new("test-key");
        config.base_url = server.uri();
        AnalysisAgent::new(GenAiClient::new(config).unwrap(), tools)
    }

    fn ready_handle() -> RemoteMediaHandle {
        RemoteMediaHandle {
            remote_id: "files/abc123".to_string(),
            uri: "https://example.com/v1beta/files/abc123".to_string(),
            mime_type: "video/mp4".to_string(),
            state: MediaState::Ready,
        }
    }

    #[tokio::test]
    async fn test_run_returns_generated_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(url_path("/v1beta/models/gemini-2.0-flash-exp:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "The video shows a lecture."}]}}]
            })))
            .mount(&server)
            .await;

        let prompt = compose("What happens?", AnalysisDepth::Standard, false);
        let text = agent_for(&server, vec![])
            .run(&prompt, &ready_handle())
            .await
            .unwrap();

        assert_eq!(text, "The video shows a lecture.");
    }

    #[tokio::test]
    async fn test_run_declares_search_tool_when_attached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(url_path("/v1beta/models/gemini-2.0-flash-exp:generateContent"))
            .and(body_partial_json(serde_json::json!({
                "tools": [{"googleSearch": {}}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let prompt = compose("q", AnalysisDepth::Quick, true);
        agent_for(&server, vec![AugmentationTool::WebSearch])
            .run(&prompt, &ready_handle())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_run_rejects_non_ready_handle() {
        let server = MockServer::start().await;
        let mut handle = ready_handle();
        handle.state = MediaState::Processing;

        let prompt = compose("q", AnalysisDepth::Quick, false);
        let err = agent_for(&server, vec![])
            .run(&prompt, &handle)
            .await
            .unwrap_err();

        assert!(matches!(err, GenAiError::NotReady(_)));
    }

    #[tokio::test]
    async fn test_backend_error_wraps_as_generation_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(url_path("/v1beta/models/gemini-2.0-flash-exp:generateContent"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
            .mount(&server)
            .await;

        let prompt = compose("q", AnalysisDepth::Quick, false);
        let err = agent_for(&server, vec![])
            .run(&prompt, &ready_handle())
            .await
            .unwrap_err();

        assert!(matches!(err, GenAiError::GenerationFailed(_)));
        assert!(!err.is_retryable());
    }
}
