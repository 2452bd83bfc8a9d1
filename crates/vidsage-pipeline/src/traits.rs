//! Capability traits the orchestrator depends on.
//!
//! The concrete service client implements both; tests substitute fakes.

use std::path::Path;

use async_trait::async_trait;

use vidsage_genai::{AnalysisAgent, GenAiClient, GenAiResult};
use vidsage_models::{ComposedPrompt, RemoteMediaHandle};

/// Ingests a staged media file and exposes its asynchronous readiness state.
#[async_trait]
pub trait MediaProcessor: Send + Sync {
    /// Upload the asset; returns a handle to poll.
    async fn submit(&self, path: &Path, mime_type: &str) -> GenAiResult<RemoteMediaHandle>;

    /// Fetch the latest state for a submitted handle.
    async fn poll(&self, handle: &RemoteMediaHandle) -> GenAiResult<RemoteMediaHandle>;
}

/// Runs a composed prompt against ready media.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn run(&self, prompt: &ComposedPrompt, media: &RemoteMediaHandle)
        -> GenAiResult<String>;
}

#[async_trait]
impl MediaProcessor for GenAiClient {
    async fn submit(&self, path: &Path, mime_type: &str) -> GenAiResult<RemoteMediaHandle> {
        self.submit_media(path, mime_type).await
    }

    async fn poll(&self, handle: &RemoteMediaHandle) -> GenAiResult<RemoteMediaHandle> {
        self.poll_media(handle).await
    }
}

#[async_trait]
impl AnalysisBackend for AnalysisAgent {
    async fn run(
        &self,
        prompt: &ComposedPrompt,
        media: &RemoteMediaHandle,
    ) -> GenAiResult<String> {
        AnalysisAgent::run(self, prompt, media).await
    }
}
