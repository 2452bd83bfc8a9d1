//! End-to-end request orchestration.

use std::path::Path;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use vidsage_genai::GenAiError;
use vidsage_media::TempAsset;
use vidsage_models::{
    compose, AnalysisRequest, AnalysisResult, NullObserver, ProgressObserver, RemoteMediaHandle,
};

use crate::error::{PipelineError, PipelineResult};
use crate::policy::PollPolicy;
use crate::stage::Stage;
use crate::traits::{AnalysisBackend, MediaProcessor};

/// Drives one analysis request through acquire → upload → poll → compose →
/// generate, releasing the temporary asset on every exit path.
///
/// Stages run strictly sequentially; no state is shared across requests.
pub struct Orchestrator<P, A> {
    processor: P,
    agent: A,
    policy: PollPolicy,
    observer: Arc<dyn ProgressObserver>,
    cancel: CancellationToken,
}

impl<P, A> Orchestrator<P, A>
where
    P: MediaProcessor,
    A: AnalysisBackend,
{
    pub fn new(processor: P, agent: A) -> Self {
        Self {
            processor,
            agent,
            policy: PollPolicy::default(),
            observer: Arc::new(NullObserver),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Token honored at each poll iteration and before generation.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    fn emit(&self, stage: Stage) {
        self.observer.on_progress(stage.label(), stage.percent());
    }

    /// Process one request to a terminal result.
    ///
    /// Never panics and never returns an `Err`: every stage failure becomes
    /// an `AnalysisResult` with `succeeded = false` and a human-readable
    /// detail. The temporary asset is released before this returns,
    /// regardless of outcome.
    pub async fn submit_analysis(&self, request: &AnalysisRequest) -> AnalysisResult {
        if request.query.trim().is_empty() {
            let err = PipelineError::Validation(
                "no query provided; enter a question about the video".to_string(),
            );
            warn!("Rejected analysis request: {}", err);
            return AnalysisResult::failure(err.to_string());
        }

        self.emit(Stage::Acquiring);
        let mut asset = match TempAsset::acquire(&request.raw_media, ".mp4").await {
            Ok(asset) => asset,
            Err(e) => {
                let err = PipelineError::Asset(e);
                error!("Failed to stage uploaded video: {}", err);
                return AnalysisResult::failure(err.to_string());
            }
        };

        let outcome = self.run_stages(request, asset.path()).await;

        // Unconditional cleanup before control returns to the caller.
        asset.release().await;

        match outcome {
            Ok(content) => {
                self.emit(Stage::Done);
                info!("Analysis completed");
                AnalysisResult::success(content)
            }
            Err(err) => {
                match err.stage() {
                    Some(stage) => warn!("Analysis failed during {}: {}", stage, err),
                    None => warn!("Analysis failed: {}", err),
                }
                AnalysisResult::failure(err.to_string())
            }
        }
    }

    async fn run_stages(&self, request: &AnalysisRequest, path: &Path) -> PipelineResult<String> {
        self.emit(Stage::Uploading);
        let handle = self
            .processor
            .submit(path, &request.mime_hint)
            .await
            .map_err(|e| PipelineError::Upload(e.to_string()))?;

        self.emit(Stage::Processing);
        let handle = self.await_readiness(handle).await?;

        self.emit(Stage::Composing);
        let prompt = compose(&request.query, request.depth, request.web_research);

        self.emit(Stage::Generating);
        if self.cancel.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }
        if !handle.is_ready() {
            // Guarded by await_readiness; reaching this is an orchestration bug.
            error!("Generation reached with non-ready handle {}", handle.remote_id);
            return Err(PipelineError::Precondition(format!(
                "media handle in state {} at generation",
                handle.state
            )));
        }

        self.agent
            .run(&prompt, &handle)
            .await
            .map_err(|e| match e {
                GenAiError::NotReady(state) => PipelineError::Precondition(format!(
                    "media handle in state {state} at generation"
                )),
                other => PipelineError::Generation(other.to_string()),
            })
    }

    /// Poll the processor until the handle is terminal or a budget runs out.
    ///
    /// Exits Processing only on `Ready` or `Failed`; attempt and
    /// transient-error budgets come from the poll policy.
    async fn await_readiness(
        &self,
        mut handle: RemoteMediaHandle,
    ) -> PipelineResult<RemoteMediaHandle> {
        let mut attempts: u32 = 0;
        let mut transient: u32 = 0;

        while !handle.state.is_terminal() {
            if self.cancel.is_cancelled() {
                return Err(PipelineError::Cancelled);
            }
            if attempts >= self.policy.max_attempts {
                return Err(PipelineError::ProcessingTimeout { attempts });
            }
            if attempts > 0 {
                tokio::time::sleep(self.policy.interval).await;
            }

            attempts += 1;
            match self.processor.poll(&handle).await {
                Ok(latest) => {
                    transient = 0;
                    handle = latest;
                }
                Err(e) if e.is_retryable() && transient < self.policy.max_transient_errors => {
                    transient += 1;
                    warn!(
                        "Transient poll failure ({}/{}): {}",
                        transient, self.policy.max_transient_errors, e
                    );
                }
                Err(e) => return Err(PipelineError::RemoteUnavailable(e.to_string())),
            }
        }

        match handle.state {
            vidsage_models::MediaState::Ready => Ok(handle),
            _ => Err(PipelineError::RemoteFailed(
                "service marked the media as failed".to_string(),
            )),
        }
    }
}
