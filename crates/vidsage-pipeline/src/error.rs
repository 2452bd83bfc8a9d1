//! Pipeline error taxonomy.

use thiserror::Error;

use vidsage_media::AssetError;

use crate::stage::Stage;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Failure kinds for one analysis request.
///
/// None of these crash the host; the orchestrator translates them into an
/// `AnalysisResult` with `succeeded = false`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Failed to stage video: {0}")]
    Asset(#[from] AssetError),

    #[error("Video upload failed: {0}")]
    Upload(String),

    #[error("Processing service unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Remote service could not process the video: {0}")]
    RemoteFailed(String),

    #[error("Timed out waiting for video processing after {attempts} polls")]
    ProcessingTimeout { attempts: u32 },

    #[error("Analysis cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Precondition(String),

    #[error("Analysis generation failed: {0}")]
    Generation(String),
}

impl PipelineError {
    /// Stage at which the failure fired. `None` for validation failures:
    /// the machine never leaves Idle.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::Validation(_) => None,
            PipelineError::Asset(_) => Some(Stage::Acquiring),
            PipelineError::Upload(_) => Some(Stage::Uploading),
            PipelineError::RemoteUnavailable(_)
            | PipelineError::RemoteFailed(_)
            | PipelineError::ProcessingTimeout { .. }
            | PipelineError::Cancelled => Some(Stage::Processing),
            PipelineError::Precondition(_) | PipelineError::Generation(_) => {
                Some(Stage::Generating)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_has_no_stage() {
        assert!(PipelineError::Validation("empty query".into())
            .stage()
            .is_none());
    }

    #[test]
    fn test_timeout_fires_in_processing() {
        let err = PipelineError::ProcessingTimeout { attempts: 300 };
        assert_eq!(err.stage(), Some(Stage::Processing));
        assert!(err.to_string().contains("300"));
    }
}
