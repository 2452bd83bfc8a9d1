//! Terminal analysis result returned to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one analysis request.
///
/// Stage failures never crash the pipeline; they surface here as
/// `succeeded = false` with a human-readable `error_detail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Generated answer text (empty on failure)
    pub content: String,
    /// Whether the pipeline reached the Done state
    pub succeeded: bool,
    /// Human-readable description of the failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    /// When the result was produced
    pub completed_at: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            succeeded: true,
            error_detail: None,
            completed_at: Utc::now(),
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            succeeded: false,
            error_detail: Some(detail.into()),
            completed_at: Utc::now(),
        }
    }
}
