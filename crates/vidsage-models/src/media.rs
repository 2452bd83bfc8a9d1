//! Remote media handle and processing states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing state of media submitted to the remote service.
///
/// Transitions are monotonic: `Uploading → Processing → {Ready | Failed}`.
/// A handle never moves backward, and `Ready`/`Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaState {
    Uploading,
    Processing,
    Ready,
    Failed,
}

impl MediaState {
    /// Whether the state is terminal (no further polling useful).
    pub fn is_terminal(&self) -> bool {
        matches!(self, MediaState::Ready | MediaState::Failed)
    }
}

impl fmt::Display for MediaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaState::Uploading => "uploading",
            MediaState::Processing => "processing",
            MediaState::Ready => "ready",
            MediaState::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// Reference to media ingested by the remote processing service.
///
/// Created on submit; the state field is updated only by polling reads and
/// becomes immutable once `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteMediaHandle {
    /// Service-assigned resource name (e.g. "files/abc123")
    pub remote_id: String,
    /// Stable URI used to reference the media in generation calls
    pub uri: String,
    /// Mime type the service recorded for the asset
    pub mime_type: String,
    /// Latest observed processing state
    pub state: MediaState,
}

impl RemoteMediaHandle {
    pub fn is_ready(&self) -> bool {
        self.state == MediaState::Ready
    }
}
