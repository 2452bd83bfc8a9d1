//! Pipeline stages and their progress display values.

use std::fmt;

/// Stages of one analysis request.
///
/// The machine runs `Acquiring → Uploading → Processing → Composing →
/// Generating → Done`; a failure at any non-terminal stage ends the request
/// with the stage recorded on the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Acquiring,
    Uploading,
    Processing,
    Composing,
    Generating,
    Done,
}

impl Stage {
    /// Display label emitted to the progress observer.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Acquiring => "Initializing video processing...",
            Stage::Uploading => "Uploading video for AI analysis...",
            Stage::Processing => "Processing video frames and audio...",
            Stage::Composing => "Analyzing content and gathering insights...",
            Stage::Generating => "Generating final response...",
            Stage::Done => "Analysis complete!",
        }
    }

    /// Progress percentage at this stage boundary.
    pub fn percent(&self) -> u8 {
        match self {
            Stage::Acquiring => 10,
            Stage::Uploading => 30,
            Stage::Processing => 50,
            Stage::Composing => 70,
            Stage::Generating => 90,
            Stage::Done => 100,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Acquiring => "acquiring",
            Stage::Uploading => "uploading",
            Stage::Processing => "processing",
            Stage::Composing => "composing",
            Stage::Generating => "generating",
            Stage::Done => "done",
        };
        write!(f, "{s}")
    }
}
