//! Analysis request types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How thorough the generated analysis should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDepth {
    /// Concise response, most important aspects only
    Quick,
    /// Balanced analysis with moderate detail
    Standard,
    /// Comprehensive analysis with nuanced observations
    Detailed,
}

impl AnalysisDepth {
    /// All available depths.
    pub const ALL: &'static [AnalysisDepth] = &[
        AnalysisDepth::Quick,
        AnalysisDepth::Standard,
        AnalysisDepth::Detailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisDepth::Quick => "quick",
            AnalysisDepth::Standard => "standard",
            AnalysisDepth::Detailed => "detailed",
        }
    }
}

impl Default for AnalysisDepth {
    fn default() -> Self {
        AnalysisDepth::Standard
    }
}

impl fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnalysisDepth {
    type Err = DepthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" => Ok(AnalysisDepth::Quick),
            "standard" => Ok(AnalysisDepth::Standard),
            "detailed" => Ok(AnalysisDepth::Detailed),
            other => Err(DepthParseError(other.to_string())),
        }
    }
}

/// Error parsing an analysis depth from a string.
#[derive(Debug, Error)]
#[error("Unknown analysis depth: {0}")]
pub struct DepthParseError(pub String);

/// A single user submission: raw media plus the question to answer.
///
/// Immutable once constructed; each request owns its own temporary asset
/// and remote handle for the duration of the pipeline.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Raw video bytes as uploaded
    pub raw_media: Vec<u8>,
    /// Mime type hint from the uploader (e.g. "video/mp4")
    pub mime_hint: String,
    /// The user's question about the video
    pub query: String,
    /// Requested analysis depth
    pub depth: AnalysisDepth,
    /// Whether the agent may supplement with live web research
    pub web_research: bool,
}

impl AnalysisRequest {
    pub fn new(
        raw_media: Vec<u8>,
        mime_hint: impl Into<String>,
        query: impl Into<String>,
        depth: AnalysisDepth,
        web_research: bool,
    ) -> Self {
        Self {
            raw_media,
            mime_hint: mime_hint.into(),
            query: query.into(),
            depth,
            web_research,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_parse_roundtrip() {
        for depth in AnalysisDepth::ALL {
            let parsed: AnalysisDepth = depth.as_str().parse().unwrap();
            assert_eq!(parsed, *depth);
        }
    }

    #[test]
    fn test_depth_parse_case_insensitive() {
        let parsed: AnalysisDepth = "Detailed".parse().unwrap();
        assert_eq!(parsed, AnalysisDepth::Detailed);
    }

    #[test]
    fn test_depth_parse_unknown() {
        assert!("exhaustive".parse::<AnalysisDepth>().is_err());
    }

    #[test]
    fn test_depth_default_is_standard() {
        assert_eq!(AnalysisDepth::default(), AnalysisDepth::Standard);
    }
}
