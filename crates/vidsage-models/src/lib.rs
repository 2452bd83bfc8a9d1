//! Shared data models for the VidSage backend.
//!
//! This crate provides Serde-serializable types for:
//! - Analysis requests and results
//! - Remote media handles and their processing states
//! - Prompt composition
//! - Progress reporting

pub mod media;
pub mod progress;
pub mod prompt;
pub mod request;
pub mod result;

// Re-export common types
pub use media::{MediaState, RemoteMediaHandle};
pub use progress::{NullObserver, ProgressObserver};
pub use prompt::{compose, ComposedPrompt};
pub use request::{AnalysisDepth, AnalysisRequest, DepthParseError};
pub use result::AnalysisResult;
