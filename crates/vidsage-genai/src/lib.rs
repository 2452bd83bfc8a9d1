//! Client for the hosted generative media analysis service.
//!
//! This crate provides:
//! - File ingestion and readiness polling (the remote media processor)
//! - The analysis agent: generation against ready media, with an optional
//!   web-search tool capability fixed at construction time
//!
//! The service credential is injected through [`GenAiConfig`]; nothing in
//! this crate reads ambient environment state after construction.

pub mod agent;
pub mod client;
pub mod error;
pub mod files;
pub mod types;

pub use agent::{AnalysisAgent, AugmentationTool};
pub use client::{GenAiClient, GenAiConfig};
pub use error::{GenAiError, GenAiResult};
