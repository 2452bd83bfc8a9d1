//! Video analysis orchestration.
//!
//! This crate provides:
//! - The pipeline stage machine and progress emission
//! - Poll policy for remote processing readiness
//! - Capability traits for the media processor and analysis backend
//! - The orchestrator driving one request end to end with guaranteed
//!   temporary-asset cleanup

pub mod error;
pub mod orchestrator;
pub mod policy;
pub mod stage;
pub mod traits;

pub use error::{PipelineError, PipelineResult};
pub use orchestrator::Orchestrator;
pub use policy::PollPolicy;
pub use stage::Stage;
pub use traits::{AnalysisBackend, MediaProcessor};
