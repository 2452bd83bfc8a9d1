//! Scoped temporary asset handling.
//!
//! One uploaded video is staged as exactly one temporary file for the
//! lifetime of its analysis request. The file is removed when the request
//! reaches any terminal state; `Drop` covers paths that skip the explicit
//! release.

pub mod error;
pub mod temp;

pub use error::{AssetError, AssetResult};
pub use temp::TempAsset;
