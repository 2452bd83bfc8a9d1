//! Uniquely named temporary file with guaranteed release.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{AssetError, AssetResult};

/// A temporary file owned by one in-flight analysis request.
///
/// `release()` is idempotent: repeated calls (and a missing file) are
/// no-ops. If the asset is still held when dropped, a best-effort blocking
/// removal runs so the file cannot leak past the request.
#[derive(Debug)]
pub struct TempAsset {
    path: PathBuf,
    released: bool,
}

impl TempAsset {
    /// Write `bytes` to a uniquely named file in the system temp directory.
    pub async fn acquire(bytes: &[u8], suffix: &str) -> AssetResult<Self> {
        let filename = format!("vidsage-{}{}", Uuid::new_v4(), suffix);
        let path = std::env::temp_dir().join(filename);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| AssetError::WriteFailed {
                path: path.clone(),
                source,
            })?;

        debug!("Staged temporary asset at {}", path.display());
        Ok(Self {
            path,
            released: false,
        })
    }

    /// Path of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file. Never errors: a missing file or a second call is a
    /// no-op, and removal failures are logged rather than raised.
    pub async fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => debug!("Released temporary asset {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to remove temporary asset {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

impl Drop for TempAsset {
    fn drop(&mut self) {
        if !self.released {
            self.released = true;
            if let Err(e) = std::fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        "Failed to remove temporary asset {} on drop: {}",
                        self.path.display(),
                        e
                    );
                }
            }
        }
    }
}
