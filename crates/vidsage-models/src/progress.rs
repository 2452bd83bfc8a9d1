//! Progress reporting seam.
//!
//! The orchestrator emits a notification at each stage boundary; the
//! presentation layer decides how to display it. This trait is the only
//! coupling between the pipeline and its caller's UI.

/// Receives stage-boundary progress notifications.
pub trait ProgressObserver: Send + Sync {
    /// Called at each stage boundary with a display label and 0..=100 percent.
    fn on_progress(&self, label: &str, percent: u8);
}

/// Observer that discards all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_progress(&self, _label: &str, _percent: u8) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(&str, u8) + Send + Sync,
{
    fn on_progress(&self, label: &str, percent: u8) {
        self(label, percent)
    }
}
