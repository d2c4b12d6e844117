//! Events flowing from the analysis worker back to the UI thread.

use client_core::AnalysisError;
use shared::protocol::AnalysisReport;

pub enum UiEvent {
    /// Status-line message, outside the workflow aggregate.
    Info(String),
    /// The worker could not start; the workflow stays usable but no
    /// submission will ever complete.
    BridgeFailed(String),
    /// Outcome of the submission tagged `generation`. Applied through
    /// the controller's stale guard, never directly.
    AnalysisFinished {
        generation: u64,
        outcome: Result<AnalysisReport, AnalysisError>,
    },
}
