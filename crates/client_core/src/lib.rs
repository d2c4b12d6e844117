//! Client-side workflow core for the resume analyzer: the request/view
//! state machine ([`WorkflowController`]), its pure view projection,
//! and the [`AnalysisClient`] seam to the remote analysis service.
//!
//! The controller is owned by the UI thread; the single asynchronous
//! operation (the analysis call) runs elsewhere and reports back
//! through [`WorkflowController::finish_submit`] with the generation
//! token it was handed, so stale completions can never clobber a state
//! that has since moved on.

use async_trait::async_trait;

use shared::domain::Document;
use shared::protocol::AnalysisReport;

pub mod controller;
pub mod error;
pub mod http;
pub mod projection;

pub use controller::{Phase, SubmissionTicket, WorkflowController};
pub use error::{AnalysisError, SubmitError, ANALYSIS_FAILED_MESSAGE};
pub use http::HttpAnalysisClient;
pub use projection::{DetailPane, DetailView, RenderMode, ScoreClass};

/// The external analysis collaborator: one asynchronous call. The
/// document is borrowed for the duration of the call only; the
/// implementation must not retain it.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(
        &self,
        document: &Document,
        context_text: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError>;
}
