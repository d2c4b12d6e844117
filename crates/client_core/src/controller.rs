use std::sync::Arc;

use shared::domain::{Document, DocumentCandidate};
use shared::error::UnsupportedFormat;
use shared::protocol::AnalysisReport;

use crate::error::{AnalysisError, SubmitError, ANALYSIS_FAILED_MESSAGE};
use crate::projection::{self, DetailView, RenderMode};

/// Coarse workflow lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Complete,
    Failed,
}

/// Handed out by [`WorkflowController::begin_submit`]; the caller makes
/// exactly one analysis call per ticket and reports the outcome back
/// via [`WorkflowController::finish_submit`] with `generation`.
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    pub generation: u64,
    pub document: Arc<Document>,
    /// Empty context text is already normalized to `None` here, so it
    /// is omitted from the outbound request rather than sent empty.
    pub context_text: Option<String>,
}

/// The client-side request/view state machine. Owns all mutable
/// workflow state; the UI reads it through accessors and
/// [`WorkflowController::projection`] and mutates it only through the
/// operations below.
#[derive(Debug, Default)]
pub struct WorkflowController {
    document: Option<Arc<Document>>,
    context_text: String,
    phase: Phase,
    result: Option<AnalysisReport>,
    error_message: Option<String>,
    active_detail: Option<DetailView>,
    generation: u64,
}

impl WorkflowController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and selects a new candidate document. On success any
    /// prior result, failure, or open detail view is discarded and the
    /// phase returns to Idle; a new document invalidates any prior
    /// analysis. Silently ignored while an analysis is in flight.
    pub fn select_document(
        &mut self,
        candidate: DocumentCandidate,
    ) -> Result<(), UnsupportedFormat> {
        if self.phase() == Phase::Submitting {
            tracing::debug!("select_document ignored while submitting");
            return Ok(());
        }

        let document = candidate.into_document()?;
        tracing::info!(filename = %document.filename, "document selected");
        self.document = Some(Arc::new(document));
        self.phase = Phase::Idle;
        self.result = None;
        self.error_message = None;
        self.active_detail = None;
        Ok(())
    }

    /// Unconditional replace; empty string means "no context".
    pub fn set_context_text(&mut self, text: impl Into<String>) {
        self.context_text = text.into();
    }

    /// Starts a submission: phase moves to Submitting and the returned
    /// ticket carries a fresh generation token. Rejected without state
    /// change if no document is selected or one is already in flight,
    /// so at most one analysis call is ever outstanding.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, SubmitError> {
        if self.phase() == Phase::Submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        let document = self.document.clone().ok_or(SubmitError::NoDocument)?;

        self.generation += 1;
        self.phase = Phase::Submitting;
        self.result = None;
        self.error_message = None;
        self.active_detail = None;
        tracing::info!(
            generation = self.generation,
            filename = %document.filename,
            "submitting document for analysis"
        );

        let context_text = match self.context_text.trim() {
            "" => None,
            _ => Some(self.context_text.clone()),
        };
        Ok(SubmissionTicket {
            generation: self.generation,
            document,
            context_text,
        })
    }

    /// Applies the outcome of the submission tagged `generation`.
    /// Returns false and leaves state untouched when the completion is
    /// stale: the workflow has been reset or resubmitted since the
    /// ticket was issued, and at most one outcome may ever apply to a
    /// given generation.
    pub fn finish_submit(
        &mut self,
        generation: u64,
        outcome: Result<AnalysisReport, AnalysisError>,
    ) -> bool {
        if self.phase() != Phase::Submitting || generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale analysis completion"
            );
            return false;
        }

        match outcome {
            Ok(report) => {
                tracing::info!(generation, score = report.match_percentage, "analysis complete");
                self.result = Some(report);
                self.error_message = None;
                self.phase = Phase::Complete;
            }
            Err(err) => {
                tracing::warn!(generation, error = %err, "analysis failed");
                self.result = None;
                self.error_message = Some(ANALYSIS_FAILED_MESSAGE.to_string());
                self.phase = Phase::Failed;
            }
        }
        true
    }

    /// Opens one of the two result detail views. No-op unless a result
    /// is present.
    pub fn open_detail(&mut self, view: DetailView) {
        if self.phase() == Phase::Complete {
            self.active_detail = Some(view);
        }
    }

    pub fn close_detail(&mut self) {
        self.active_detail = None;
    }

    /// Returns the aggregate to its initial empty state from any
    /// phase. An analysis outstanding at this point is left to resolve
    /// and discarded by the stale guard in [`Self::finish_submit`].
    pub fn reset(&mut self) {
        tracing::info!("workflow reset");
        self.document = None;
        self.context_text.clear();
        self.phase = Phase::Idle;
        self.result = None;
        self.error_message = None;
        self.active_detail = None;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_deref()
    }

    pub fn context_text(&self) -> &str {
        &self.context_text
    }

    pub fn result(&self) -> Option<&AnalysisReport> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn active_detail(&self) -> Option<DetailView> {
        self.active_detail
    }

    /// Derives the current render mode. Pure and recomputed on every
    /// call; never cached across mutations.
    pub fn projection(&self) -> RenderMode {
        projection::project(self)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
