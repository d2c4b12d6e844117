//! Pure mapping from workflow state to one of four mutually exclusive
//! render modes. Derived on every read rather than stored, so the
//! screen selection can never diverge from the state that produced it.

use shared::protocol::AnalysisReport;

use crate::controller::{Phase, WorkflowController};

/// Scores strictly above this count as favorable; 70 itself does not.
pub const FAVORABLE_THRESHOLD: u8 = 70;

/// Which of the two mutually exclusive result sub-views is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView {
    Score,
    Review,
}

/// Severity classification of a match score, used for display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreClass {
    Favorable,
    Unfavorable,
}

impl ScoreClass {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage > FAVORABLE_THRESHOLD {
            ScoreClass::Favorable
        } else {
            ScoreClass::Unfavorable
        }
    }
}

/// What the UI should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Document and context inputs; submit enabled iff a document is
    /// selected. A failed analysis surfaces its message here.
    Upload {
        selected_filename: Option<String>,
        context_text: String,
        error_message: Option<String>,
        can_submit: bool,
    },
    /// Inputs disabled, busy indication, no detail views reachable.
    Submitting { filename: String },
    /// Two selectable entry points plus a reset affordance.
    ResultSummary { report: AnalysisReport },
    /// Exactly one of the two detail panes.
    ResultDetail { pane: DetailPane },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPane {
    Score {
        percentage: u8,
        class: ScoreClass,
        verdict: String,
        /// `None` when the service reported no missing keywords; the
        /// section is omitted entirely rather than rendered empty.
        missing_keywords: Option<Vec<String>>,
    },
    Review { text: String },
}

pub fn project(controller: &WorkflowController) -> RenderMode {
    match controller.phase() {
        Phase::Idle | Phase::Failed => RenderMode::Upload {
            selected_filename: controller.document().map(|doc| doc.filename.clone()),
            context_text: controller.context_text().to_string(),
            error_message: controller.error_message().map(str::to_string),
            can_submit: controller.document().is_some(),
        },
        Phase::Submitting => RenderMode::Submitting {
            filename: controller
                .document()
                .map(|doc| doc.filename.clone())
                .unwrap_or_default(),
        },
        Phase::Complete => {
            // A result is present whenever the phase is Complete; the
            // controller enforces that on every transition.
            let Some(report) = controller.result().cloned() else {
                return RenderMode::Upload {
                    selected_filename: controller.document().map(|doc| doc.filename.clone()),
                    context_text: controller.context_text().to_string(),
                    error_message: None,
                    can_submit: controller.document().is_some(),
                };
            };
            match controller.active_detail() {
                None => RenderMode::ResultSummary { report },
                Some(DetailView::Score) => RenderMode::ResultDetail {
                    pane: DetailPane::Score {
                        percentage: report.match_percentage,
                        class: ScoreClass::from_percentage(report.match_percentage),
                        verdict: report.final_verdict,
                        missing_keywords: if report.missing_keywords.is_empty() {
                            None
                        } else {
                            Some(report.missing_keywords)
                        },
                    },
                },
                Some(DetailView::Review) => RenderMode::ResultDetail {
                    pane: DetailPane::Review {
                        text: report.hr_review,
                    },
                },
            }
        }
    }
}
