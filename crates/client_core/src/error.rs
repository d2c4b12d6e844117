use thiserror::Error;

/// The one message shown for any failed analysis. Upstream detail
/// (status codes, credential hints, decode errors) stays in the logs.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Analysis failed. Check the API key or backend service and try again.";

/// Failure during a submission. Always normalized to
/// [`ANALYSIS_FAILED_MESSAGE`] before it reaches workflow state.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("analysis endpoint returned {status}{}", detail_suffix(.detail))]
    UpstreamStatus {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
    #[error("analysis response could not be decoded: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(": {detail}"),
        None => String::new(),
    }
}

/// Rejected `begin_submit` preconditions. No state change, no request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no document selected")]
    NoDocument,
    #[error("an analysis is already in flight")]
    AlreadySubmitting,
}
