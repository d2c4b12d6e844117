use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected-input signal for a file pick outside the format whitelist.
/// Never recorded in workflow state; surfaced at the call site only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported document format for '{filename}' (expected PDF or DOCX)")]
pub struct UnsupportedFormat {
    pub filename: String,
    pub media_type: Option<String>,
}

/// Error body shape of the analysis service (FastAPI-style `detail`).
/// Parsed for diagnostics only; the detail string never reaches the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}
