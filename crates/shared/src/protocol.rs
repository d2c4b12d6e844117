use serde::{Deserialize, Serialize};

/// Structured analysis produced by the remote service. Immutable once
/// received; field names are the wire names of the `/analyze` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Compatibility score, 0-100.
    pub match_percentage: u8,
    /// Short categorical verdict, e.g. "Strong Match".
    pub final_verdict: String,
    /// Keywords from the job description absent from the resume, in
    /// the order the service reported them. May be empty.
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    /// Free-text narrative review, rendered verbatim.
    pub hr_review: String,
}

/// Success body of `POST /analyze`: the echoed filename plus the
/// analysis record nested under `analysis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub filename: String,
    pub analysis: AnalysisReport,
}
