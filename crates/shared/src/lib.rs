//! Types shared between the workflow core and the desktop UI: document
//! domain model, the analysis service wire contract, and error shapes.

pub mod domain;
pub mod error;
pub mod protocol;
