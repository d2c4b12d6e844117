//! UI layer: the app shell rendering the workflow projection.

pub mod app;

pub use app::{AnalyzerApp, StartupConfig};
