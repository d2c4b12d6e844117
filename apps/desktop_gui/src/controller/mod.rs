//! Controller layer: backend events and command orchestration for the
//! UI thread. Workflow state itself lives in `client_core`.

pub mod events;
pub mod orchestration;
