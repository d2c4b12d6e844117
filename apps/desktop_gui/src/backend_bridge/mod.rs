//! Bridge between the UI thread and the analysis worker: commands go
//! down a bounded queue, events come back the same way.

pub mod commands;
pub mod runtime;
