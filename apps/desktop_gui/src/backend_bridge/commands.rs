//! Backend commands queued from UI to the analysis worker.

use std::sync::Arc;

use client_core::SubmissionTicket;
use shared::domain::Document;

pub enum BackendCommand {
    Analyze {
        generation: u64,
        document: Arc<Document>,
        context_text: Option<String>,
    },
}

impl From<SubmissionTicket> for BackendCommand {
    fn from(ticket: SubmissionTicket) -> Self {
        BackendCommand::Analyze {
            generation: ticket.generation,
            document: ticket.document,
            context_text: ticket.context_text,
        }
    }
}
