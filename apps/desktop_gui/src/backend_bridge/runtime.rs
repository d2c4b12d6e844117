//! Analysis worker: a dedicated thread owning the tokio runtime and
//! the HTTP client. Commands are serviced sequentially, so at most one
//! analysis call is in flight at any time.

use std::thread;

use crossbeam_channel::{Receiver, Sender};

use client_core::{AnalysisClient, HttpAnalysisClient};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, api_url: String) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BridgeFailed(format!(
                    "Analysis worker startup failure: could not build runtime: {err}"
                )));
                tracing::error!("failed to build analysis worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = HttpAnalysisClient::new(api_url);
            tracing::info!(base_url = client.base_url(), "analysis worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Analyze {
                        generation,
                        document,
                        context_text,
                    } => {
                        tracing::info!(
                            generation,
                            filename = %document.filename,
                            "backend: analyze"
                        );
                        let outcome = client.analyze(&document, context_text.as_deref()).await;
                        if let Err(err) = &outcome {
                            tracing::warn!(generation, "backend: analyze failed: {err}");
                        }
                        let _ = ui_tx.try_send(UiEvent::AnalysisFinished {
                            generation,
                            outcome,
                        });
                    }
                }
            }
        });
    });
}
