use std::path::Path;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{Color32, RichText};

use client_core::{DetailPane, DetailView, RenderMode, ScoreClass, WorkflowController};
use shared::domain::DocumentCandidate;
use shared::protocol::AnalysisReport;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

const ACCENT: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8);
const FAVORABLE: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);
const UNFAVORABLE: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_url: String,
}

pub struct AnalyzerApp {
    controller: WorkflowController,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    /// Mirror of the controller's context text for the text widget;
    /// pushed into the controller on every edit.
    context_draft: String,
    /// Rejected-input notice from the last file pick. Call-site state,
    /// deliberately outside the workflow aggregate.
    validation_notice: Option<String>,
    status: String,
    api_url: String,
}

impl AnalyzerApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            controller: WorkflowController::new(),
            cmd_tx,
            ui_rx,
            context_draft: String::new(),
            validation_notice: None,
            status: "Starting analysis worker...".to_string(),
            api_url: startup.api_url,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::BridgeFailed(message) => {
                    tracing::error!("analysis worker unavailable: {message}");
                    self.status = message;
                }
                UiEvent::AnalysisFinished {
                    generation,
                    outcome,
                } => {
                    if self.controller.finish_submit(generation, outcome) {
                        self.status = "Ready".to_string();
                    }
                }
            }
        }
    }

    fn pick_document(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Resume documents", &["pdf", "docx"])
            .pick_file()
        else {
            return;
        };

        match document_candidate_from_path(&path) {
            Ok(candidate) => match self.controller.select_document(candidate) {
                Ok(()) => {
                    self.validation_notice = None;
                }
                Err(err) => {
                    self.validation_notice = Some(err.to_string());
                }
            },
            Err(err) => {
                self.validation_notice =
                    Some(format!("Could not read '{}': {err}", path.display()));
            }
        }
    }

    fn submit(&mut self) {
        match self.controller.begin_submit() {
            Ok(ticket) => {
                dispatch_backend_command(&self.cmd_tx, ticket.into(), &mut self.status);
            }
            Err(err) => {
                self.status = err.to_string();
            }
        }
    }

    fn reset_workflow(&mut self) {
        self.controller.reset();
        self.context_draft.clear();
        self.validation_notice = None;
        self.status = "Ready".to_string();
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading(RichText::new("Resume Analyzer").size(28.0).strong());
            ui.label(RichText::new("AI-powered resume screening").weak());
        });
        ui.add_space(4.0);
        ui.separator();
    }

    fn show_upload_screen(
        &mut self,
        ui: &mut egui::Ui,
        selected_filename: Option<String>,
        error_message: Option<String>,
        can_submit: bool,
    ) {
        ui.add_space(12.0);
        ui.columns(2, |cols| {
            cols[0].group(|ui| {
                ui.label(RichText::new("1. Job Description").strong());
                ui.label(
                    RichText::new("Paste the JD here to compare against the resume.").weak(),
                );
                ui.add_space(6.0);
                let response = ui.add(
                    egui::TextEdit::multiline(&mut self.context_draft)
                        .hint_text("Paste text here...")
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.controller.set_context_text(self.context_draft.clone());
                }
            });

            cols[1].group(|ui| {
                ui.label(RichText::new("2. Upload Resume").strong());
                ui.label(RichText::new("Supported formats: PDF, DOCX").weak());
                ui.add_space(6.0);
                if ui.button("Select resume file...").clicked() {
                    self.pick_document();
                }
                ui.add_space(6.0);
                match &selected_filename {
                    Some(filename) => {
                        ui.label(RichText::new(filename.as_str()).strong());
                        ui.colored_label(FAVORABLE, "Ready to analyze");
                    }
                    None => {
                        ui.label(RichText::new("No file selected").weak());
                    }
                }
                if let Some(notice) = &self.validation_notice {
                    ui.add_space(4.0);
                    ui.colored_label(UNFAVORABLE, notice.as_str());
                }
            });
        });

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            let analyze = ui.add_enabled(
                can_submit,
                egui::Button::new(RichText::new("Analyze Profile").size(16.0)),
            );
            if analyze.clicked() {
                self.submit();
            }
            if let Some(message) = &error_message {
                ui.add_space(8.0);
                ui.colored_label(UNFAVORABLE, message.as_str());
            }
        });
    }

    fn show_summary_screen(&mut self, ui: &mut egui::Ui, _report: &AnalysisReport) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Analysis Complete!").color(FAVORABLE));
            ui.add_space(16.0);

            let score_card = ui.add(
                egui::Button::new(
                    RichText::new("Match Percentage\nView compatibility score & verdict")
                        .size(15.0),
                )
                .min_size(egui::vec2(320.0, 72.0)),
            );
            if score_card.clicked() {
                self.controller.open_detail(DetailView::Score);
            }

            ui.add_space(8.0);
            let review_card = ui.add(
                egui::Button::new(
                    RichText::new("HR Review\nView strengths & weaknesses").size(15.0),
                )
                .min_size(egui::vec2(320.0, 72.0)),
            );
            if review_card.clicked() {
                self.controller.open_detail(DetailView::Review);
            }

            ui.add_space(24.0);
            if ui.button("Analyze Another Resume").clicked() {
                self.reset_workflow();
            }
        });
    }

    fn show_detail_window(&mut self, ctx: &egui::Context, pane: &DetailPane) {
        let title = match pane {
            DetailPane::Score { .. } => "ATS Match Score",
            DetailPane::Review { .. } => "HR Review",
        };

        let mut keep_open = true;
        let window = egui::Window::new(title)
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_width(480.0);
                match pane {
                    DetailPane::Score {
                        percentage,
                        class,
                        verdict,
                        missing_keywords,
                    } => {
                        show_score_pane(
                            ui,
                            *percentage,
                            *class,
                            verdict,
                            missing_keywords.as_deref(),
                        );
                    }
                    DetailPane::Review { text } => {
                        show_review_pane(ui, text);
                    }
                }
            });

        // The close button and any click outside the window both leave
        // the detail view.
        let clicked_outside = window
            .map(|inner| inner.response.clicked_elsewhere())
            .unwrap_or(false);
        if !keep_open || clicked_outside {
            self.controller.close_detail();
        }
    }
}

fn show_submitting_screen(ui: &mut egui::Ui, filename: &str) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.add(egui::Spinner::new().size(32.0));
        ui.add_space(12.0);
        ui.label(RichText::new(format!("Analyzing {filename}...")).size(16.0));
        ui.label(RichText::new("Inputs are disabled while the analysis runs.").weak());
    });
}

fn show_score_pane(
    ui: &mut egui::Ui,
    percentage: u8,
    class: ScoreClass,
    verdict: &str,
    missing_keywords: Option<&[String]>,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("{percentage}%"))
                .size(56.0)
                .strong()
                .color(score_color(class)),
        );
        ui.add_space(4.0);
        ui.label(RichText::new(verdict).size(16.0).strong().color(ACCENT));

        if let Some(keywords) = missing_keywords {
            ui.add_space(16.0);
            ui.label(RichText::new("Missing Keywords:").strong());
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for keyword in keywords {
                    keyword_tag(ui, keyword);
                }
            });
        }
    });
}

fn show_review_pane(ui: &mut egui::Ui, text: &str) {
    ui.add_space(4.0);
    egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
        ui.label(text);
    });
}

fn score_color(class: ScoreClass) -> Color32 {
    match class {
        ScoreClass::Favorable => FAVORABLE,
        ScoreClass::Unfavorable => UNFAVORABLE,
    }
}

fn keyword_tag(ui: &mut egui::Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .background_color(Color32::from_rgb(0x45, 0x1a, 0x1a))
            .color(UNFAVORABLE),
    );
}

fn document_candidate_from_path(path: &Path) -> std::io::Result<DocumentCandidate> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let media_type = mime_guess::from_path(path).first_raw().map(str::to_string);
    Ok(DocumentCandidate {
        filename,
        media_type,
        bytes,
    })
}

impl eframe::App for AnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mode = self.controller.projection();
        let mut detail_pane = None;

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.api_url.as_str());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            match mode {
                RenderMode::Upload {
                    selected_filename,
                    error_message,
                    can_submit,
                    ..
                } => self.show_upload_screen(ui, selected_filename, error_message, can_submit),
                RenderMode::Submitting { filename } => show_submitting_screen(ui, &filename),
                RenderMode::ResultSummary { report } => self.show_summary_screen(ui, &report),
                RenderMode::ResultDetail { pane } => detail_pane = Some(pane),
            }
        });

        if let Some(pane) = detail_pane {
            self.show_detail_window(ctx, &pane);
        }

        // Completions arrive over a channel, not an egui event, so
        // keep polling while anything can still change.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::Phase;
    use crossbeam_channel::bounded;
    use shared::protocol::AnalysisReport;

    fn test_app() -> AnalyzerApp {
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(4);
        let (_ui_tx, ui_rx) = bounded::<UiEvent>(4);
        AnalyzerApp::bootstrap(
            cmd_tx,
            ui_rx,
            StartupConfig {
                api_url: "http://127.0.0.1:8000".to_string(),
            },
        )
    }

    fn report() -> AnalysisReport {
        AnalysisReport {
            match_percentage: 85,
            final_verdict: "Strong Match".to_string(),
            missing_keywords: Vec::new(),
            hr_review: "Solid candidate.".to_string(),
        }
    }

    #[test]
    fn candidate_from_path_guesses_media_type_from_extension() {
        let dir = std::env::temp_dir();
        let path = dir.join("resume_analyzer_test_candidate.docx");
        std::fs::write(&path, b"docx bytes").expect("write temp file");

        let candidate = document_candidate_from_path(&path).expect("candidate");
        assert_eq!(candidate.filename, "resume_analyzer_test_candidate.docx");
        assert_eq!(
            candidate.media_type.as_deref(),
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        );
        assert_eq!(candidate.bytes, b"docx bytes");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn stale_analysis_event_does_not_move_the_workflow() {
        let mut app = test_app();
        let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
        app.ui_rx = ui_rx;

        app.controller
            .select_document(DocumentCandidate {
                filename: "resume.pdf".to_string(),
                media_type: Some("application/pdf".to_string()),
                bytes: b"%PDF".to_vec(),
            })
            .expect("select");
        let ticket = app.controller.begin_submit().expect("submit");

        ui_tx
            .try_send(UiEvent::AnalysisFinished {
                generation: ticket.generation + 1,
                outcome: Ok(report()),
            })
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.controller.phase(), Phase::Submitting);
        assert!(app.controller.result().is_none());
    }

    #[test]
    fn current_analysis_event_completes_the_workflow() {
        let mut app = test_app();
        let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
        app.ui_rx = ui_rx;

        app.controller
            .select_document(DocumentCandidate {
                filename: "resume.pdf".to_string(),
                media_type: Some("application/pdf".to_string()),
                bytes: b"%PDF".to_vec(),
            })
            .expect("select");
        let ticket = app.controller.begin_submit().expect("submit");

        ui_tx
            .try_send(UiEvent::AnalysisFinished {
                generation: ticket.generation,
                outcome: Ok(report()),
            })
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.controller.phase(), Phase::Complete);
        assert_eq!(app.status, "Ready");
    }
}
