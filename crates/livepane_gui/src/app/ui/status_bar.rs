//! Bottom status bar rendering for preview metadata.

use super::super::style::{COLOR_TEXT_MUTED, COLOR_TEXT_SECONDARY};
use super::super::LivePaneApp;
use eframe::egui;

impl LivePaneApp {
    /// Renders the bottom status bar with revision, status, and server address.
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("Revision {}", self.revision))
                            .color(COLOR_TEXT_SECONDARY),
                    );
                    if let Some(status) = &self.status {
                        ui.separator();
                        ui.label(egui::RichText::new(&status.text).color(egui::Color32::YELLOW));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let preview_label = if self.server_used_fallback {
                            format!("Preview: {} (auto)", self.preview_url)
                        } else {
                            format!("Preview: {}", self.preview_url)
                        };
                        ui.label(
                            egui::RichText::new(preview_label)
                                .small()
                                .color(COLOR_TEXT_SECONDARY),
                        );
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!("{} chars", self.active_text_chars()))
                                .small()
                                .color(COLOR_TEXT_MUTED),
                        );
                    });
                });
            });
    }
}
