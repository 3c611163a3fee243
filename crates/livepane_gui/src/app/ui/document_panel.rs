//! Right-side panel showing the document the preview currently displays.

use super::super::style::{COLOR_BG_SECONDARY, COLOR_TEXT_MUTED, COLOR_TEXT_SECONDARY};
use super::super::LivePaneApp;
use eframe::egui;

impl LivePaneApp {
    /// Renders the latest presented document, read-only.
    pub(crate) fn render_document_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("document_panel")
            .resizable(true)
            .default_width(460.0)
            .min_width(260.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .fill(COLOR_BG_SECONDARY)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Rendered document")
                            .strong()
                            .color(COLOR_TEXT_SECONDARY),
                    );
                    ui.label(
                        egui::RichText::new(format!("rev {}", self.revision))
                            .small()
                            .color(COLOR_TEXT_MUTED),
                    );
                });
                egui::ScrollArea::both()
                    .id_salt("document_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let mut view = self.document.as_str();
                        ui.add(
                            egui::TextEdit::multiline(&mut view)
                                .code_editor()
                                .desired_width(f32::INFINITY),
                        );
                    });
            });
    }
}
