//! Central editor bound to the active buffer.

use super::super::style::{COLOR_BG_SECONDARY, COLOR_CODE, COLOR_TEXT_SECONDARY};
use super::super::{LivePaneApp, EDITOR_ID};
use eframe::egui;

impl LivePaneApp {
    /// Renders the caption and multiline editor; every change is committed
    /// to the session in the same frame.
    pub(crate) fn render_editor_panel(&mut self, ctx: &egui::Context) {
        let caption = self.active_tab.editor_caption();
        let placeholder = self.active_tab.placeholder();
        let mut edited = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::group(ui.style())
                .fill(COLOR_BG_SECONDARY)
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(caption)
                            .strong()
                            .color(COLOR_TEXT_SECONDARY),
                    );
                    egui::ScrollArea::vertical()
                        .id_salt("editor_scroll")
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            let editor = egui::TextEdit::multiline(&mut self.editor_text)
                                .id(egui::Id::new(EDITOR_ID))
                                .code_editor()
                                .text_color(COLOR_CODE)
                                .hint_text(placeholder)
                                .desired_width(f32::INFINITY)
                                .desired_rows(24)
                                .lock_focus(true);
                            edited = ui.add(editor).changed();
                        });
                });
        });

        if edited {
            self.commit_editor_text();
        }
    }
}
