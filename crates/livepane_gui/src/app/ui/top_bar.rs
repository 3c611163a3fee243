//! Top bar: heading, tab selector, and links to the live preview.

use super::super::style::{COLOR_ACCENT, COLOR_HEADING, COLOR_TEXT_MUTED};
use super::super::LivePaneApp;
use eframe::egui;
use livepane_core::Tab;

impl LivePaneApp {
    /// Renders the heading row and the three mutually exclusive tab buttons.
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let mut clicked: Option<Tab> = None;
        let editor_url = self.editor_url();
        let preview_url = self.standalone_preview_url();
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.heading(
                        egui::RichText::new("Tabbed Code Editor")
                            .strong()
                            .color(COLOR_HEADING),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.toggle_value(&mut self.document_panel_open, "Document");
                        ui.hyperlink_to("Standalone preview", preview_url);
                        ui.hyperlink_to("Open live preview", editor_url);
                    });
                });
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let active = self.active_tab;
                    for tab in Tab::ALL {
                        let selected = tab == active;
                        let mut text = egui::RichText::new(tab.label()).strong();
                        if !selected {
                            text = text.color(COLOR_TEXT_MUTED);
                        }
                        let button = egui::Button::new(text).selected(selected);
                        let button = if selected {
                            button.fill(COLOR_ACCENT)
                        } else {
                            button
                        };
                        if ui.add(button).clicked() {
                            clicked = Some(tab);
                        }
                    }
                });
                ui.add_space(6.0);
            });

        if let Some(tab) = clicked {
            self.select_tab(tab);
        }
    }
}
