//! Theme constants and one-time style application for the egui app.

use super::LivePaneApp;
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};

pub(super) const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
pub(super) const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);
pub(super) const COLOR_BG_TERTIARY: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0xf9, 0xfa, 0xfb);
pub(super) const COLOR_TEXT_SECONDARY: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0x4f, 0x46, 0xe5);
pub(super) const COLOR_ACCENT_HOVER: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63);
pub(super) const COLOR_HEADING: Color32 = Color32::from_rgb(0x81, 0x8c, 0xf8);
pub(super) const COLOR_CODE: Color32 = Color32::from_rgb(0x86, 0xef, 0xac);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);

fn widget(bg: Color32, stroke: Color32, fg: Color32, expansion: f32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: Stroke::new(1.0, stroke),
        corner_radius: CornerRadius::same(6),
        fg_stroke: Stroke::new(1.0, fg),
        expansion,
    }
}

impl LivePaneApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::dark();
        style.visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        style.visuals.window_fill = COLOR_BG_PRIMARY;
        style.visuals.panel_fill = COLOR_BG_PRIMARY;
        style.visuals.extreme_bg_color = COLOR_BG_PRIMARY;
        style.visuals.faint_bg_color = COLOR_BG_SECONDARY;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.hyperlink_color = COLOR_HEADING;
        style.visuals.selection.bg_fill = COLOR_ACCENT;
        style.visuals.selection.stroke = Stroke::new(1.0, COLOR_TEXT_PRIMARY);
        style.visuals.text_edit_bg_color = Some(COLOR_BG_PRIMARY);

        style.visuals.widgets.noninteractive =
            widget(COLOR_BG_SECONDARY, COLOR_BORDER, COLOR_TEXT_SECONDARY, 0.0);
        style.visuals.widgets.inactive =
            widget(COLOR_BG_TERTIARY, COLOR_BORDER, COLOR_TEXT_SECONDARY, 0.0);
        style.visuals.widgets.hovered =
            widget(COLOR_ACCENT_HOVER, COLOR_ACCENT_HOVER, Color32::WHITE, 0.5);
        style.visuals.widgets.active = widget(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.5);
        style.visuals.widgets.open = widget(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.0);

        style.spacing.window_margin = Margin::same(12);
        style.spacing.button_padding = egui::vec2(20.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.interact_size.y = 32.0;

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(28.0, FontFamily::Proportional),
        );
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(16.0, FontFamily::Proportional));
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(15.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Monospace,
            FontId::new(14.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
        self.style_applied = true;
    }
}
