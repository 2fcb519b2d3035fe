//! Application style configuration

use eframe::egui;

use crate::view::Tone;

/// Configure initial application styles with given font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();

    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(3);

    // Compact rows for the point list
    style.spacing.item_spacing = egui::vec2(6.0, 3.0);
    style.spacing.button_padding = egui::vec2(6.0, 2.0);

    style.visuals.panel_fill = egui::Color32::from_rgb(30, 30, 34);
    style.visuals.window_fill = egui::Color32::from_rgb(35, 35, 40);
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(20, 90, 110);

    apply_text_styles(&mut style, font_size);

    ctx.set_style(style);
}

/// Apply font size to all text styles
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    let sizes = [
        (egui::TextStyle::Body, egui::FontId::proportional(font_size)),
        (egui::TextStyle::Button, egui::FontId::proportional(font_size)),
        (egui::TextStyle::Small, egui::FontId::proportional(font_size * 0.85)),
        (egui::TextStyle::Heading, egui::FontId::proportional(font_size * 1.25)),
        (egui::TextStyle::Monospace, egui::FontId::monospace(font_size * 0.95)),
    ];
    for (text_style, font) in sizes {
        style.text_styles.insert(text_style, font);
    }
}

/// Colour for a semantic tone of the area panel
pub fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Normal => egui::Color32::from_rgb(210, 210, 215),
        Tone::Muted => egui::Color32::from_rgb(130, 130, 140),
        Tone::Accent => egui::Color32::from_rgb(0, 220, 255),
        Tone::Good => egui::Color32::from_rgb(110, 200, 120),
        Tone::Warn => egui::Color32::from_rgb(255, 200, 100),
        Tone::Bad => egui::Color32::from_rgb(240, 90, 80),
    }
}
