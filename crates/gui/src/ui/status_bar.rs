use egui::Ui;

use crate::i18n::t;
use crate::state::{AppState, MeasurePhase};
use crate::view::hint_key;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let phase = state.panel.phase();
        if phase == MeasurePhase::Hidden {
            ui.weak(t("menu.show_panel"));
        } else {
            let points = state.panel.data().map_or(0, |d| d.point_count());
            ui.weak(format!("{}: {points}", t("area.points")));
            ui.separator();

            let color = if state.panel.is_split_mode() {
                egui::Color32::YELLOW
            } else {
                egui::Color32::from_rgb(170, 170, 180)
            };
            ui.colored_label(color, t(hint_key(phase)));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("{} · v0.1", state.settings.units.abbrev()));
        });
    });
}
