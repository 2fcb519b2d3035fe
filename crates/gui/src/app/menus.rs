//! Application menu bar and settings window

use eframe::egui;
use shared::AreaEvent;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::snapshot::load_snapshot;
use crate::state::{AppState, PanelSettings, Units, FONT_SIZE_RANGE, MAX_PRECISION};

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.open_snapshot")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.open_title"))
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                match load_snapshot(&path) {
                    Ok(data) => {
                        if !state.panel.is_visible() {
                            state.deliver(AreaEvent::Show);
                        }
                        state.deliver(AreaEvent::updated(data));
                        tracing::info!("Loaded snapshot from {}", path.display());
                    }
                    Err(e) => tracing::error!("{e}"),
                }
            }
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            std::process::exit(0);
        }
    });
}

/// Show/hide the panel the way the measurement tool would
pub fn tool_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.tool"), |ui| {
        if state.panel.is_visible() {
            if ui.button(t("menu.hide_panel")).clicked() {
                state.deliver(AreaEvent::Hide);
                ui.close_menu();
            }
        } else if ui.button(t("menu.show_panel")).clicked() {
            state.deliver(AreaEvent::Show);
            ui.close_menu();
        }
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("settings.title")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
        ui.menu_button(t("menu.language"), |ui| {
            for (l, label) in [(Lang::Ru, "Русский"), (Lang::En, "English")] {
                if ui.radio(lang() == l, label).clicked() {
                    set_lang(l);
                    state.settings.ui.language = l;
                    state.settings.save();
                    ui.close_menu();
                }
            }
        });
    });
}

/// Settings window. Returns true when settings changed this frame.
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) -> bool {
    let mut open = state.show_settings_window;
    let mut changed = false;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            changed |= show_unit_settings(ui, &mut state.settings);
            changed |= show_planarity_settings(ui, &mut state.settings);
            changed |= show_ui_settings(ui, &mut state.settings);

            ui.add_space(8.0);
            if ui.button(t("settings.reset")).clicked() {
                let language = state.settings.ui.language;
                state.settings = PanelSettings::default();
                state.settings.ui.language = language;
                changed = true;
            }
        });
    state.show_settings_window = open;
    changed
}

fn show_unit_settings(ui: &mut egui::Ui, settings: &mut PanelSettings) -> bool {
    let before = (settings.units, settings.precision);
    ui.horizontal(|ui| {
        ui.label(t("settings.units"));
        egui::ComboBox::from_id_salt("units_combo")
            .selected_text(settings.units.display_name())
            .show_ui(ui, |ui| {
                for &units in Units::all() {
                    ui.selectable_value(&mut settings.units, units, units.display_name());
                }
            });
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.precision"));
        ui.add(egui::DragValue::new(&mut settings.precision).range(0..=MAX_PRECISION));
    });
    ui.add_space(6.0);
    before != (settings.units, settings.precision)
}

fn show_planarity_settings(ui: &mut egui::Ui, settings: &mut PanelSettings) -> bool {
    ui.heading(t("settings.planarity"));
    let mut changed = false;
    let bad = settings.planarity.bad;
    ui.horizontal(|ui| {
        ui.label(t("settings.warn"));
        changed |= ui
            .add(
                egui::DragValue::new(&mut settings.planarity.warn)
                    .speed(0.001)
                    .range(0.0..=bad)
                    .suffix(" m"),
            )
            .changed();
    });
    let warn = settings.planarity.warn;
    ui.horizontal(|ui| {
        ui.label(t("settings.bad"));
        changed |= ui
            .add(
                egui::DragValue::new(&mut settings.planarity.bad)
                    .speed(0.001)
                    .range(warn..=10.0)
                    .suffix(" m"),
            )
            .changed();
    });
    ui.add_space(6.0);
    changed
}

fn show_ui_settings(ui: &mut egui::Ui, settings: &mut PanelSettings) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        changed |= ui
            .add(egui::Slider::new(&mut settings.ui.font_size, FONT_SIZE_RANGE).step_by(1.0))
            .changed();
    });
    changed
}
