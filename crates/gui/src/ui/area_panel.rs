//! Area measurement panel UI

use egui::{RichText, Ui};

use crate::app::styles::tone_color;
use crate::i18n::{lang, t};
use crate::report::summary_text;
use crate::state::{AppState, PanelButton};
use crate::view::{PanelView, PointRow, Tone};

/// Show the area panel when the measurement tool made it visible
pub fn show(ui: &mut Ui, state: &mut AppState) {
    if !state.panel.is_visible() {
        return;
    }

    let view = PanelView::build(&state.panel, &state.settings);
    let mut pressed: Vec<PanelButton> = Vec::new();

    ui.heading(t("area.title"));
    ui.weak(t(view.hint_key));
    ui.separator();

    show_tool_buttons(ui, &view, &mut pressed);
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("area_panel_scroll")
        .show(ui, |ui| {
            show_points(ui, &view, &mut pressed);
            show_metrics(ui, &view);
            show_split_section(ui, &view, &mut pressed);

            ui.add_space(6.0);
            if ui.button(t("area.copy")).clicked() {
                ui.ctx().copy_text(summary_text(&view, lang()));
                tracing::info!("Copied area measurement summary");
            }
        });

    state.hover(ui.ui_contains_pointer());
    for button in pressed {
        state.press(button);
    }
}

fn show_tool_buttons(ui: &mut Ui, view: &PanelView, pressed: &mut Vec<PanelButton>) {
    ui.horizontal_wrapped(|ui| {
        if ui
            .add_enabled(view.close_enabled, egui::Button::new(t("area.close_polygon")))
            .on_disabled_hover_text(t("tip.close_polygon"))
            .clicked()
        {
            pressed.push(PanelButton::ClosePolygon);
        }

        let split_label = if view.split_mode {
            t("area.split_stop")
        } else {
            t("area.split_start")
        };
        if ui
            .add_enabled(
                view.split_enabled || view.split_mode,
                egui::Button::new(split_label).selected(view.split_mode),
            )
            .clicked()
        {
            pressed.push(PanelButton::ToggleSplit);
        }

        if ui
            .add_enabled(view.clear_enabled, egui::Button::new(t("area.clear")))
            .clicked()
        {
            pressed.push(PanelButton::Clear);
        }

        if ui.button(t("area.exit")).clicked() {
            pressed.push(PanelButton::Exit);
        }
    });
}

fn show_points(ui: &mut Ui, view: &PanelView, pressed: &mut Vec<PanelButton>) {
    egui::CollapsingHeader::new(format!("{} ({})", t("area.points"), view.points.len()))
        .id_salt("area_points")
        .default_open(true)
        .show(ui, |ui| {
            if view.points.is_empty() {
                ui.weak(t("area.no_points"));
                return;
            }
            egui::Grid::new("area_points_grid")
                .num_columns(4)
                .spacing([8.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for row in &view.points {
                        show_point_row(ui, row, view.split_mode, pressed);
                        ui.end_row();
                    }
                });
        });
}

fn show_point_row(ui: &mut Ui, row: &PointRow, split_mode: bool, pressed: &mut Vec<PanelButton>) {
    let mut label = RichText::new(&row.label).strong();
    if row.selected {
        label = label.color(tone_color(Tone::Accent));
    } else if row.on_ridge {
        label = label.underline();
    }
    ui.label(label);
    ui.monospace(&row.coords);

    if ui
        .small_button(t("area.redo"))
        .on_hover_text(t("tip.redo"))
        .clicked()
    {
        pressed.push(PanelButton::RedoPoint(row.index));
    }

    if split_mode {
        if ui
            .add_enabled(
                row.can_pick,
                egui::Button::new(t("area.pick")).small().selected(row.selected),
            )
            .on_hover_text(t("tip.pick"))
            .clicked()
        {
            pressed.push(PanelButton::PickPoint(row.index));
        }
    } else {
        ui.label("");
    }
}

fn show_metrics(ui: &mut Ui, view: &PanelView) {
    if !view.edges.is_empty() {
        egui::CollapsingHeader::new(t("area.edges"))
            .id_salt("area_edges")
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("area_edges_grid")
                    .num_columns(2)
                    .spacing([8.0, 2.0])
                    .show(ui, |ui| {
                        for edge in &view.edges {
                            ui.label(&edge.label);
                            ui.colored_label(tone_color(edge.tone), &edge.value);
                            ui.end_row();
                        }
                    });
            });
    }

    ui.add_space(4.0);
    egui::Grid::new("area_metrics_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.strong(format!("{}:", t("area.area")));
            ui.colored_label(tone_color(view.area_tone), RichText::new(&view.area).strong());
            ui.end_row();

            if let Some(p) = &view.planarity {
                ui.label(format!("{}:", t("area.non_planarity")));
                ui.colored_label(
                    tone_color(p.tone),
                    format!("{} {} / {} {}", t("area.max"), p.max, t("area.rms"), p.rms),
                );
                ui.end_row();
            }
        });
}

fn show_split_section(ui: &mut Ui, view: &PanelView, pressed: &mut Vec<PanelButton>) {
    let has_split_data = view.split_mode
        || !view.ridges.is_empty()
        || !view.surfaces.is_empty()
        || view.split_result.is_some();
    if !has_split_data {
        return;
    }

    ui.add_space(4.0);
    ui.separator();

    if view.split_mode {
        ui.horizontal(|ui| {
            ui.label(format!("{}:", t("area.selection")));
            ui.monospace(format!("{} → {}", view.selection[0], view.selection[1]));
        });
    }

    ui.horizontal_wrapped(|ui| {
        if ui
            .add_enabled(view.cancel_enabled, egui::Button::new(t("area.split_cancel")))
            .clicked()
        {
            pressed.push(PanelButton::CancelSplit);
        }
        if ui
            .add_enabled(view.ridge_edit_enabled, egui::Button::new(t("area.split_undo")))
            .clicked()
        {
            pressed.push(PanelButton::UndoSplit);
        }
        if ui
            .add_enabled(view.ridge_edit_enabled, egui::Button::new(t("area.split_clear_all")))
            .clicked()
        {
            pressed.push(PanelButton::ClearSplits);
        }
    });

    if !view.ridges.is_empty() {
        egui::CollapsingHeader::new(format!("{} ({})", t("area.ridges"), view.ridges.len()))
            .id_salt("area_ridges")
            .default_open(true)
            .show(ui, |ui| {
                for ridge in &view.ridges {
                    ui.label(ridge);
                }
            });
    }

    if !view.surfaces.is_empty() {
        egui::CollapsingHeader::new(t("area.surfaces"))
            .id_salt("area_surfaces")
            .default_open(true)
            .show(ui, |ui| {
                for s in &view.surfaces {
                    ui.horizontal(|ui| {
                        ui.strong(&s.label);
                        ui.label(&s.value);
                    });
                }
                if let Some(total) = &view.surfaces_total {
                    ui.horizontal(|ui| {
                        ui.strong(format!("{}:", t("area.surfaces_total")));
                        ui.label(total);
                    });
                }
            });
    }

    if let Some(r) = &view.split_result {
        ui.add_space(4.0);
        ui.strong(t("area.split_result"));
        egui::Grid::new("area_split_result_grid")
            .num_columns(2)
            .spacing([8.0, 2.0])
            .show(ui, |ui| {
                ui.label(t("area.part1"));
                ui.label(&r.area1);
                ui.end_row();
                ui.label(t("area.part2"));
                ui.label(&r.area2);
                ui.end_row();
                ui.strong(t("area.sum"));
                ui.strong(&r.total);
                ui.end_row();
            });
    }
}
