//! Main application module

mod keyboard;
mod menus;
pub mod styles;

use eframe::egui;
use shared::{AreaEvent, AreaMeasurementData};

use crate::i18n::{set_lang, t};
use crate::state::AppState;
use crate::ui::{area_panel, status_bar};

/// Desktop host for the area measurement panel
pub struct AreaPanelApp {
    state: AppState,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl AreaPanelApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        initial_snapshot: Option<AreaMeasurementData>,
    ) -> Self {
        let mut state = AppState::default();
        set_lang(state.settings.ui.language);

        if let Some(data) = initial_snapshot {
            state.deliver(AreaEvent::Show);
            state.deliver(AreaEvent::updated(data));
        }

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);
        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            last_font_size,
        }
    }

    /// Route bus traffic. Outbound events go to the measurement tool; this
    /// host has none, so they are only logged, except `exit` which closes
    /// the panel.
    fn pump_bus(&mut self) {
        for event in self.state.pump() {
            tracing::info!("-> tool: {}", event.to_message().name);
            if event == AreaEvent::Exit {
                self.state.deliver(AreaEvent::Hide);
            }
        }
        // Events published while routing (hide on exit)
        if !self.state.bus.is_empty() {
            self.state.pump();
        }
    }
}

impl eframe::App for AreaPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        keyboard::handle_keyboard(ctx, &mut self.state);
        self.pump_bus();

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::tool_menu(ui, &mut self.state);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        if menus::settings_window(ctx, &mut self.state) {
            self.state.settings.save();
        }

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Right panel: area measurement ────────────────────
        if self.state.panel.is_visible() {
            egui::SidePanel::right("area_panel")
                .default_width(320.0)
                .width_range(260.0..=520.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    area_panel::show(ui, &mut self.state);
                });
        }

        // ── Central panel: scene placeholder with bus log ────
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading(t("viewport.placeholder"));
            });
            ui.separator();
            ui.weak(t("viewport.events"));
            egui::ScrollArea::vertical()
                .id_salt("bus_history")
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for (origin, name) in self.state.bus.history() {
                        ui.monospace(format!("{}  {name}", origin.arrow()));
                    }
                });
        });

        // Presses made while painting are routed next frame; make sure
        // there is one.
        if !self.state.bus.is_empty() {
            ctx.request_repaint();
        }
    }
}
