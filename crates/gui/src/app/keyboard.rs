//! Keyboard shortcut handling

use eframe::egui;

use crate::state::{AppState, PanelButton};

/// Handle keyboard shortcuts for the area panel
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    if !state.panel.is_visible() {
        return;
    }
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let mut pressed = Vec::new();
    ctx.input(|i| {
        // Escape: leave split mode, otherwise exit the tool
        if i.key_pressed(egui::Key::Escape) {
            if state.panel.is_split_mode() {
                pressed.push(PanelButton::CancelSplit);
            } else {
                pressed.push(PanelButton::Exit);
            }
        }
        // Enter: close polygon
        if i.key_pressed(egui::Key::Enter) && state.panel.is_enabled(PanelButton::ClosePolygon) {
            pressed.push(PanelButton::ClosePolygon);
        }
        // S: toggle split mode
        if i.key_pressed(egui::Key::S)
            && !i.modifiers.command
            && (state.panel.is_split_mode() || state.panel.is_enabled(PanelButton::ToggleSplit))
        {
            pressed.push(PanelButton::ToggleSplit);
        }
        // Ctrl+Z: undo last ridge
        if i.modifiers.command
            && i.key_pressed(egui::Key::Z)
            && state.panel.is_enabled(PanelButton::UndoSplit)
        {
            pressed.push(PanelButton::UndoSplit);
        }
    });

    for button in pressed {
        state.press(button);
    }
}
