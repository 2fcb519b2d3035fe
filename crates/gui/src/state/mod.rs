pub mod area_panel;
pub mod settings;

pub use area_panel::{AreaPanelState, MeasurePhase, PanelButton};
pub use settings::{PanelSettings, PlanaritySettings, Units, FONT_SIZE_RANGE, MAX_PRECISION};

use shared::{AreaEvent, Direction};

use crate::bus::{EventBus, Origin};

/// Combined application state
pub struct AppState {
    pub panel: AreaPanelState,
    pub bus: EventBus,
    pub settings: PanelSettings,
    /// Show settings window
    pub show_settings_window: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(PanelSettings::load())
    }
}

impl AppState {
    pub fn with_settings(settings: PanelSettings) -> Self {
        Self {
            panel: AreaPanelState::default(),
            bus: EventBus::new(),
            settings,
            show_settings_window: false,
        }
    }

    /// Queue an event on behalf of the measurement tool.
    pub fn deliver(&mut self, event: AreaEvent) {
        self.bus.publish(Origin::Tool, event);
    }

    /// Forward a button press to the bus.
    pub fn press(&mut self, button: PanelButton) {
        let events = self.panel.press(button);
        self.bus.publish_all(Origin::Panel, events);
    }

    /// Report whether the pointer is over the panel.
    pub fn hover(&mut self, inside: bool) {
        if let Some(event) = self.panel.pointer_moved(inside) {
            self.bus.publish(Origin::Panel, event);
        }
    }

    /// Deliver the tool's queued events to the panel and return the panel's
    /// events meant for the tool. Neither side sees its own events again.
    pub fn pump(&mut self) -> Vec<AreaEvent> {
        for event in self.bus.drain_from_tool() {
            if event.direction() == Direction::Outbound {
                tracing::debug!("Ignoring {} sent by the tool", event.name());
                continue;
            }
            self.panel.handle(&event);
        }

        self.bus
            .drain_from_panel()
            .into_iter()
            .filter(|event| {
                let for_tool = event.direction() != Direction::Inbound;
                if !for_tool {
                    tracing::debug!("Dropping {} sent by the panel", event.name());
                }
                for_tool
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_state() -> AppState {
        let mut state = AppState::with_settings(PanelSettings::default());
        state.deliver(AreaEvent::Show);
        state.pump();
        state
    }

    #[test]
    fn test_tool_events_are_not_echoed() {
        let mut state = visible_state();
        state.deliver(AreaEvent::SplitCancel);
        state.deliver(AreaEvent::RidgeStop);
        state.deliver(AreaEvent::Redo(3));
        assert!(state.pump().is_empty());
        assert!(state.bus.is_empty());
    }

    #[test]
    fn test_panel_events_reach_tool_only() {
        let mut state = visible_state();
        state.press(PanelButton::ToggleSplit);
        state.press(PanelButton::CancelSplit);
        assert_eq!(
            state.pump(),
            vec![AreaEvent::RidgeStart, AreaEvent::SplitCancel]
        );
        assert!(!state.panel.is_split_mode());
    }

    #[test]
    fn test_tool_split_cancel_still_leaves_split_mode() {
        let mut state = visible_state();
        state.press(PanelButton::ToggleSplit);
        state.pump();
        state.deliver(AreaEvent::SplitCancel);
        assert!(state.pump().is_empty());
        assert!(!state.panel.is_split_mode());
    }
}
