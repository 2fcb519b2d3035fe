//! Headless harness for driving the area panel without a window.
//!
//! Plays the role of the measurement tool: delivers inbound events, presses
//! panel buttons and collects what the panel emits.

use shared::{AreaEvent, AreaMeasurementData, BusMessage};

use crate::bus::Origin;
use crate::state::{AppState, MeasurePhase, PanelButton, PanelSettings};
use crate::view::PanelView;

/// Headless test harness. Owns panel state, bus and settings.
pub struct PanelHarness {
    pub state: AppState,
    emitted: Vec<AreaEvent>,
}

impl PanelHarness {
    /// Create a harness with default settings (nothing read from disk).
    pub fn new() -> Self {
        Self::with_settings(PanelSettings::default())
    }

    pub fn with_settings(settings: PanelSettings) -> Self {
        Self {
            state: AppState::with_settings(settings),
            emitted: Vec::new(),
        }
    }

    // ── Tool side ─────────────────────────────────────────────

    /// Publish an event as the tool would and let the panel react.
    pub fn deliver(&mut self, event: AreaEvent) {
        self.state.deliver(event);
        self.pump();
    }

    /// Publish a raw named event with a JSON payload string (empty for none).
    pub fn deliver_json(&mut self, name: &str, payload_json: &str) -> Result<(), String> {
        let payload = if payload_json.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(payload_json).map_err(|e| format!("JSON parse error: {e}"))?
        };
        self.deliver_value(name, payload)
    }

    /// Publish a raw named event.
    pub fn deliver_value(&mut self, name: &str, payload: serde_json::Value) -> Result<(), String> {
        self.state
            .bus
            .publish_message(Origin::Tool, &BusMessage::with_payload(name, payload))
            .map_err(|e| e.to_string())?;
        self.pump();
        Ok(())
    }

    pub fn show(&mut self) {
        self.deliver(AreaEvent::Show);
    }

    pub fn hide(&mut self) {
        self.deliver(AreaEvent::Hide);
    }

    pub fn update(&mut self, data: AreaMeasurementData) {
        self.deliver(AreaEvent::updated(data));
    }

    // ── User side ─────────────────────────────────────────────

    pub fn press(&mut self, button: PanelButton) {
        self.state.press(button);
        self.pump();
    }

    pub fn hover(&mut self, inside: bool) {
        self.state.hover(inside);
        self.pump();
    }

    // ── Inspection ────────────────────────────────────────────

    /// Events the panel sent to the tool since the last call.
    pub fn take_emitted(&mut self) -> Vec<AreaEvent> {
        std::mem::take(&mut self.emitted)
    }

    /// Names of the events emitted since the last take, without taking them.
    pub fn emitted_names(&self) -> Vec<&'static str> {
        self.emitted.iter().map(AreaEvent::name).collect()
    }

    pub fn view(&self) -> PanelView {
        PanelView::build(&self.state.panel, &self.state.settings)
    }

    pub fn phase(&self) -> MeasurePhase {
        self.state.panel.phase()
    }

    pub fn is_visible(&self) -> bool {
        self.state.panel.is_visible()
    }

    pub fn is_split_mode(&self) -> bool {
        self.state.panel.is_split_mode()
    }

    fn pump(&mut self) {
        let outbound = self.state.pump();
        self.emitted.extend(outbound);
    }
}

impl Default for PanelHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_hidden() {
        let h = PanelHarness::new();
        assert!(!h.is_visible());
        assert_eq!(h.phase(), MeasurePhase::Hidden);
    }

    #[test]
    fn test_show_then_clear() {
        let mut h = PanelHarness::new();
        h.show();
        h.press(PanelButton::Clear);
        assert_eq!(h.take_emitted(), vec![AreaEvent::Clear]);
        assert!(h.take_emitted().is_empty());
    }

    #[test]
    fn test_inbound_events_are_not_emitted() {
        let mut h = PanelHarness::new();
        h.show();
        h.update(AreaMeasurementData::default());
        assert!(h.emitted_names().is_empty());
    }

    #[test]
    fn test_deliver_json() {
        let mut h = PanelHarness::new();
        h.deliver_json("area.measure.show", "").unwrap();
        h.deliver_json("area.measure.updated", r#"{"points": [{"x": 1, "y": 2, "z": 3}]}"#)
            .unwrap();
        assert_eq!(h.view().points.len(), 1);
    }

    #[test]
    fn test_deliver_json_errors() {
        let mut h = PanelHarness::new();
        let err = h.deliver_json("area.measure.updated", "{oops").unwrap_err();
        assert!(err.starts_with("JSON parse error"));
        let err = h.deliver_json("area.measure.bogus", "").unwrap_err();
        assert!(err.contains("Unknown event"));
    }
}
