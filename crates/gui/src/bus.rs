//! In-process event bus shared by the panel and the measurement tool.
//!
//! Single-threaded: events are queued on publish and drained by the host once
//! per frame, in publish order. Traffic from the tool and traffic from the
//! panel sit in separate queues, so an event is never routed back to the
//! side that sent it.

use std::collections::VecDeque;

use shared::{AreaEvent, BusMessage, EventError};

/// Number of published event names kept for inspection.
pub const HISTORY_LIMIT: usize = 256;

/// Which side put an event on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The measurement tool (events for the panel)
    Tool,
    /// The panel itself (events for the tool)
    Panel,
}

impl Origin {
    pub fn arrow(&self) -> &'static str {
        match self {
            Origin::Tool => "tool → panel",
            Origin::Panel => "panel → tool",
        }
    }
}

#[derive(Default)]
pub struct EventBus {
    from_tool: VecDeque<AreaEvent>,
    from_panel: VecDeque<AreaEvent>,
    history: VecDeque<(Origin, &'static str)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event sent by `origin`.
    pub fn publish(&mut self, origin: Origin, event: AreaEvent) {
        tracing::debug!("bus <- {} ({})", event.name(), origin.arrow());
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back((origin, event.name()));
        match origin {
            Origin::Tool => self.from_tool.push_back(event),
            Origin::Panel => self.from_panel.push_back(event),
        }
    }

    pub fn publish_all(&mut self, origin: Origin, events: impl IntoIterator<Item = AreaEvent>) {
        for event in events {
            self.publish(origin, event);
        }
    }

    /// Parse a raw message and queue it.
    pub fn publish_message(&mut self, origin: Origin, msg: &BusMessage) -> Result<(), EventError> {
        let event = AreaEvent::from_message(msg)?;
        self.publish(origin, event);
        Ok(())
    }

    /// Take every event the tool sent.
    pub fn drain_from_tool(&mut self) -> Vec<AreaEvent> {
        self.from_tool.drain(..).collect()
    }

    /// Take every event the panel sent.
    pub fn drain_from_panel(&mut self) -> Vec<AreaEvent> {
        self.from_panel.drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        self.from_tool.len() + self.from_panel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_tool.is_empty() && self.from_panel.is_empty()
    }

    /// Recently published events with their sender, oldest first.
    pub fn history(&self) -> impl Iterator<Item = (Origin, &'static str)> + '_ {
        self.history.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let mut bus = EventBus::new();
        bus.publish(Origin::Panel, AreaEvent::Clear);
        bus.publish(Origin::Panel, AreaEvent::Redo(2));
        bus.publish(Origin::Panel, AreaEvent::Exit);
        assert_eq!(bus.pending(), 3);

        let events = bus.drain_from_panel();
        assert_eq!(events, vec![AreaEvent::Clear, AreaEvent::Redo(2), AreaEvent::Exit]);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_queues_are_kept_apart() {
        let mut bus = EventBus::new();
        bus.publish(Origin::Tool, AreaEvent::SplitCancel);
        bus.publish(Origin::Panel, AreaEvent::SplitCancel);
        bus.publish(Origin::Tool, AreaEvent::Show);

        assert_eq!(bus.drain_from_panel(), vec![AreaEvent::SplitCancel]);
        assert_eq!(bus.pending(), 2);
        assert_eq!(
            bus.drain_from_tool(),
            vec![AreaEvent::SplitCancel, AreaEvent::Show]
        );
        assert!(bus.is_empty());
    }

    #[test]
    fn test_publish_message_rejects_unknown() {
        let mut bus = EventBus::new();
        let err = bus.publish_message(Origin::Tool, &BusMessage::new("area.measure.nope"));
        assert!(err.is_err());
        assert!(bus.is_empty());
    }

    #[test]
    fn test_publish_message_parses_index() {
        let mut bus = EventBus::new();
        bus.publish_message(
            Origin::Panel,
            &BusMessage::with_payload("area.measure.split.select", serde_json::json!(1)),
        )
        .unwrap();
        assert_eq!(bus.drain_from_panel(), vec![AreaEvent::SplitSelect(1)]);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut bus = EventBus::new();
        for _ in 0..HISTORY_LIMIT + 10 {
            bus.publish(Origin::Panel, AreaEvent::SplitUndo);
        }
        bus.publish(Origin::Tool, AreaEvent::Hide);
        assert_eq!(bus.history().count(), HISTORY_LIMIT);
        assert_eq!(bus.history().last(), Some((Origin::Tool, "area.measure.hide")));
        // history survives draining
        bus.drain_from_panel();
        bus.drain_from_tool();
        assert_eq!(bus.history().count(), HISTORY_LIMIT);
    }
}
