//! Area measurement panel state
//!
//! Mirrors the external tool's state machine from the events it sends and the
//! last data snapshot. The only local decision is split mode, which gates
//! whether point picks are forwarded.

use shared::{AreaEvent, AreaMeasurementData};

/// Phase of the measurement as seen by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurePhase {
    Hidden,
    /// Placing points, polygon still open
    Collecting,
    /// Polygon closed, area known
    Closed,
    /// Split mode on, picks are forwarded
    Splitting,
    /// A split result is available
    SplitResult,
}

/// User intents the panel can forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelButton {
    Clear,
    ClosePolygon,
    Exit,
    ToggleSplit,
    RedoPoint(usize),
    PickPoint(usize),
    CancelSplit,
    UndoSplit,
    ClearSplits,
}

impl PanelButton {
    /// Parse a snake_case button name. Per-point buttons need an index.
    pub fn from_name(name: &str, index: Option<usize>) -> Result<Self, String> {
        let indexed = |make: fn(usize) -> PanelButton| {
            index
                .map(make)
                .ok_or_else(|| format!("Button {name} needs a point index"))
        };
        match name {
            "clear" => Ok(PanelButton::Clear),
            "close_polygon" => Ok(PanelButton::ClosePolygon),
            "exit" => Ok(PanelButton::Exit),
            "toggle_split" => Ok(PanelButton::ToggleSplit),
            "redo_point" => indexed(PanelButton::RedoPoint),
            "pick_point" => indexed(PanelButton::PickPoint),
            "cancel_split" => Ok(PanelButton::CancelSplit),
            "undo_split" => Ok(PanelButton::UndoSplit),
            "clear_splits" => Ok(PanelButton::ClearSplits),
            other => Err(format!("Unknown button: {other}")),
        }
    }
}

#[derive(Default)]
pub struct AreaPanelState {
    visible: bool,
    split_mode: bool,
    pointer_inside: bool,
    data: Option<AreaMeasurementData>,
}

impl AreaPanelState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_split_mode(&self) -> bool {
        self.split_mode
    }

    /// Last snapshot received from the tool
    pub fn data(&self) -> Option<&AreaMeasurementData> {
        self.data.as_ref()
    }

    pub fn phase(&self) -> MeasurePhase {
        if !self.visible {
            return MeasurePhase::Hidden;
        }
        if self.split_mode {
            return MeasurePhase::Splitting;
        }
        match &self.data {
            Some(d) if d.split_result.is_some() => MeasurePhase::SplitResult,
            Some(d) if d.is_closed() => MeasurePhase::Closed,
            _ => MeasurePhase::Collecting,
        }
    }

    /// Apply an event coming from the tool. Returns true if anything changed.
    pub fn handle(&mut self, event: &AreaEvent) -> bool {
        match event {
            AreaEvent::Show => {
                tracing::debug!("Area panel shown");
                self.visible = true;
                self.split_mode = false;
                self.pointer_inside = false;
                self.data = None;
                true
            }
            AreaEvent::Hide => {
                tracing::debug!("Area panel hidden");
                let changed = self.visible || self.data.is_some();
                self.visible = false;
                self.split_mode = false;
                self.pointer_inside = false;
                self.data = None;
                changed
            }
            AreaEvent::Updated(data) => {
                self.data = Some(data.as_ref().clone());
                true
            }
            AreaEvent::SplitCancel => self.leave_split_mode(),
            AreaEvent::RidgeStop => {
                if !self.visible {
                    tracing::debug!("Ignoring ridge stop while hidden");
                    return false;
                }
                self.leave_split_mode()
            }
            other => {
                tracing::debug!("Area panel ignores {}", other.name());
                false
            }
        }
    }

    /// Translate a button press into the events to publish.
    pub fn press(&mut self, button: PanelButton) -> Vec<AreaEvent> {
        if !self.visible {
            tracing::debug!("Ignoring {:?} while hidden", button);
            return Vec::new();
        }

        let event = match button {
            PanelButton::Clear => {
                self.split_mode = false;
                AreaEvent::Clear
            }
            PanelButton::ClosePolygon => AreaEvent::ClosePolygon,
            PanelButton::Exit => {
                self.split_mode = false;
                AreaEvent::Exit
            }
            PanelButton::ToggleSplit => {
                self.split_mode = !self.split_mode;
                if self.split_mode {
                    AreaEvent::RidgeStart
                } else {
                    AreaEvent::RidgeStop
                }
            }
            PanelButton::RedoPoint(i) => AreaEvent::Redo(i),
            PanelButton::PickPoint(i) => {
                if !self.split_mode {
                    tracing::debug!("Pick of point {} dropped: split mode off", i);
                    return Vec::new();
                }
                AreaEvent::SplitSelect(i)
            }
            PanelButton::CancelSplit => {
                self.split_mode = false;
                AreaEvent::SplitCancel
            }
            PanelButton::UndoSplit => AreaEvent::SplitUndo,
            PanelButton::ClearSplits => AreaEvent::SplitClearAll,
        };
        tracing::info!("Area panel: {:?} -> {}", button, event.name());
        vec![event]
    }

    /// Track the pointer over the panel. Entering it asks the tool to stop
    /// placing points for a moment.
    /// Hidden panels do not track the pointer.
    pub fn pointer_moved(&mut self, inside: bool) -> Option<AreaEvent> {
        if !self.visible {
            return None;
        }
        let entered = inside && !self.pointer_inside;
        self.pointer_inside = inside;
        entered.then_some(AreaEvent::DisableTemporary)
    }

    /// Whether a button should be drawn enabled for the current snapshot.
    pub fn is_enabled(&self, button: PanelButton) -> bool {
        let points = self.data.as_ref().map_or(0, |d| d.point_count());
        let closed = self.data.as_ref().is_some_and(|d| d.is_closed());
        let ridges = self.data.as_ref().map_or(0, |d| d.ridge_count());
        let selected = self.data.as_ref().map_or(0, |d| d.selection().len());

        match button {
            PanelButton::Clear => points > 0,
            PanelButton::ClosePolygon => points >= 3 && !closed,
            PanelButton::Exit | PanelButton::RedoPoint(_) => true,
            PanelButton::ToggleSplit => closed,
            PanelButton::PickPoint(_) => self.split_mode,
            PanelButton::CancelSplit => self.split_mode || selected > 0,
            PanelButton::UndoSplit | PanelButton::ClearSplits => ridges > 0,
        }
    }

    fn leave_split_mode(&mut self) -> bool {
        let was = self.split_mode;
        self.split_mode = false;
        was
    }
}
