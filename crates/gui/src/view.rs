//! View model for the area measurement panel.
//!
//! Maps the last snapshot and local panel state to text rows and tones. The
//! egui layer only paints what is built here.

use shared::AreaMeasurementData;

use crate::format::{
    format_area, format_deviation, format_length, format_optional_area, format_point,
    point_label, PLACEHOLDER,
};
use crate::state::area_panel::{AreaPanelState, MeasurePhase, PanelButton};
use crate::state::settings::PanelSettings;

/// Semantic colour of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Muted,
    Accent,
    Good,
    Warn,
    Bad,
}

/// One row of the point list
#[derive(Debug, Clone, PartialEq)]
pub struct PointRow {
    pub index: usize,
    pub label: String,
    pub coords: String,
    /// Part of the current split selection
    pub selected: bool,
    /// Point is an endpoint of at least one ridge
    pub on_ridge: bool,
    pub can_pick: bool,
}

/// Label/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRow {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

impl ValueRow {
    fn new(label: impl Into<String>, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanarityView {
    pub max: String,
    pub rms: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitResultView {
    pub area1: String,
    pub area2: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub phase: MeasurePhase,
    pub split_mode: bool,
    /// i18n key of the status hint
    pub hint_key: &'static str,
    pub points: Vec<PointRow>,
    pub edges: Vec<ValueRow>,
    pub area: String,
    pub area_tone: Tone,
    pub planarity: Option<PlanarityView>,
    pub ridges: Vec<String>,
    pub surfaces: Vec<ValueRow>,
    pub surfaces_total: Option<String>,
    /// Always two slots; empty slots show the placeholder
    pub selection: [String; 2],
    pub split_result: Option<SplitResultView>,
    pub close_enabled: bool,
    pub split_enabled: bool,
    pub clear_enabled: bool,
    pub cancel_enabled: bool,
    pub ridge_edit_enabled: bool,
}

impl PanelView {
    pub fn build(state: &AreaPanelState, settings: &PanelSettings) -> Self {
        let empty = AreaMeasurementData::default();
        let data = state.data().unwrap_or(&empty);
        let phase = state.phase();

        Self {
            phase,
            split_mode: state.is_split_mode(),
            hint_key: hint_key(phase),
            points: point_rows(data, state, settings),
            edges: edge_rows(data, settings),
            area: format_optional_area(data.area, settings),
            area_tone: if data.is_closed() { Tone::Accent } else { Tone::Muted },
            planarity: data.non_planarity.map(|np| PlanarityView {
                max: format_deviation(np.max, settings),
                rms: format_deviation(np.rms, settings),
                tone: planarity_tone(np.max, settings),
            }),
            ridges: ridge_rows(data),
            surfaces: surface_rows(data, settings),
            surfaces_total: data.surfaces_total.map(|t| format_area(t, settings)),
            selection: selection_slots(data),
            split_result: data.split_result.map(|r| SplitResultView {
                area1: format_area(r.area1, settings),
                area2: format_area(r.area2, settings),
                total: format_area(r.total, settings),
            }),
            close_enabled: state.is_enabled(PanelButton::ClosePolygon),
            split_enabled: state.is_enabled(PanelButton::ToggleSplit),
            clear_enabled: state.is_enabled(PanelButton::Clear),
            cancel_enabled: state.is_enabled(PanelButton::CancelSplit),
            ridge_edit_enabled: state.is_enabled(PanelButton::UndoSplit),
        }
    }
}

pub fn hint_key(phase: MeasurePhase) -> &'static str {
    match phase {
        MeasurePhase::Hidden | MeasurePhase::Collecting => "hint.collecting",
        MeasurePhase::Closed => "hint.closed",
        MeasurePhase::Splitting => "hint.splitting",
        MeasurePhase::SplitResult => "hint.split_result",
    }
}

pub fn planarity_tone(max_deviation: f64, settings: &PanelSettings) -> Tone {
    if !max_deviation.is_finite() {
        Tone::Muted
    } else if max_deviation < settings.planarity.warn {
        Tone::Good
    } else if max_deviation < settings.planarity.bad {
        Tone::Warn
    } else {
        Tone::Bad
    }
}

fn point_rows(
    data: &AreaMeasurementData,
    state: &AreaPanelState,
    settings: &PanelSettings,
) -> Vec<PointRow> {
    let ridges = data.ridges.as_deref().unwrap_or(&[]);
    data.points
        .iter()
        .enumerate()
        .map(|(index, p)| PointRow {
            index,
            label: point_label(index),
            coords: format_point(p, settings),
            selected: data.is_selected(index),
            on_ridge: ridges.iter().any(|r| r.contains(index)),
            can_pick: state.is_enabled(PanelButton::PickPoint(index)),
        })
        .collect()
}

fn edge_rows(data: &AreaMeasurementData, settings: &PanelSettings) -> Vec<ValueRow> {
    data.edges
        .iter()
        .enumerate()
        .map(|(i, edge)| {
            let label = match data.edge_endpoints(i) {
                Some((a, b)) => format!("{}–{}", point_label(a), point_label(b)),
                None => format!("#{}", i + 1),
            };
            ValueRow::new(label, format_length(edge.length, settings), Tone::Normal)
        })
        .collect()
}

fn ridge_rows(data: &AreaMeasurementData) -> Vec<String> {
    data.ridges
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let (a, b) = r.normalized();
            format!("R{}: {}–{}", i + 1, point_label(a), point_label(b))
        })
        .collect()
}

fn surface_rows(data: &AreaMeasurementData, settings: &PanelSettings) -> Vec<ValueRow> {
    data.surfaces
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let points: Vec<String> = s.points.iter().map(|&p| point_label(p)).collect();
            let value = if points.is_empty() {
                format_area(s.area, settings)
            } else {
                format!("{} ({})", format_area(s.area, settings), points.join(", "))
            };
            ValueRow::new(format!("S{}", i + 1), value, Tone::Normal)
        })
        .collect()
}

fn selection_slots(data: &AreaMeasurementData) -> [String; 2] {
    let sel = data.selection();
    let slot = |i: usize| {
        sel.get(i)
            .map_or_else(|| PLACEHOLDER.to_string(), |&p| point_label(p))
    };
    [slot(0), slot(1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AreaEvent, Edge, NonPlanarity, Point3, Ridge, SplitResult, Surface};

    fn square() -> AreaMeasurementData {
        AreaMeasurementData {
            points: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 2.0),
                Point3::new(0.0, 0.0, 2.0),
            ],
            edges: vec![Edge { length: 2.0 }; 4],
            area: Some(4.0),
            non_planarity: Some(NonPlanarity { max: 0.002, rms: 0.001 }),
            ..Default::default()
        }
    }

    fn state_with(data: AreaMeasurementData) -> AreaPanelState {
        let mut s = AreaPanelState::default();
        s.handle(&AreaEvent::Show);
        s.handle(&AreaEvent::updated(data));
        s
    }

    #[test]
    fn test_empty_panel() {
        let mut s = AreaPanelState::default();
        s.handle(&AreaEvent::Show);
        let v = PanelView::build(&s, &PanelSettings::default());
        assert!(v.points.is_empty());
        assert!(v.edges.is_empty());
        assert_eq!(v.area, PLACEHOLDER);
        assert_eq!(v.area_tone, Tone::Muted);
        assert_eq!(v.selection, [PLACEHOLDER.to_string(), PLACEHOLDER.to_string()]);
        assert_eq!(v.hint_key, "hint.collecting");
        assert!(!v.clear_enabled);
    }

    #[test]
    fn test_closed_square() {
        let v = PanelView::build(&state_with(square()), &PanelSettings::default());
        assert_eq!(v.points.len(), 4);
        assert_eq!(v.points[1].label, "P2");
        assert_eq!(v.points[1].coords, "(2.00, 0.00, 0.00)");
        assert_eq!(v.edges[3].label, "P4–P1");
        assert_eq!(v.edges[0].value, "2.00 m");
        assert_eq!(v.area, "4.00 m²");
        assert_eq!(v.area_tone, Tone::Accent);
        assert_eq!(v.hint_key, "hint.closed");
        assert!(v.split_enabled);
        assert!(!v.close_enabled);
    }

    #[test]
    fn test_planarity_tone_thresholds() {
        let s = PanelSettings::default();
        assert_eq!(planarity_tone(0.001, &s), Tone::Good);
        assert_eq!(planarity_tone(0.02, &s), Tone::Warn);
        assert_eq!(planarity_tone(0.05, &s), Tone::Bad);
        assert_eq!(planarity_tone(f64::NAN, &s), Tone::Muted);
    }

    #[test]
    fn test_planarity_view() {
        let v = PanelView::build(&state_with(square()), &PanelSettings::default());
        let p = v.planarity.unwrap();
        assert_eq!(p.max, "0.002 m");
        assert_eq!(p.rms, "0.001 m");
        assert_eq!(p.tone, Tone::Good);
    }

    #[test]
    fn test_ridges_and_surfaces() {
        let mut data = square();
        data.ridges = Some(vec![Ridge(2, 0)]);
        data.surfaces = Some(vec![
            Surface { area: 2.0, points: vec![0, 1, 2] },
            Surface { area: 2.0, points: vec![0, 2, 3] },
        ]);
        data.surfaces_total = Some(4.0);
        let v = PanelView::build(&state_with(data), &PanelSettings::default());

        assert_eq!(v.ridges, vec!["R1: P1–P3".to_string()]);
        assert_eq!(v.surfaces[1].label, "S2");
        assert_eq!(v.surfaces[1].value, "2.00 m² (P1, P3, P4)");
        assert_eq!(v.surfaces_total.as_deref(), Some("4.00 m²"));
        assert!(v.points[0].on_ridge);
        assert!(!v.points[1].on_ridge);
        assert!(v.ridge_edit_enabled);
    }

    #[test]
    fn test_selection_and_pick_flags() {
        let mut data = square();
        data.split_selection = Some(vec![1]);
        let mut s = state_with(data);
        let v = PanelView::build(&s, &PanelSettings::default());
        assert_eq!(v.selection, ["P2".to_string(), PLACEHOLDER.to_string()]);
        assert!(v.points[1].selected);
        assert!(!v.points[1].can_pick);

        s.press(PanelButton::ToggleSplit);
        let v = PanelView::build(&s, &PanelSettings::default());
        assert!(v.points.iter().all(|p| p.can_pick));
        assert_eq!(v.hint_key, "hint.splitting");
    }

    #[test]
    fn test_split_result() {
        let mut data = square();
        data.split_result = Some(SplitResult { area1: 1.25, area2: 2.75, total: 4.0 });
        let v = PanelView::build(&state_with(data), &PanelSettings::default());
        let r = v.split_result.unwrap();
        assert_eq!(r.area1, "1.25 m²");
        assert_eq!(r.area2, "2.75 m²");
        assert_eq!(r.total, "4.00 m²");
        assert_eq!(v.hint_key, "hint.split_result");
    }
}
