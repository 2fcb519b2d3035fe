//! Integration tests for PanelHarness.
//!
//! Drives the panel through whole measurement sessions the way the tool and
//! the user would, checking both what is shown and what is sent back.

use area_panel_lib::harness::PanelHarness;
use area_panel_lib::state::{MeasurePhase, PanelButton, PanelSettings, Units};
use shared::{AreaEvent, AreaMeasurementData, Edge, NonPlanarity, Point3, Ridge, SplitResult};

fn open_square() -> AreaMeasurementData {
    AreaMeasurementData {
        points: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ],
        edges: vec![
            Edge { length: 2.0 },
            Edge { length: 2.0 },
            Edge { length: 2.0 },
        ],
        ..Default::default()
    }
}

fn closed_square() -> AreaMeasurementData {
    AreaMeasurementData {
        edges: vec![Edge { length: 2.0 }; 4],
        area: Some(4.0),
        non_planarity: Some(NonPlanarity { max: 0.0, rms: 0.0 }),
        ..open_square()
    }
}

#[test]
fn test_full_session_collect_close_split_exit() {
    let mut h = PanelHarness::new();
    h.show();
    assert_eq!(h.phase(), MeasurePhase::Collecting);

    h.update(open_square());
    assert!(h.view().close_enabled);
    assert!(!h.view().split_enabled);

    h.press(PanelButton::ClosePolygon);
    assert_eq!(h.take_emitted(), vec![AreaEvent::ClosePolygon]);

    h.update(closed_square());
    assert_eq!(h.phase(), MeasurePhase::Closed);
    assert_eq!(h.view().area, "4.00 m²");

    h.press(PanelButton::ToggleSplit);
    assert!(h.is_split_mode());
    h.press(PanelButton::PickPoint(0));
    h.press(PanelButton::PickPoint(2));
    assert_eq!(
        h.take_emitted(),
        vec![
            AreaEvent::RidgeStart,
            AreaEvent::SplitSelect(0),
            AreaEvent::SplitSelect(2),
        ]
    );

    let mut split = closed_square();
    split.ridges = Some(vec![Ridge(0, 2)]);
    split.split_result = Some(SplitResult {
        area1: 2.0,
        area2: 2.0,
        total: 4.0,
    });
    h.update(split);
    h.press(PanelButton::ToggleSplit);
    assert_eq!(h.take_emitted(), vec![AreaEvent::RidgeStop]);
    assert_eq!(h.phase(), MeasurePhase::SplitResult);
    assert_eq!(h.view().ridges, vec!["R1: P1–P3".to_string()]);

    h.press(PanelButton::Exit);
    assert_eq!(h.take_emitted(), vec![AreaEvent::Exit]);
    h.hide();
    assert!(!h.is_visible());
    assert!(h.state.panel.data().is_none());
}

#[test]
fn test_hidden_panel_forwards_nothing() {
    let mut h = PanelHarness::new();
    h.press(PanelButton::Clear);
    h.press(PanelButton::ToggleSplit);
    h.hover(true);
    assert!(h.take_emitted().is_empty());
    assert!(!h.is_split_mode());
}

#[test]
fn test_update_while_hidden_is_kept_for_next_show() {
    let mut h = PanelHarness::new();
    h.update(closed_square());
    assert_eq!(h.phase(), MeasurePhase::Hidden);
    assert!(h.state.panel.data().is_some());

    // Show starts a fresh session
    h.show();
    assert!(h.state.panel.data().is_none());
}

#[test]
fn test_pointer_enter_disables_tool_once() {
    let mut h = PanelHarness::new();
    h.show();
    h.hover(true);
    h.hover(true);
    h.hover(false);
    h.hover(true);
    assert_eq!(
        h.take_emitted(),
        vec![AreaEvent::DisableTemporary, AreaEvent::DisableTemporary]
    );
}

#[test]
fn test_tool_cancels_split_mode() {
    let mut h = PanelHarness::new();
    h.show();
    h.update(closed_square());
    h.press(PanelButton::ToggleSplit);
    h.take_emitted();

    h.deliver_json("area.measure.split.cancel", "").unwrap();
    assert!(!h.is_split_mode());
    assert_eq!(h.phase(), MeasurePhase::Closed);
    assert!(h.take_emitted().is_empty());
}

#[test]
fn test_tool_events_are_not_sent_back_to_tool() {
    let mut h = PanelHarness::new();
    h.show();
    h.update(closed_square());
    h.press(PanelButton::ToggleSplit);
    assert_eq!(h.take_emitted(), vec![AreaEvent::RidgeStart]);

    h.deliver(AreaEvent::SplitCancel);
    h.deliver(AreaEvent::RidgeStop);
    h.deliver_json("area.measure.redo", "3").unwrap();
    h.deliver(AreaEvent::ClosePolygon);

    assert!(h.take_emitted().is_empty());
    assert!(!h.is_split_mode());
    assert!(h.state.bus.is_empty());
}

#[test]
fn test_pointer_over_panel_before_show_still_disables_tool() {
    let mut h = PanelHarness::new();
    h.hover(true);
    h.show();
    h.hover(true);
    assert_eq!(h.take_emitted(), vec![AreaEvent::DisableTemporary]);
}

#[test]
fn test_tool_ridge_stop_leaves_split_mode() {
    let mut h = PanelHarness::new();
    h.show();
    h.update(closed_square());
    h.press(PanelButton::ToggleSplit);
    h.deliver(AreaEvent::RidgeStop);
    assert!(!h.is_split_mode());
    assert_eq!(h.take_emitted(), vec![AreaEvent::RidgeStart]);
}

#[test]
fn test_redo_carries_point_index() {
    let mut h = PanelHarness::new();
    h.show();
    h.update(open_square());
    h.press(PanelButton::RedoPoint(3));
    let emitted = h.take_emitted();
    assert_eq!(emitted, vec![AreaEvent::Redo(3)]);
    assert_eq!(emitted[0].to_message().payload, serde_json::json!(3));
}

#[test]
fn test_clear_resets_split_mode_and_emits() {
    let mut h = PanelHarness::new();
    h.show();
    h.update(closed_square());
    h.press(PanelButton::ToggleSplit);
    h.press(PanelButton::Clear);
    assert!(!h.is_split_mode());
    assert_eq!(h.emitted_names(), vec!["area.measure.ridge.start", "area.measure.clear"]);
}

#[test]
fn test_split_edits_enabled_only_with_ridges() {
    let mut h = PanelHarness::new();
    h.show();
    h.update(closed_square());
    assert!(!h.view().ridge_edit_enabled);

    let mut with_ridge = closed_square();
    with_ridge.ridges = Some(vec![Ridge(1, 3)]);
    h.update(with_ridge);
    assert!(h.view().ridge_edit_enabled);

    h.press(PanelButton::UndoSplit);
    h.press(PanelButton::ClearSplits);
    assert_eq!(
        h.take_emitted(),
        vec![AreaEvent::SplitUndo, AreaEvent::SplitClearAll]
    );
}

#[test]
fn test_json_snapshot_delivery() {
    let mut h = PanelHarness::new();
    h.show();
    h.deliver_json(
        "area.measure.updated",
        r#"{"points": [{"x": 0, "y": 0, "z": 0}, {"x": 1, "y": 0, "z": 0}],
            "edges": [{"length": 1.0}],
            "splitSelection": [1]}"#,
    )
    .unwrap();

    let view = h.view();
    assert_eq!(view.points.len(), 2);
    assert_eq!(view.edges.len(), 1);
    assert_eq!(view.area, "—");
    assert_eq!(view.selection, ["P2".to_string(), "—".to_string()]);
}

#[test]
fn test_malformed_payload_is_rejected() {
    let mut h = PanelHarness::new();
    h.show();
    assert!(h.deliver_json("area.measure.updated", "").is_err());
    assert!(h.deliver_json("area.measure.updated", "[1, 2").is_err());
    assert!(h.deliver_json("area.measure.nope", "").is_err());
    assert!(h.is_visible());
}

#[test]
fn test_units_follow_settings() {
    let mut settings = PanelSettings::default();
    settings.units = Units::Centimeters;
    settings.precision = 0;
    let mut h = PanelHarness::with_settings(settings);
    h.show();
    h.update(closed_square());

    let view = h.view();
    assert_eq!(view.edges[0].value, "200 cm");
    assert_eq!(view.area, "40000 cm²");
}
