//! Value formatting for the measurement panel.
//!
//! Snapshot values are meters and square meters; everything here converts to
//! the configured display unit.

use shared::Point3;

use crate::state::settings::PanelSettings;

/// Shown in place of a missing or non-finite value.
pub const PLACEHOLDER: &str = "—";

pub fn format_length(meters: f64, settings: &PanelSettings) -> String {
    if !meters.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let value = meters * settings.units.per_meter();
    format!("{:.*} {}", settings.precision, value, settings.units.abbrev())
}

pub fn format_area(square_meters: f64, settings: &PanelSettings) -> String {
    if !square_meters.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let factor = settings.units.per_meter();
    let value = square_meters * factor * factor;
    format!("{:.*} {}²", settings.precision, value, settings.units.abbrev())
}

pub fn format_optional_area(square_meters: Option<f64>, settings: &PanelSettings) -> String {
    square_meters.map_or_else(|| PLACEHOLDER.to_string(), |a| format_area(a, settings))
}

/// Coordinates without a unit suffix
pub fn format_point(p: &Point3, settings: &PanelSettings) -> String {
    let f = settings.units.per_meter();
    let prec = settings.precision;
    if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
        return PLACEHOLDER.to_string();
    }
    format!(
        "({:.*}, {:.*}, {:.*})",
        prec,
        p.x * f,
        prec,
        p.y * f,
        prec,
        p.z * f
    )
}

/// Planarity deviations are small; show one extra decimal and never use
/// fewer than three.
pub fn format_deviation(meters: f64, settings: &PanelSettings) -> String {
    if !meters.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let prec = (settings.precision + 1).max(3);
    let value = meters * settings.units.per_meter();
    format!("{:.*} {}", prec, value, settings.units.abbrev())
}

/// One-based point label
pub fn point_label(index: usize) -> String {
    format!("P{}", index + 1)
}
