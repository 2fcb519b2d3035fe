//! Panel settings

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

/// Unit system for display. Snapshot values are always meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Units {
    Millimeters,
    Centimeters,
    #[default]
    Meters,
    Inches,
    Feet,
}

impl Units {
    /// Get the abbreviation for this unit
    pub fn abbrev(&self) -> &'static str {
        match self {
            Units::Millimeters => "mm",
            Units::Centimeters => "cm",
            Units::Meters => "m",
            Units::Inches => "in",
            Units::Feet => "ft",
        }
    }

    /// Get the display name for this unit
    pub fn display_name(&self) -> &'static str {
        match self {
            Units::Millimeters => "Millimeters",
            Units::Centimeters => "Centimeters",
            Units::Meters => "Meters",
            Units::Inches => "Inches",
            Units::Feet => "Feet",
        }
    }

    /// Number of display units in one meter
    pub fn per_meter(&self) -> f64 {
        match self {
            Units::Millimeters => 1000.0,
            Units::Centimeters => 100.0,
            Units::Meters => 1.0,
            Units::Inches => 1.0 / 0.0254,
            Units::Feet => 1.0 / 0.3048,
        }
    }

    /// All available units
    pub fn all() -> &'static [Units] {
        &[
            Units::Millimeters,
            Units::Centimeters,
            Units::Meters,
            Units::Inches,
            Units::Feet,
        ]
    }
}

/// Non-planarity thresholds in meters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanaritySettings {
    /// Below this the polygon counts as flat
    pub warn: f64,
    /// At or above this the deviation is shown as bad
    pub bad: f64,
}

impl Default for PlanaritySettings {
    fn default() -> Self {
        Self {
            warn: 0.01,
            bad: 0.05,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    /// Interface language
    #[serde(default)]
    pub language: Lang,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Lang::default(),
        }
    }
}

/// Largest number of decimal places shown
pub const MAX_PRECISION: usize = 6;

/// Allowed font sizes in points
pub const FONT_SIZE_RANGE: RangeInclusive<f32> = 10.0..=24.0;

/// All panel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Display units
    pub units: Units,
    /// Number of decimal places for lengths and areas
    pub precision: usize,
    #[serde(default)]
    pub planarity: PlanaritySettings,
    pub ui: UiSettings,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            units: Units::default(),
            precision: 2,
            planarity: PlanaritySettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl PanelSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "area-panel", "area-panel") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                match Self::from_json(&json) {
                    Ok(settings) => return settings,
                    Err(e) => tracing::warn!("Ignoring invalid settings file: {e}"),
                }
            }
        }
        Self::default()
    }

    /// Parse settings JSON, pulling hand-edited values back into the ranges
    /// the settings window allows.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.precision = settings.precision.min(MAX_PRECISION);
        settings.ui.font_size = if settings.ui.font_size.is_finite() {
            settings
                .ui
                .font_size
                .clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
        } else {
            UiSettings::default().font_size
        };
        Ok(settings)
    }

    /// Save settings to file
    pub fn save(&self) {
        let Some(dirs) = directories::ProjectDirs::from("com", "area-panel", "area-panel") else {
            tracing::error!("Failed to save settings: no config directory");
            return;
        };
        if let Err(e) = self.save_to(dirs.config_dir()) {
            tracing::error!("Failed to save settings: {e}");
        }
    }

    /// Write `settings.json` into `config_dir`, creating it if needed.
    pub fn save_to(&self, config_dir: &Path) -> Result<(), String> {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| format!("Failed to create {}: {e}", config_dir.display()))?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;
        let path = config_dir.join("settings.json");
        std::fs::write(&path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }
}
