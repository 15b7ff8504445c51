//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! gives the stock behavior.

use crate::animation::Easing;
use crate::error::ConfigError;
use crate::input::KeyMap;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Keys bound to each action, as DOM `KeyboardEvent.key` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Move focus up
    pub up: Vec<String>,
    /// Move focus down
    pub down: Vec<String>,
    /// Move focus left
    pub left: Vec<String>,
    /// Move focus right
    pub right: Vec<String>,
    /// History back
    pub back: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: vec!["ArrowUp".into()],
            down: vec!["ArrowDown".into()],
            left: vec!["ArrowLeft".into()],
            right: vec!["ArrowRight".into()],
            back: vec!["BrowserBack".into()],
        }
    }
}

/// Navigation and highlight configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlideConfig {
    /// Minimum time between accepted navigations while a key is held (ms)
    pub throttle_ms: f64,
    /// Half-width of the directional cone (degrees)
    pub cone_half_angle_deg: f64,
    /// How far past a viewport edge a non-aligned candidate may lie, as a
    /// fraction of the viewport dimension
    pub offscreen_tolerance: f64,
    /// Duration of one highlight transition (ms)
    pub transition_ms: f64,
    /// Margin around the viewport used as the off-stage rect (px)
    pub offstage_margin_px: f64,
    /// Highlight easing curve
    pub easing: Easing,
    /// Element id of the highlight overlay
    pub overlay_id: String,
    /// Console log level
    pub log_level: LevelFilter,
    /// Key bindings
    pub keys: KeyBindings,
}

impl Default for GlideConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 100.0,
            cone_half_angle_deg: 45.0,
            offscreen_tolerance: 0.2,
            transition_ms: 300.0,
            offstage_margin_px: 100.0,
            easing: Easing::CubicOut,
            overlay_id: "glide-focus-overlay".into(),
            log_level: LevelFilter::Warn,
            keys: KeyBindings::default(),
        }
    }
}

fn check(field: &'static str, value: f64, ok: bool, expected: &'static str) -> Result<(), ConfigError> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

impl GlideConfig {
    /// Parse and validate a JSON config. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = if json.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str(json)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check numeric ranges and key bindings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("throttle_ms", self.throttle_ms, self.throttle_ms >= 0.0, ">= 0")?;
        check(
            "cone_half_angle_deg",
            self.cone_half_angle_deg,
            self.cone_half_angle_deg > 0.0 && self.cone_half_angle_deg <= 90.0,
            "in (0, 90]",
        )?;
        check(
            "offscreen_tolerance",
            self.offscreen_tolerance,
            self.offscreen_tolerance >= 0.0,
            ">= 0",
        )?;
        check("transition_ms", self.transition_ms, self.transition_ms > 0.0, "> 0")?;
        check(
            "offstage_margin_px",
            self.offstage_margin_px,
            self.offstage_margin_px >= 0.0,
            ">= 0",
        )?;
        KeyMap::new(&self.keys)?;
        Ok(())
    }

    /// Cone half-width in radians.
    #[must_use]
    pub fn cone_half_angle(&self) -> f64 {
        self.cone_half_angle_deg.to_radians()
    }
}
