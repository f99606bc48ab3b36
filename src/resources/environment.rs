use serde::{Deserialize, Serialize};

use crate::utils::{normalize_degrees, MAX_VISIBILITY, MAX_WIND_SPEED, MIN_VISIBILITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeOfDay {
    #[default]
    Day,
    Dusk,
    Night,
}

/// Weather and lighting shared by the kinematics and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Wind speed (kt)
    pub wind_speed: f64,
    /// Direction the wind blows from (degrees)
    pub wind_direction: f64,
    /// Visibility (nm)
    pub visibility: f64,
    pub time_of_day: TimeOfDay,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            wind_speed: 0.0,
            wind_direction: 270.0,
            visibility: MAX_VISIBILITY,
            time_of_day: TimeOfDay::Day,
        }
    }
}

impl EnvironmentConfig {
    /// Applies `patch`, clamping every value into its legal range.
    pub fn apply(&mut self, patch: &EnvironmentPatch) {
        if let Some(speed) = patch.wind_speed {
            self.wind_speed = speed;
        }
        if let Some(direction) = patch.wind_direction {
            self.wind_direction = direction;
        }
        if let Some(visibility) = patch.visibility {
            self.visibility = visibility;
        }
        if let Some(time_of_day) = patch.time_of_day {
            self.time_of_day = time_of_day;
        }
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.wind_speed = sanitize(self.wind_speed, 0.0).clamp(0.0, MAX_WIND_SPEED);
        self.wind_direction = normalize_degrees(sanitize(self.wind_direction, 0.0));
        self.visibility =
            sanitize(self.visibility, MAX_VISIBILITY).clamp(MIN_VISIBILITY, MAX_VISIBILITY);
    }

    /// Opacity of the fog layer.
    pub fn fog_alpha(&self) -> f64 {
        (1.0 - self.visibility / MAX_VISIBILITY).clamp(0.0, 1.0)
    }

    pub fn is_day(&self) -> bool {
        self.time_of_day == TimeOfDay::Day
    }
}

fn sanitize(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Partial update coming from the settings overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentPatch {
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub visibility: Option<f64>,
    pub time_of_day: Option<TimeOfDay>,
}
