use serde::{Deserialize, Serialize};

/// Instrument-level navigation values derived from the aircraft, station and OBS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationReadout {
    /// Radial from the station the aircraft is on (degrees, `[0, 360)`).
    pub radial: f64,
    /// Slant-free distance to the station (nm).
    pub dme: f64,
    /// TO flag; false reads FROM.
    pub is_to: bool,
    /// Course deviation, `-1.0..=1.0` of full scale.
    pub cdi_deflection: f64,
    /// Inside the station cone, no usable course guidance.
    pub is_off: bool,
    /// Signed course error before clamping (degrees).
    pub course_error: f64,
}

impl Default for NavigationReadout {
    fn default() -> Self {
        Self {
            radial: 0.0,
            dme: 0.0,
            is_to: false,
            cdi_deflection: 0.0,
            is_off: true,
            course_error: 0.0,
        }
    }
}
