use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::utils::{
    normalize_degrees, DEFAULT_VELOCITY, ENROUTE_ALTITUDE, KNOTS_PER_VELOCITY_UNIT,
    LANDING_START_DISTANCE,
};

/// Runway-relative geometry, only meaningful while flying the landing lesson.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingGeometry {
    /// Distance to the runway threshold (ft).
    pub distance_to_threshold: f64,
    /// Lateral offset from the centreline (ft, positive right).
    pub lateral_offset: f64,
    /// Landing yaw relative to the runway (degrees).
    pub yaw: f64,
}

impl Default for LandingGeometry {
    fn default() -> Self {
        Self {
            distance_to_threshold: LANDING_START_DISTANCE,
            lateral_offset: 0.0,
            yaw: 0.0,
        }
    }
}

/// Kinematic state of the simulated aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Planar world position (100 units = 1 nm, +x east, +y south).
    pub position: DVec2,
    /// Heading in degrees, `[0, 360)`.
    pub heading: f64,
    /// Pitch in degrees.
    pub pitch: f64,
    /// Roll in degrees.
    pub roll: f64,
    /// Altitude in feet, never negative.
    pub altitude: f64,
    /// Vertical speed in feet per minute.
    pub vertical_speed: f64,
    /// World units travelled per tick.
    pub velocity: f64,
    /// Engine health in percent.
    pub engine_health: f64,
    pub landing: LandingGeometry,
    /// Seconds left until a bank kick has levelled out.
    pub attitude_recovery: f64,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
            pitch: 0.0,
            roll: 0.0,
            altitude: ENROUTE_ALTITUDE,
            vertical_speed: 0.0,
            velocity: DEFAULT_VELOCITY,
            engine_health: 100.0,
            landing: LandingGeometry::default(),
            attitude_recovery: 0.0,
        }
    }
}

impl AircraftState {
    pub fn at(position: DVec2, heading: f64, velocity: f64, altitude: f64) -> Self {
        Self {
            position,
            heading: normalize_degrees(heading),
            velocity,
            altitude: altitude.max(0.0),
            ..Default::default()
        }
    }

    pub fn airspeed_knots(&self) -> f64 {
        self.velocity * KNOTS_PER_VELOCITY_UNIT
    }

    /// Velocity after engine degradation.
    pub fn effective_velocity(&self) -> f64 {
        self.velocity * self.engine_health / 100.0
    }
}
