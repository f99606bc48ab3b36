use serde::{Deserialize, Serialize};

use crate::components::{
    AircraftState, LessonAlerts, LessonArchetype, LessonContext, LessonEffects, LessonMachine,
    LessonOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingParams {
    /// Maximum acceptable descent rate at touchdown (ft/min)
    pub max_descent_rate: f64,
    /// Maximum lateral distance from the centreline (ft)
    pub max_lateral_offset: f64,
    /// Maximum bank angle at touchdown (degrees)
    pub max_bank_angle: f64,
    /// Touchdown further than this before the threshold is short (ft)
    pub max_threshold_distance: f64,
}

impl Default for LandingParams {
    fn default() -> Self {
        Self {
            max_descent_rate: 500.0,
            max_lateral_offset: 100.0,
            max_bank_angle: 15.0,
            max_threshold_distance: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingResult {
    Success,
    HardLanding,
    OffRunway,
    ExcessiveBank,
    ShortOfThreshold,
}

impl LandingResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

pub fn evaluate_landing(state: &AircraftState, params: &LandingParams) -> LandingResult {
    // Check descent rate
    if state.vertical_speed.abs() > params.max_descent_rate {
        return LandingResult::HardLanding;
    }

    // Check runway position
    if state.landing.lateral_offset.abs() > params.max_lateral_offset {
        return LandingResult::OffRunway;
    }

    // Check attitude
    if state.roll.abs() > params.max_bank_angle {
        return LandingResult::ExcessiveBank;
    }

    if state.landing.distance_to_threshold > params.max_threshold_distance {
        return LandingResult::ShortOfThreshold;
    }

    LandingResult::Success
}

/// Crosswind approach flown to touchdown. Nothing happens until the wheels
/// meet the ground.
#[derive(Debug, Default)]
pub struct CrosswindLandingLesson {
    params: LandingParams,
}

impl CrosswindLandingLesson {
    pub fn new(params: LandingParams) -> Self {
        Self { params }
    }
}

impl LessonMachine for CrosswindLandingLesson {
    fn archetype(&self) -> LessonArchetype {
        LessonArchetype::CrosswindLanding
    }

    fn on_tick(&mut self, _ctx: &LessonContext, _alerts: &mut LessonAlerts) -> LessonEffects {
        LessonEffects::none()
    }

    fn check_terminal(&self, aircraft: &AircraftState) -> Option<LessonOutcome> {
        if aircraft.altitude > 0.0 {
            return None;
        }
        match evaluate_landing(aircraft, &self.params) {
            LandingResult::Success => Some(LessonOutcome::Completed),
            cause => Some(LessonOutcome::Crashed { cause }),
        }
    }
}
