use bevy::prelude::*;
use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

use crate::components::{
    AircraftState, LandingGeometry, LandingResult, LessonAlerts, NavigationReadout, StationState,
    TurnDirection,
};
use crate::utils::{
    streams, RngManager, DEFAULT_VELOCITY, ENROUTE_ALTITUDE, ENROUTE_VELOCITY,
    LANDING_START_ALTITUDE, STATION_X, STATION_Y,
};

/// Lesson families the simulator knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonArchetype {
    Homing,
    InboundIntercept,
    OutboundTracking,
    VorTracking,
    CrosswindLanding,
    ProcedurePractice,
    FreeFlight,
}

impl LessonArchetype {
    /// Maps a syllabus mission id onto a lesson archetype.
    ///
    /// Unknown ids fly as free flight.
    pub fn from_mission_id(mission_id: &str) -> Self {
        match mission_id {
            "f-homing" => Self::Homing,
            "f-inbound" => Self::InboundIntercept,
            "f-outbound" => Self::OutboundTracking,
            "f-vor" => Self::VorTracking,
            "l-crosswind" => Self::CrosswindLanding,
            id if id.starts_with("p-") || id.starts_with("c-") || id.starts_with("a-") => {
                Self::ProcedurePractice
            }
            "" => Self::FreeFlight,
            other => {
                debug!("Unknown mission id '{}', flying free flight", other);
                Self::FreeFlight
            }
        }
    }

    pub fn is_landing(&self) -> bool {
        matches!(self, Self::CrosswindLanding)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LessonPhase {
    Homing,
    Outbound,
    Intercept,
    Tracking,
    Inbound,
    ProcTurn,
    InboundTrack,
    FinalApproach,
    CourseChange,
}

impl fmt::Display for LessonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Homing => "HOMING",
            Self::Outbound => "OUTBOUND",
            Self::Intercept => "INTERCEPT",
            Self::Tracking => "TRACKING",
            Self::Inbound => "INBOUND",
            Self::ProcTurn => "PROC_TURN",
            Self::InboundTrack => "INBOUND_TRACK",
            Self::FinalApproach => "FINAL_APPROACH",
            Self::CourseChange => "COURSE_CHANGE",
        };
        f.write_str(label)
    }
}

/// Starting state for a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    pub position: DVec2,
    pub heading: f64,
    pub obs: f64,
    pub velocity: f64,
    pub altitude: f64,
    pub landing: Option<LandingGeometry>,
    pub phase: LessonPhase,
    /// Wind preset applied when the session opens on this lesson.
    pub wind_speed: Option<f64>,
}

impl InitialConditions {
    fn enroute(position: DVec2, heading: f64, obs: f64, velocity: f64, phase: LessonPhase) -> Self {
        Self {
            position,
            heading,
            obs,
            velocity,
            altitude: ENROUTE_ALTITUDE,
            landing: None,
            phase,
            wind_speed: None,
        }
    }

    pub fn aircraft(&self) -> AircraftState {
        let mut state =
            AircraftState::at(self.position, self.heading, self.velocity, self.altitude);
        if let Some(landing) = self.landing {
            state.landing = landing;
        }
        state
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDefinition {
    pub mission_id: String,
    pub archetype: LessonArchetype,
    pub initial: InitialConditions,
}

impl LessonDefinition {
    /// Builds the lesson for a mission id. The homing start is drawn from a
    /// fresh seeded stream so the same session always restarts in the same spot.
    pub fn for_mission(mission_id: &str, rng: &RngManager) -> Self {
        let archetype = LessonArchetype::from_mission_id(mission_id);
        let station = DVec2::new(STATION_X, STATION_Y);

        let initial = match archetype {
            LessonArchetype::Homing => {
                let mut rng = rng.get_rng(streams::HOMING_START);
                let angle = rng.gen::<f64>() * TAU;
                let distance = 3500.0 + rng.gen::<f64>() * 2000.0;
                let heading = (rng.gen::<f64>() * 360.0).floor();
                InitialConditions::enroute(
                    station + DVec2::new(angle.cos(), angle.sin()) * distance,
                    heading,
                    0.0,
                    DEFAULT_VELOCITY,
                    LessonPhase::Homing,
                )
            }
            LessonArchetype::InboundIntercept => InitialConditions::enroute(
                station + DVec2::new(50.0, 0.0),
                90.0,
                90.0,
                ENROUTE_VELOCITY,
                LessonPhase::Outbound,
            ),
            LessonArchetype::OutboundTracking => {
                let rad = 80.0_f64.to_radians();
                InitialConditions::enroute(
                    station + DVec2::new(rad.cos(), rad.sin()) * 50.0,
                    170.0,
                    170.0,
                    ENROUTE_VELOCITY,
                    LessonPhase::Outbound,
                )
            }
            LessonArchetype::VorTracking => InitialConditions::enroute(
                DVec2::new(0.0, -4000.0),
                355.0,
                0.0,
                ENROUTE_VELOCITY,
                LessonPhase::Inbound,
            ),
            LessonArchetype::CrosswindLanding => InitialConditions {
                position: DVec2::ZERO,
                heading: 0.0,
                obs: 0.0,
                velocity: DEFAULT_VELOCITY,
                altitude: LANDING_START_ALTITUDE,
                landing: Some(LandingGeometry::default()),
                phase: LessonPhase::FinalApproach,
                wind_speed: Some(15.0),
            },
            LessonArchetype::ProcedurePractice => InitialConditions::enroute(
                DVec2::new(0.0, -3000.0),
                0.0,
                0.0,
                ENROUTE_VELOCITY,
                LessonPhase::Inbound,
            ),
            LessonArchetype::FreeFlight => InitialConditions::enroute(
                DVec2::ZERO,
                0.0,
                0.0,
                ENROUTE_VELOCITY,
                LessonPhase::Inbound,
            ),
        };

        Self {
            mission_id: mission_id.to_string(),
            archetype,
            initial,
        }
    }
}

/// Per-tick inputs handed to the active lesson.
#[derive(Debug, Clone, Copy)]
pub struct LessonContext<'a> {
    pub aircraft: &'a AircraftState,
    pub readout: &'a NavigationReadout,
    pub station: &'a StationState,
    pub phase: LessonPhase,
    pub obs: f64,
    pub heading_bug: f64,
    pub dt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonOutcome {
    Completed,
    Crashed { cause: LandingResult },
}

/// Notifications for the host, drained from the session.
#[derive(Event, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LessonEvent {
    MissionSelected { mission_id: String },
    PhaseChanged { from: LessonPhase, to: LessonPhase },
    CourseChange { obs: f64, heading_bug: f64 },
    ProcedureTurnChoice,
    TurnInbound,
    Established,
    StationPassage,
    EngineFailure { health: f64 },
    Completed,
    Crashed { cause: LandingResult },
}

/// What the lesson wants changed after a tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LessonEffects {
    pub phase: Option<LessonPhase>,
    pub obs: Option<f64>,
    pub heading_bug: Option<f64>,
    pub pause: bool,
    /// Discard this tick's position update.
    pub hold_position: bool,
    pub outcome: Option<LessonOutcome>,
    pub engine_health: Option<f64>,
    pub events: Vec<LessonEvent>,
}

impl LessonEffects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn transition(to: LessonPhase) -> Self {
        Self {
            phase: Some(to),
            ..Default::default()
        }
    }

    pub fn completed() -> Self {
        Self {
            outcome: Some(LessonOutcome::Completed),
            ..Default::default()
        }
    }

    /// Pause and freeze the aircraft where it was before this tick.
    pub fn interrupt(mut self) -> Self {
        self.pause = true;
        self.hold_position = true;
        self
    }

    pub fn with_event(mut self, event: LessonEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One state machine per lesson archetype.
pub trait LessonMachine: Send + Sync + fmt::Debug {
    fn archetype(&self) -> LessonArchetype;

    /// Runs after kinematics and navigation for every simulated tick.
    fn on_tick(&mut self, ctx: &LessonContext, alerts: &mut LessonAlerts) -> LessonEffects;

    /// End-of-lesson check against the updated aircraft state.
    fn check_terminal(&self, _aircraft: &AircraftState) -> Option<LessonOutcome> {
        None
    }

    /// Starts a procedure turn; returns the new heading bug when the lesson has one.
    fn begin_procedure_turn(&mut self, _direction: TurnDirection, _course: f64) -> Option<f64> {
        None
    }
}
