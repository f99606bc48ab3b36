pub mod aircraft;
pub mod controls;
pub mod lessons;
pub mod navigation;
pub mod station;
pub mod trail;

pub use aircraft::{AircraftState, LandingGeometry};
pub use controls::{ControlCommand, TurnDirection};
pub use lessons::{
    evaluate_landing, machine_for, InitialConditions, LandingParams, LandingResult,
    LessonAlerts, LessonArchetype, LessonContext, LessonDefinition, LessonEffects, LessonEvent,
    LessonMachine, LessonOutcome, LessonPhase,
};
pub use navigation::NavigationReadout;
pub use station::StationState;
pub use trail::FlightPathTrail;
