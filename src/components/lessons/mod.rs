mod alerts;
mod base;
mod free_flight;
mod homing;
mod inbound;
mod landing;
mod outbound;
mod vor_tracking;

pub use alerts::LessonAlerts;
pub use base::{
    InitialConditions, LessonArchetype, LessonContext, LessonDefinition, LessonEffects,
    LessonEvent, LessonMachine, LessonOutcome, LessonPhase,
};
pub use free_flight::FreeFlightLesson;
pub use homing::{EngineFailurePlan, HomingLesson};
pub use inbound::InboundInterceptLesson;
pub use landing::{evaluate_landing, CrosswindLandingLesson, LandingParams, LandingResult};
pub use outbound::OutboundTrackingLesson;
pub use vor_tracking::VorTrackingLesson;

use crate::utils::RngManager;

/// Instantiates the state machine for a lesson.
pub fn machine_for(definition: &LessonDefinition, rng: &RngManager) -> Box<dyn LessonMachine> {
    match definition.archetype {
        LessonArchetype::Homing => Box::new(HomingLesson::new(EngineFailurePlan::from_rng(rng))),
        LessonArchetype::InboundIntercept => Box::<InboundInterceptLesson>::default(),
        LessonArchetype::OutboundTracking => Box::<OutboundTrackingLesson>::default(),
        LessonArchetype::VorTracking => Box::new(VorTrackingLesson),
        LessonArchetype::CrosswindLanding => {
            Box::new(CrosswindLandingLesson::new(LandingParams::default()))
        }
        archetype @ (LessonArchetype::ProcedurePractice | LessonArchetype::FreeFlight) => {
            Box::new(FreeFlightLesson::new(archetype))
        }
    }
}
