use bevy::prelude::*;

use crate::components::{
    LessonAlerts, LessonArchetype, LessonContext, LessonEffects, LessonEvent, LessonMachine,
    LessonPhase,
};

const STATION_PASSAGE_DME: f64 = 0.5;
const COMPLETE_DME: f64 = 5.0;

/// Fly inbound to the station, cross it, and track outbound.
#[derive(Debug, Default)]
pub struct VorTrackingLesson;

impl LessonMachine for VorTrackingLesson {
    fn archetype(&self) -> LessonArchetype {
        LessonArchetype::VorTracking
    }

    fn on_tick(&mut self, ctx: &LessonContext, alerts: &mut LessonAlerts) -> LessonEffects {
        match ctx.phase {
            LessonPhase::Inbound if ctx.readout.dme < STATION_PASSAGE_DME => {
                alerts.station_passage = true;
                info!("Station passage at {:.2} nm", ctx.readout.dme);
                LessonEffects::transition(LessonPhase::Outbound)
                    .interrupt()
                    .with_event(LessonEvent::StationPassage)
            }
            LessonPhase::Outbound if ctx.readout.dme > COMPLETE_DME => LessonEffects::completed(),
            _ => LessonEffects::none(),
        }
    }
}
