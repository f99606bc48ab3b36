use bevy::prelude::*;

use crate::components::{
    LessonAlerts, LessonArchetype, LessonContext, LessonEffects, LessonEvent, LessonMachine,
    LessonPhase,
};

const COURSE_CHANGE_DME: f64 = 6.0;
const NEW_COURSE: f64 = 160.0;
const INTERCEPT_HEADING: f64 = 215.0;
const CAPTURE_CDI: f64 = 0.8;
const COMPLETE_DME: f64 = 15.0;
const COMPLETE_CDI: f64 = 0.2;
const ESTABLISHED_BANNER_SECONDS: f64 = 3.0;

/// Track outbound, then get re-cleared onto a new radial and intercept it.
#[derive(Debug, Default)]
pub struct OutboundTrackingLesson {
    course_changed: bool,
}

impl LessonMachine for OutboundTrackingLesson {
    fn archetype(&self) -> LessonArchetype {
        LessonArchetype::OutboundTracking
    }

    fn on_tick(&mut self, ctx: &LessonContext, alerts: &mut LessonAlerts) -> LessonEffects {
        let readout = ctx.readout;
        match ctx.phase {
            LessonPhase::Outbound if readout.dme >= COURSE_CHANGE_DME && !self.course_changed => {
                self.course_changed = true;
                alerts.course_change = true;
                info!(
                    "Course change at {:.1} nm: intercept {:03.0} radial",
                    readout.dme, NEW_COURSE
                );

                let mut effects = LessonEffects::transition(LessonPhase::Intercept)
                    .interrupt()
                    .with_event(LessonEvent::CourseChange {
                        obs: NEW_COURSE,
                        heading_bug: INTERCEPT_HEADING,
                    });
                effects.obs = Some(NEW_COURSE);
                effects.heading_bug = Some(INTERCEPT_HEADING);
                effects
            }
            LessonPhase::Intercept
                if (ctx.obs - NEW_COURSE).abs() < 1e-6
                    && readout.cdi_deflection.abs() < CAPTURE_CDI =>
            {
                alerts.show_established(ESTABLISHED_BANNER_SECONDS);
                LessonEffects::transition(LessonPhase::Tracking)
                    .with_event(LessonEvent::Established)
            }
            LessonPhase::Tracking
                if readout.dme >= COMPLETE_DME && readout.cdi_deflection.abs() < COMPLETE_CDI =>
            {
                LessonEffects::completed()
            }
            _ => LessonEffects::none(),
        }
    }
}
