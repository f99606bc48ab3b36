use bevy::prelude::*;

use crate::components::{
    LessonAlerts, LessonArchetype, LessonContext, LessonEffects, LessonEvent, LessonMachine,
    LessonPhase, TurnDirection,
};
use crate::utils::{heading_difference, normalize_degrees};

const PROCEDURE_TURN_DME: f64 = 5.0;
const PROCEDURE_TURN_ANGLE: f64 = 45.0;
const ON_HEADING_TOLERANCE: f64 = 5.0;
const OUTBOUND_LEG_UNITS: f64 = 45.0;
const COUNTDOWN_PER_TICK: f64 = 0.05;
const INBOUND_COURSE: f64 = 270.0;
const INBOUND_HEADING_TOLERANCE: f64 = 60.0;
const INBOUND_LATERAL_WINDOW: f64 = 300.0;
const COMPLETE_DME: f64 = 0.5;
const ESTABLISHED_BANNER_SECONDS: f64 = 4.0;

/// Fly outbound, reverse course with a procedure turn, and re-intercept inbound.
#[derive(Debug, Default)]
pub struct InboundInterceptLesson {
    /// Outbound leg timer, started once the aircraft is on the turn heading.
    countdown: Option<f64>,
    turn_inbound_raised: bool,
}

impl InboundInterceptLesson {
    pub fn countdown(&self) -> Option<f64> {
        self.countdown
    }

    fn run_outbound_leg(&mut self, ctx: &LessonContext, alerts: &mut LessonAlerts) -> LessonEffects {
        if self.turn_inbound_raised {
            return LessonEffects::none();
        }

        let remaining = match self.countdown {
            Some(remaining) => remaining - COUNTDOWN_PER_TICK,
            None if heading_difference(ctx.aircraft.heading, ctx.heading_bug)
                < ON_HEADING_TOLERANCE =>
            {
                debug!("Procedure turn outbound leg started");
                OUTBOUND_LEG_UNITS
            }
            None => return LessonEffects::none(),
        };

        if remaining > 0.0 {
            self.countdown = Some(remaining);
            alerts.procedure_turn_countdown = Some(remaining.ceil() as u32);
            return LessonEffects::none();
        }

        self.countdown = None;
        self.turn_inbound_raised = true;
        alerts.procedure_turn_countdown = None;
        alerts.turn_inbound = true;
        info!("Procedure turn complete, turn inbound");

        LessonEffects {
            heading_bug: Some(normalize_degrees(ctx.heading_bug + 180.0)),
            ..LessonEffects::none().with_event(LessonEvent::TurnInbound)
        }
    }
}

impl LessonMachine for InboundInterceptLesson {
    fn archetype(&self) -> LessonArchetype {
        LessonArchetype::InboundIntercept
    }

    fn on_tick(&mut self, ctx: &LessonContext, alerts: &mut LessonAlerts) -> LessonEffects {
        match ctx.phase {
            LessonPhase::Outbound
                if ctx.readout.dme >= PROCEDURE_TURN_DME && !alerts.procedure_turn_choice =>
            {
                alerts.procedure_turn_choice = true;
                info!("Procedure turn point reached at {:.1} nm", ctx.readout.dme);
                LessonEffects::none()
                    .interrupt()
                    .with_event(LessonEvent::ProcedureTurnChoice)
            }
            LessonPhase::ProcTurn => {
                let mut effects = self.run_outbound_leg(ctx, alerts);

                let lateral = (ctx.aircraft.position.y - ctx.station.position.y).abs();
                if lateral < INBOUND_LATERAL_WINDOW
                    && heading_difference(ctx.aircraft.heading, INBOUND_COURSE)
                        < INBOUND_HEADING_TOLERANCE
                {
                    self.countdown = None;
                    alerts.turn_inbound = false;
                    alerts.procedure_turn_countdown = None;
                    alerts.show_established(ESTABLISHED_BANNER_SECONDS);
                    effects.phase = Some(LessonPhase::InboundTrack);
                    effects.events.push(LessonEvent::Established);
                }
                effects
            }
            LessonPhase::InboundTrack if ctx.readout.dme < COMPLETE_DME => {
                LessonEffects::completed()
            }
            _ => LessonEffects::none(),
        }
    }

    fn begin_procedure_turn(&mut self, direction: TurnDirection, course: f64) -> Option<f64> {
        self.countdown = None;
        self.turn_inbound_raised = false;
        let offset = match direction {
            TurnDirection::Left => -PROCEDURE_TURN_ANGLE,
            TurnDirection::Right => PROCEDURE_TURN_ANGLE,
        };
        Some(normalize_degrees(course + offset))
    }
}
