use bevy::prelude::*;
use rand::Rng;

use crate::components::{
    LessonAlerts, LessonArchetype, LessonContext, LessonEffects, LessonEvent, LessonMachine,
    LessonPhase,
};
use crate::utils::{streams, RngManager};

const ARRIVAL_DME: f64 = 0.3;

/// Parameters for the engine failure injected during the homing lesson.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineFailurePlan {
    /// Simulated seconds of flight before the failure.
    pub after_seconds: f64,
    /// Engine health once failed, percent.
    pub health: f64,
}

impl EngineFailurePlan {
    pub fn from_rng(rng: &RngManager) -> Self {
        let mut rng = rng.get_rng(streams::ENGINE_FAILURE);
        Self {
            after_seconds: rng.gen_range(20.0..60.0),
            health: rng.gen_range(40.0..70.0),
        }
    }
}

/// Home to the station from a random start using the TO needle.
#[derive(Debug)]
pub struct HomingLesson {
    failure: EngineFailurePlan,
    flight_time: f64,
    failed: bool,
}

impl HomingLesson {
    pub fn new(failure: EngineFailurePlan) -> Self {
        Self {
            failure,
            flight_time: 0.0,
            failed: false,
        }
    }

    pub fn flight_time(&self) -> f64 {
        self.flight_time
    }
}

impl LessonMachine for HomingLesson {
    fn archetype(&self) -> LessonArchetype {
        LessonArchetype::Homing
    }

    fn on_tick(&mut self, ctx: &LessonContext, alerts: &mut LessonAlerts) -> LessonEffects {
        self.flight_time += ctx.dt;

        let mut effects = if ctx.phase == LessonPhase::Homing && ctx.readout.dme < ARRIVAL_DME {
            LessonEffects::completed()
        } else {
            LessonEffects::none()
        };

        if !self.failed && self.flight_time >= self.failure.after_seconds {
            self.failed = true;
            alerts.engine_failure = true;
            warn!(
                "Engine failure after {:.1}s, health {:.0}%",
                self.flight_time, self.failure.health
            );
            effects.engine_health = Some(self.failure.health);
            effects.events.push(LessonEvent::EngineFailure {
                health: self.failure.health,
            });
        }

        effects
    }
}
