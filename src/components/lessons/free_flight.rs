use crate::components::{
    LessonAlerts, LessonArchetype, LessonContext, LessonEffects, LessonMachine,
};

/// Open-ended flying with no objectives. Also hosts the syllabus procedure
/// practice entries, which share the same behaviour.
#[derive(Debug)]
pub struct FreeFlightLesson {
    archetype: LessonArchetype,
}

impl FreeFlightLesson {
    pub fn new(archetype: LessonArchetype) -> Self {
        Self { archetype }
    }
}

impl LessonMachine for FreeFlightLesson {
    fn archetype(&self) -> LessonArchetype {
        self.archetype
    }

    fn on_tick(&mut self, _ctx: &LessonContext, _alerts: &mut LessonAlerts) -> LessonEffects {
        LessonEffects::none()
    }
}
