use bevy::prelude::*;

use crate::components::LessonEvent;
use crate::session::SimulationSession;

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum SimulationSet {
    Input,      // Control pulses
    Kinematics, // Aircraft motion
    Navigation, // Instrument readouts
    Lesson,     // Lesson state machine
}

/// Run condition guarding every fixed step.
pub fn session_running(session: Res<SimulationSession>) -> bool {
    session.is_running()
}

pub fn kinematics_system(mut session: ResMut<SimulationSession>) {
    session.step_kinematics();
}

pub fn navigation_system(mut session: ResMut<SimulationSession>) {
    session.update_navigation();
}

pub fn lesson_system(mut session: ResMut<SimulationSession>) {
    session.update_lesson();
}

/// Banners, the post-selection resume delay and crash particles run on host time.
pub fn ui_timer_system(time: Res<Time>, mut session: ResMut<SimulationSession>) {
    session.advance_ui(time.delta_secs_f64());
}

pub fn forward_lesson_events_system(
    mut session: ResMut<SimulationSession>,
    mut events: EventWriter<LessonEvent>,
) {
    for event in session.drain_events() {
        debug!("Lesson event: {:?}", event);
        events.send(event);
    }
}
