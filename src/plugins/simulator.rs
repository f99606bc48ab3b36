use bevy::prelude::*;

use crate::components::{ControlCommand, LessonEvent};
use crate::plugins::LatestFrame;
use crate::rendering::FrameRenderer;
use crate::resources::SimConfig;
use crate::session::SimulationSession;
use crate::systems::{
    apply_control_events_system, forward_lesson_events_system, keyboard_control_system,
    kinematics_system, lesson_system, navigation_system, render_frame_system, session_running,
    ui_timer_system, SimulationSet,
};

/// Runs one simulator session inside a bevy app.
///
/// Physics, navigation and the lesson step in `FixedUpdate` at the configured
/// tick; keyboard input, UI timers and frame rendering run every `Update`.
pub struct VorSimulatorPlugin {
    config: SimConfig,
    mission_id: String,
    render: bool,
}

impl VorSimulatorPlugin {
    pub fn new(config: SimConfig, mission_id: impl Into<String>) -> Self {
        Self {
            config,
            mission_id: mission_id.into(),
            render: true,
        }
    }

    /// Skips frame rendering, for tests and batch runs.
    pub fn without_rendering(mut self) -> Self {
        self.render = false;
        self
    }
}

impl Plugin for VorSimulatorPlugin {
    fn build(&self, app: &mut App) {
        let session = SimulationSession::new(self.config.clone(), &self.mission_id);
        info!(
            "Starting simulator session '{}' ({:?})",
            session.mission_id(),
            session.archetype()
        );

        if self.render {
            let renderer = FrameRenderer::new(&self.config.render, session.rng());
            app.insert_resource(LatestFrame::new(
                self.config.render.width,
                self.config.render.total_height(),
            ))
            .insert_resource(renderer)
            .add_systems(PostUpdate, render_frame_system);
        }

        app.insert_resource(session)
            .insert_resource(self.config.clone())
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<ControlCommand>()
            .add_event::<LessonEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Kinematics,
                    SimulationSet::Navigation,
                    SimulationSet::Lesson,
                )
                    .chain()
                    .run_if(session_running),
            )
            .add_systems(
                FixedUpdate,
                (
                    kinematics_system.in_set(SimulationSet::Kinematics),
                    navigation_system.in_set(SimulationSet::Navigation),
                    lesson_system.in_set(SimulationSet::Lesson),
                ),
            )
            .add_systems(
                Update,
                (
                    (keyboard_control_system, apply_control_events_system)
                        .chain()
                        .in_set(SimulationSet::Input),
                    ui_timer_system,
                    forward_lesson_events_system,
                )
                    .chain(),
            );

        app.init_resource::<Time<Fixed>>()
            .insert_resource(Time::<Fixed>::from_seconds(self.config.tick_seconds));
    }
}
