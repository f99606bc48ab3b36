use bevy::prelude::*;
use vorsim::{
    components::LessonEvent,
    resources::{EnvironmentPatch, SimConfig},
    LatestFrame, SimulationSession, VorSimulatorPlugin,
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimConfig,
    mission_id: String,
    environment: Option<EnvironmentPatch>,
    render: bool,
    start_running: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
            mission_id: String::new(),
            environment: None,
            render: false,
            start_running: true,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_mission(mut self, mission_id: &str) -> Self {
        self.mission_id = mission_id.to_string();
        self
    }

    pub fn with_environment(mut self, patch: EnvironmentPatch) -> Self {
        self.environment = Some(patch);
        self
    }

    pub fn with_rendering(mut self) -> Self {
        self.render = true;
        self
    }

    /// Leaves the lesson paused as a freshly opened session would be.
    pub fn paused(mut self) -> Self {
        self.start_running = false;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        let plugin = VorSimulatorPlugin::new(self.config, self.mission_id);
        let plugin = if self.render {
            plugin
        } else {
            plugin.without_rendering()
        };
        app.add_plugins(MinimalPlugins).add_plugins(plugin);

        {
            let mut session = app.world_mut().resource_mut::<SimulationSession>();
            if let Some(patch) = self.environment {
                session.set_environment(patch);
            }
            if self.start_running {
                session.resume();
            }
        }

        // Run an initial update to initialize everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs `ticks` fixed simulation steps without waiting on wall-clock time.
    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Runs fixed steps until `done` holds or `limit` is reached. Returns the ticks run.
    pub fn run_until<F>(&mut self, limit: usize, mut done: F) -> usize
    where
        F: FnMut(&SimulationSession) -> bool,
    {
        for tick in 0..limit {
            if done(self.session()) {
                return tick;
            }
            self.app.world_mut().run_schedule(FixedUpdate);
        }
        limit
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        self.app.update();
        let mut keyboard = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.release(key);
        keyboard.clear();
    }

    pub fn session(&self) -> &SimulationSession {
        self.app.world().resource::<SimulationSession>()
    }

    pub fn session_mut(&mut self) -> Mut<SimulationSession> {
        self.app.world_mut().resource_mut::<SimulationSession>()
    }

    pub fn latest_frame(&self) -> Option<&LatestFrame> {
        self.app.world().get_resource::<LatestFrame>()
    }

    /// Lesson events forwarded to bevy since the app started.
    pub fn lesson_events(&mut self) -> Vec<LessonEvent> {
        let world = self.app.world_mut();
        let events = world.resource::<Events<LessonEvent>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).cloned().collect()
    }
}
