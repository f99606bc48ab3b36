use bevy::prelude::*;
use glam::DVec2;
use rand_chacha::ChaCha8Rng;

use crate::components::{
    machine_for, AircraftState, ControlCommand, FlightPathTrail, LandingResult, LessonAlerts,
    LessonArchetype, LessonContext, LessonDefinition, LessonEffects, LessonEvent, LessonMachine,
    LessonOutcome, LessonPhase, NavigationReadout, StationState, TurnDirection,
};
use crate::rendering::ParticleBurst;
use crate::resources::{EnvironmentConfig, EnvironmentPatch, SimConfig};
use crate::session::FixedStepClock;
use crate::systems::{advance_enroute, advance_landing, apply_control, compute_readout};
use crate::utils::{normalize_degrees, streams, RngManager, MISSION_RESUME_DELAY_SECONDS};

pub type ExitHandler = Box<dyn FnMut() + Send + Sync>;

/// All state of one simulator session: aircraft, lesson, environment and UI flags.
#[derive(Resource)]
pub struct SimulationSession {
    config: SimConfig,
    rng: RngManager,
    turbulence: ChaCha8Rng,
    particle_rng: ChaCha8Rng,

    definition: LessonDefinition,
    machine: Box<dyn LessonMachine>,
    phase: LessonPhase,

    aircraft: AircraftState,
    previous_position: DVec2,
    station: StationState,
    readout: NavigationReadout,
    environment: EnvironmentConfig,
    obs: f64,
    heading_bug: f64,

    alerts: LessonAlerts,
    trail: FlightPathTrail,
    particles: ParticleBurst,

    paused: bool,
    settings_open: bool,
    completed: bool,
    crashed: bool,
    landing_result: Option<LandingResult>,
    resume_in: Option<f64>,

    clock: FixedStepClock,
    ticks: u64,
    events: Vec<LessonEvent>,
    exit_handler: Option<ExitHandler>,
}

impl SimulationSession {
    pub fn new(config: SimConfig, mission_id: &str) -> Self {
        let rng = RngManager::new(config.seed);
        let definition = LessonDefinition::for_mission(mission_id, &rng);
        let machine = machine_for(&definition, &rng);

        let mut environment = config.environment;
        if let Some(wind_speed) = definition.initial.wind_speed {
            environment.wind_speed = wind_speed;
        }
        environment.clamp();

        let aircraft = definition.initial.aircraft();
        let station = StationState::default();

        let session = Self {
            turbulence: rng.get_rng(streams::TURBULENCE),
            particle_rng: rng.get_rng(streams::PARTICLES),
            clock: FixedStepClock::new(config.tick_seconds, config.max_substeps),
            trail: FlightPathTrail::new(config.trail_spacing, config.trail_capacity),
            phase: definition.initial.phase,
            obs: normalize_degrees(definition.initial.obs),
            heading_bug: aircraft.heading,
            previous_position: aircraft.position,
            readout: compute_readout(aircraft.position, station.position, definition.initial.obs),
            paused: definition.archetype != LessonArchetype::FreeFlight,
            aircraft,
            station,
            environment,
            definition,
            machine,
            alerts: LessonAlerts::default(),
            particles: ParticleBurst::default(),
            settings_open: false,
            completed: false,
            crashed: false,
            landing_result: None,
            resume_in: None,
            ticks: 0,
            events: Vec::new(),
            exit_handler: None,
            config,
            rng,
        };

        info!(
            "Session opened on '{}' ({:?})",
            session.definition.mission_id, session.definition.archetype
        );
        session
    }

    pub fn with_exit_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.exit_handler = Some(Box::new(handler));
        self
    }

    pub fn set_exit_handler<F>(&mut self, handler: F)
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.exit_handler = Some(Box::new(handler));
    }

    /// Switches lesson. The session pauses and resumes by itself after a short delay.
    pub fn select_mission(&mut self, mission_id: &str) {
        let definition = LessonDefinition::for_mission(mission_id, &self.rng);
        info!(
            "Mission selected: '{}' ({:?})",
            definition.mission_id, definition.archetype
        );
        self.load_lesson(definition);
        self.paused = true;
        self.resume_in = Some(MISSION_RESUME_DELAY_SECONDS);
        self.events.push(LessonEvent::MissionSelected {
            mission_id: mission_id.to_string(),
        });
    }

    /// Restores the current lesson's initial conditions.
    pub fn reset(&mut self) {
        info!("Resetting '{}'", self.definition.mission_id);
        let definition = LessonDefinition::for_mission(&self.definition.mission_id, &self.rng);
        self.load_lesson(definition);
        self.paused = self.definition.archetype != LessonArchetype::FreeFlight;
        self.resume_in = None;
    }

    fn load_lesson(&mut self, definition: LessonDefinition) {
        self.machine = machine_for(&definition, &self.rng);
        self.turbulence = self.rng.get_rng(streams::TURBULENCE);
        self.particle_rng = self.rng.get_rng(streams::PARTICLES);

        self.aircraft = definition.initial.aircraft();
        self.previous_position = self.aircraft.position;
        self.phase = definition.initial.phase;
        self.obs = normalize_degrees(definition.initial.obs);
        self.heading_bug = self.aircraft.heading;
        self.definition = definition;

        self.alerts.clear();
        self.trail.clear();
        self.particles.clear();
        self.clock.reset();
        self.completed = false;
        self.crashed = false;
        self.landing_result = None;
        self.settings_open = false;
        self.ticks = 0;

        self.update_navigation();
    }

    /// True when fixed steps should advance the simulation.
    pub fn is_running(&self) -> bool {
        !self.paused
            && !self.settings_open
            && !self.completed
            && !self.crashed
            && !self.alerts.is_blocking()
    }

    /// Applies a pilot control pulse. Returns false when the input was ignored.
    pub fn apply_control(&mut self, command: ControlCommand) -> bool {
        if !self.is_running() {
            debug!("Ignoring {:?} while not running", command);
            return false;
        }
        apply_control(
            &mut self.aircraft,
            &mut self.obs,
            command,
            self.definition.archetype.is_landing(),
        );
        self.update_navigation();
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.resume_in = None;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.resume_in = None;
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    pub fn set_environment(&mut self, patch: EnvironmentPatch) {
        self.environment.apply(&patch);
        info!(
            "Environment: wind {:03.0}/{:.0}kt, visibility {:.1}nm, {:?}",
            self.environment.wind_direction,
            self.environment.wind_speed,
            self.environment.visibility,
            self.environment.time_of_day
        );
    }

    pub fn acknowledge_course_change(&mut self) {
        if self.alerts.course_change {
            self.alerts.course_change = false;
            self.paused = false;
        }
    }

    pub fn acknowledge_station_passage(&mut self) {
        if self.alerts.station_passage {
            self.alerts.station_passage = false;
            self.paused = false;
        }
    }

    /// Answers the procedure-turn prompt. Returns false when no prompt is open.
    pub fn choose_procedure_turn(&mut self, direction: TurnDirection) -> bool {
        if !self.alerts.procedure_turn_choice {
            return false;
        }
        let Some(bug) = self.machine.begin_procedure_turn(direction, self.obs) else {
            return false;
        };

        info!("Procedure turn {:?}, outbound heading {:03.0}", direction, bug);
        self.alerts.procedure_turn_choice = false;
        self.heading_bug = normalize_degrees(bug);
        self.set_phase(LessonPhase::ProcTurn);
        self.paused = false;
        true
    }

    pub fn request_exit(&mut self) {
        info!("Exit requested");
        if let Some(handler) = self.exit_handler.as_mut() {
            handler();
        }
    }

    /// Host-frame entry point. Advances UI timers and runs the fixed steps
    /// that are due. Returns the number of steps run.
    pub fn frame(&mut self, elapsed: f64) -> u32 {
        self.advance_ui(elapsed);

        if !self.is_running() {
            self.clock.reset();
            return 0;
        }

        let due = self.clock.accumulate(elapsed);
        let mut ran = 0;
        for _ in 0..due {
            if !self.tick() {
                break;
            }
            ran += 1;
        }
        ran
    }

    /// Banner timers, the mission resume delay and crash particles.
    pub fn advance_ui(&mut self, elapsed: f64) {
        self.alerts.advance(elapsed);

        if let Some(remaining) = self.resume_in {
            let remaining = remaining - elapsed;
            if remaining <= 0.0 {
                self.resume_in = None;
                self.paused = false;
            } else {
                self.resume_in = Some(remaining);
            }
        }

        self.particles.update();
    }

    /// One fixed simulation step. Returns false when the session is not running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.step_kinematics();
        self.update_navigation();
        self.update_lesson();
        true
    }

    pub fn step_kinematics(&mut self) {
        let dt = self.config.tick_seconds;
        self.previous_position = self.aircraft.position;

        if self.definition.archetype.is_landing() {
            if advance_landing(&mut self.aircraft, &self.environment, dt) {
                debug!(
                    "Touchdown: vs {:.0} fpm, offset {:.1} ft, roll {:.1}",
                    self.aircraft.vertical_speed,
                    self.aircraft.landing.lateral_offset,
                    self.aircraft.roll
                );
            }
        } else {
            advance_enroute(&mut self.aircraft, &self.environment, dt, &mut self.turbulence);
        }
    }

    pub fn update_navigation(&mut self) {
        self.readout = compute_readout(self.aircraft.position, self.station.position, self.obs);
    }

    pub fn update_lesson(&mut self) {
        let ctx = LessonContext {
            aircraft: &self.aircraft,
            readout: &self.readout,
            station: &self.station,
            phase: self.phase,
            obs: self.obs,
            heading_bug: self.heading_bug,
            dt: self.config.tick_seconds,
        };
        let mut effects = self.machine.on_tick(&ctx, &mut self.alerts);
        if effects.outcome.is_none() {
            effects.outcome = self.machine.check_terminal(&self.aircraft);
        }

        self.apply_effects(effects);
        self.record_trail();
        self.ticks += 1;
    }

    fn apply_effects(&mut self, effects: LessonEffects) {
        if effects.hold_position {
            self.aircraft.position = self.previous_position;
        }
        if let Some(obs) = effects.obs {
            self.obs = normalize_degrees(obs);
        }
        if let Some(bug) = effects.heading_bug {
            self.heading_bug = normalize_degrees(bug);
        }
        if effects.hold_position || effects.obs.is_some() {
            self.update_navigation();
        }
        if let Some(health) = effects.engine_health {
            self.aircraft.engine_health = health.clamp(0.0, 100.0);
        }
        if let Some(phase) = effects.phase {
            self.set_phase(phase);
        }
        if effects.pause {
            self.paused = true;
        }
        self.events.extend(effects.events);

        match effects.outcome {
            Some(LessonOutcome::Completed) => {
                self.completed = true;
                if self.definition.archetype.is_landing() {
                    self.landing_result = Some(LandingResult::Success);
                }
                info!(
                    "Lesson '{}' completed after {} ticks",
                    self.definition.mission_id, self.ticks
                );
                self.events.push(LessonEvent::Completed);
            }
            Some(LessonOutcome::Crashed { cause }) => {
                self.crashed = true;
                self.landing_result = Some(cause);
                warn!("Crashed on landing: {:?}", cause);
                self.particles = ParticleBurst::spawn(&mut self.particle_rng);
                self.events.push(LessonEvent::Crashed { cause });
            }
            None => {}
        }
    }

    fn set_phase(&mut self, to: LessonPhase) {
        if to == self.phase {
            return;
        }
        info!("Phase {} -> {}", self.phase, to);
        self.events.push(LessonEvent::PhaseChanged {
            from: self.phase,
            to,
        });
        self.phase = to;
    }

    fn record_trail(&mut self) {
        if !self.definition.archetype.is_landing() {
            self.trail.record(self.aircraft.position);
        }
    }

    /// Lesson events since the last call.
    pub fn drain_events(&mut self) -> Vec<LessonEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn definition(&self) -> &LessonDefinition {
        &self.definition
    }

    pub fn mission_id(&self) -> &str {
        &self.definition.mission_id
    }

    pub fn archetype(&self) -> LessonArchetype {
        self.definition.archetype
    }

    pub fn phase(&self) -> LessonPhase {
        self.phase
    }

    pub fn aircraft(&self) -> &AircraftState {
        &self.aircraft
    }

    pub fn station(&self) -> &StationState {
        &self.station
    }

    pub fn readout(&self) -> &NavigationReadout {
        &self.readout
    }

    pub fn environment(&self) -> &EnvironmentConfig {
        &self.environment
    }

    pub fn obs(&self) -> f64 {
        self.obs
    }

    pub fn heading_bug(&self) -> f64 {
        self.heading_bug
    }

    pub fn alerts(&self) -> &LessonAlerts {
        &self.alerts
    }

    pub fn trail(&self) -> &FlightPathTrail {
        &self.trail
    }

    pub fn particles(&self) -> &ParticleBurst {
        &self.particles
    }

    pub fn rng(&self) -> &RngManager {
        &self.rng
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    pub fn landing_result(&self) -> Option<LandingResult> {
        self.landing_result
    }

    /// Fixed steps run since the lesson was loaded.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_free_flight_starts_running() {
        let session = SimulationSession::new(SimConfig::default(), "");
        assert!(session.is_running());
        assert_eq!(session.archetype(), LessonArchetype::FreeFlight);
        assert!(session.trail().is_empty());
    }

    #[test]
    fn test_lessons_start_paused() {
        let mut session = SimulationSession::new(SimConfig::default(), "f-vor");
        assert!(!session.is_running());
        assert_eq!(session.frame(0.1), 0);
        session.resume();
        assert!(session.frame(0.1) > 0);
    }

    #[test]
    fn test_controls_ignored_while_paused() {
        let mut session = SimulationSession::new(SimConfig::default(), "f-vor");
        assert!(!session.apply_control(ControlCommand::turn_right()));
        assert_relative_eq!(session.aircraft().heading, 355.0);

        session.resume();
        assert!(session.apply_control(ControlCommand::turn_right()));
        assert_relative_eq!(session.aircraft().heading, 357.0);
    }

    #[test]
    fn test_select_mission_resumes_after_delay() {
        let mut session = SimulationSession::new(SimConfig::default(), "");
        session.select_mission("f-inbound");
        assert!(session.is_paused());
        session.advance_ui(0.3);
        assert!(session.is_paused());
        session.advance_ui(0.25);
        assert!(!session.is_paused());
    }

    #[test]
    fn test_landing_wind_preset() {
        let session = SimulationSession::new(SimConfig::default(), "l-crosswind");
        assert_relative_eq!(session.environment().wind_speed, 15.0);
        assert_eq!(session.phase(), LessonPhase::FinalApproach);
    }

    #[test]
    fn test_exit_handler_invoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut session = SimulationSession::new(SimConfig::default(), "")
            .with_exit_handler(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        session.request_exit();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_settings_block_ticks() {
        let mut session = SimulationSession::new(SimConfig::default(), "");
        session.open_settings();
        assert!(!session.tick());
        session.close_settings();
        assert!(session.tick());
    }
}
