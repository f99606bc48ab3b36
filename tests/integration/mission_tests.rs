use approx::assert_relative_eq;
use glam::DVec2;
use vorsim::{
    components::{LessonArchetype, LessonPhase},
    resources::EnvironmentPatch,
    SimulationSession,
};

use crate::common::{assert_aircraft_state_valid, assert_readout_valid, create_test_config, MISSION_IDS};

#[test]
fn test_initial_conditions_table() {
    let config = create_test_config();

    let vor = SimulationSession::new(config.clone(), "f-vor");
    assert_eq!(vor.aircraft().position, DVec2::new(0.0, -4000.0));
    assert_relative_eq!(vor.aircraft().heading, 355.0);
    assert_relative_eq!(vor.obs(), 0.0);
    assert_eq!(vor.phase(), LessonPhase::Inbound);
    assert_relative_eq!(vor.readout().dme, 10.0, epsilon = 1e-9);

    let inbound = SimulationSession::new(config.clone(), "f-inbound");
    assert_eq!(inbound.aircraft().position, DVec2::new(50.0, -5000.0));
    assert_relative_eq!(inbound.aircraft().heading, 90.0);
    assert_relative_eq!(inbound.obs(), 90.0);
    assert_eq!(inbound.phase(), LessonPhase::Outbound);

    let outbound = SimulationSession::new(config.clone(), "f-outbound");
    assert_relative_eq!(outbound.aircraft().heading, 170.0);
    assert_relative_eq!(outbound.obs(), 170.0);
    assert_relative_eq!(outbound.readout().radial, 170.0, epsilon = 1e-9);
    assert_relative_eq!(outbound.readout().dme, 0.5, epsilon = 1e-9);

    let landing = SimulationSession::new(config.clone(), "l-crosswind");
    assert_eq!(landing.archetype(), LessonArchetype::CrosswindLanding);
    assert_relative_eq!(landing.aircraft().altitude, 500.0);
    assert_relative_eq!(landing.aircraft().landing.distance_to_threshold, 8000.0);
    assert_relative_eq!(landing.environment().wind_speed, 15.0);
    assert_eq!(landing.phase(), LessonPhase::FinalApproach);

    let homing = SimulationSession::new(config.clone(), "f-homing");
    let dme = homing.readout().dme;
    assert!((35.0..55.0).contains(&dme), "homing start DME {}", dme);
    assert_eq!(homing.phase(), LessonPhase::Homing);

    let free = SimulationSession::new(config, "");
    assert_eq!(free.archetype(), LessonArchetype::FreeFlight);
    assert!(free.is_running());
}

#[test]
fn test_every_mission_starts_valid() {
    for id in MISSION_IDS {
        let session = SimulationSession::new(create_test_config(), id);
        assert_aircraft_state_valid(session.aircraft());
        assert_readout_valid(session.readout());
        assert!(!session.is_completed());
        assert!(!session.is_crashed());
        assert!(session.trail().is_empty());
    }
}

#[test]
fn test_unknown_mission_falls_back_to_free_flight() {
    let session = SimulationSession::new(create_test_config(), "x-does-not-exist");
    assert_eq!(session.archetype(), LessonArchetype::FreeFlight);
    assert_eq!(session.mission_id(), "x-does-not-exist");
}

#[test]
fn test_select_mission_clears_trail_and_restores_start() {
    let mut session = SimulationSession::new(create_test_config(), "");
    for _ in 0..200 {
        session.tick();
    }
    assert!(session.trail().len() > 10);

    session.select_mission("f-vor");
    assert!(session.trail().is_empty());
    assert_eq!(session.aircraft().position, DVec2::new(0.0, -4000.0));
    assert!(session.is_paused());
    assert_eq!(session.ticks(), 0);
}

#[test]
fn test_first_tick_samples_the_trail() {
    let mut session = SimulationSession::new(create_test_config(), "");
    assert!(session.trail().is_empty());

    session.tick();
    assert_eq!(session.trail().len(), 1);
    assert_eq!(session.trail().points().next(), Some(&session.aircraft().position));
}

#[test]
fn test_reset_restores_same_homing_start() {
    let mut session = SimulationSession::new(create_test_config(), "f-homing");
    let start = *session.aircraft();
    session.resume();
    for _ in 0..300 {
        session.tick();
    }
    assert_ne!(session.aircraft().position, start.position);

    session.reset();
    assert!(session.trail().is_empty());
    assert_eq!(session.aircraft().position, start.position);
    assert_relative_eq!(session.aircraft().heading, start.heading);
    assert!(session.is_paused());
}

#[test]
fn test_environment_persists_across_mission_select() {
    let mut session = SimulationSession::new(create_test_config(), "");
    assert_relative_eq!(session.environment().wind_speed, 0.0);

    session.select_mission("l-crosswind");
    assert_relative_eq!(session.environment().wind_speed, 0.0);

    let mut landing = SimulationSession::new(create_test_config(), "l-crosswind");
    landing.set_environment(EnvironmentPatch {
        wind_speed: Some(5.0),
        ..Default::default()
    });
    landing.reset();
    assert_relative_eq!(landing.environment().wind_speed, 5.0);
}

#[test]
fn test_same_seed_same_flight() {
    let fly = || {
        let mut session = SimulationSession::new(create_test_config(), "f-homing");
        session.resume();
        for _ in 0..500 {
            session.tick();
        }
        *session.aircraft()
    };
    assert_eq!(fly(), fly());
}
