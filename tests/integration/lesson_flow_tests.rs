use approx::assert_relative_eq;
use vorsim::components::{ControlCommand, LandingResult, LessonEvent, LessonPhase, TurnDirection};

use crate::common::{assert_aircraft_state_valid, calm_air, TestAppBuilder};

#[test]
fn test_outbound_course_change_fires_once() {
    let mut app = TestAppBuilder::new().with_mission("f-outbound").build();

    let ticks = app.run_until(5000, |s| s.alerts().course_change);
    assert!(ticks < 5000, "course change never raised");

    let session = app.session();
    assert!(session.readout().dme >= 6.0);
    assert_relative_eq!(session.obs(), 160.0);
    assert_relative_eq!(session.heading_bug(), 215.0);
    assert_eq!(session.phase(), LessonPhase::Intercept);
    assert!(!session.is_running());

    // Blocked while the prompt is open
    let position = session.aircraft().position;
    app.run_ticks(50);
    assert_eq!(app.session().aircraft().position, position);

    app.session_mut().acknowledge_course_change();
    assert!(app.session().is_running());
    app.run_ticks(500);

    assert!(!app.session().alerts().course_change);
    assert_relative_eq!(app.session().obs(), 160.0);
    let raised = app
        .session_mut()
        .drain_events()
        .iter()
        .filter(|e| matches!(e, LessonEvent::CourseChange { .. }))
        .count();
    assert_eq!(raised, 1);
}

#[test]
fn test_inbound_procedure_turn_chooser() {
    let mut app = TestAppBuilder::new().with_mission("f-inbound").build();

    let ticks = app.run_until(5000, |s| s.alerts().procedure_turn_choice);
    assert!(ticks < 5000, "procedure turn chooser never opened");
    assert!(app.session().readout().dme >= 5.0);
    assert!(!app.session().is_running());

    assert!(app
        .session_mut()
        .choose_procedure_turn(TurnDirection::Left));
    let session = app.session();
    assert_eq!(session.phase(), LessonPhase::ProcTurn);
    assert_relative_eq!(session.heading_bug(), 45.0);
    assert!(session.is_running());
}

#[test]
fn test_homing_engine_failure_degrades_but_continues() {
    let mut app = TestAppBuilder::new().with_mission("f-homing").build();

    let ticks = app.run_until(4000, |s| s.aircraft().engine_health < 100.0);
    assert!(ticks < 4000, "engine never failed");

    let session = app.session();
    let health = session.aircraft().engine_health;
    assert!((40.0..70.0).contains(&health), "health {}", health);
    assert!(session.alerts().engine_failure);
    assert!(session.is_running());
    assert!(!session.is_crashed());
    assert_aircraft_state_valid(session.aircraft());

    // Failure happens once
    app.run_ticks(500);
    assert_relative_eq!(app.session().aircraft().engine_health, health);
}

#[test]
fn test_stabilised_approach_lands() {
    let mut app = TestAppBuilder::new()
        .with_mission("l-crosswind")
        .with_environment(calm_air())
        .build();

    assert!(app.session_mut().apply_control(ControlCommand::pitch_down()));
    let ticks = app.run_until(6000, |s| s.is_completed() || s.is_crashed());
    assert!(ticks < 6000, "never touched down");

    let session = app.session();
    assert!(session.is_completed());
    assert_eq!(session.landing_result(), Some(LandingResult::Success));
    assert_relative_eq!(session.aircraft().altitude, 0.0);
    assert!(session.particles().is_empty());
}

#[test]
fn test_steep_approach_crashes() {
    let mut app = TestAppBuilder::new()
        .with_mission("l-crosswind")
        .with_environment(calm_air())
        .build();

    for _ in 0..5 {
        app.session_mut().apply_control(ControlCommand::pitch_down());
    }
    let ticks = app.run_until(6000, |s| s.is_completed() || s.is_crashed());
    assert!(ticks < 6000, "never touched down");

    let session = app.session();
    assert!(session.is_crashed());
    assert_eq!(session.landing_result(), Some(LandingResult::HardLanding));
    assert_eq!(session.particles().particles().len(), 30);

    // Nothing moves after the crash except the particles
    let frozen = *session.aircraft();
    app.run_ticks(100);
    assert_eq!(*app.session().aircraft(), frozen);
}
