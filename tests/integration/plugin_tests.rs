use approx::assert_relative_eq;
use bevy::prelude::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use vorsim::components::LessonEvent;

use crate::common::{
    assert_aircraft_state_valid, create_test_config, night_haze, TestAppBuilder,
};

#[test]
fn test_fixed_steps_move_free_flight() {
    let mut app = TestAppBuilder::new().build();
    let start = app.session().aircraft().position;

    app.run_ticks(100);

    let session = app.session();
    assert_eq!(session.ticks(), 100);
    assert_relative_eq!(session.aircraft().position.y, start.y - 35.0, epsilon = 1e-6);
    assert_aircraft_state_valid(session.aircraft());
}

#[test]
fn test_keyboard_controls() {
    let mut app = TestAppBuilder::new().build();

    app.press(KeyCode::ArrowRight);
    assert_relative_eq!(app.session().aircraft().heading, 2.0);

    app.press(KeyCode::BracketLeft);
    assert_relative_eq!(app.session().obs(), 359.0);

    app.press(KeyCode::Space);
    assert!(app.session().is_paused());

    // Ignored while paused
    app.press(KeyCode::ArrowLeft);
    assert_relative_eq!(app.session().aircraft().heading, 2.0);

    app.press(KeyCode::Space);
    assert!(!app.session().is_paused());
}

#[test]
fn test_paused_session_skips_fixed_steps() {
    let mut app = TestAppBuilder::new().with_mission("f-vor").paused().build();
    let start = *app.session().aircraft();

    app.run_ticks(50);

    assert_eq!(app.session().ticks(), 0);
    assert_eq!(*app.session().aircraft(), start);
}

#[test]
fn test_escape_calls_exit_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut app = TestAppBuilder::new().build();
    let counter = calls.clone();
    app.session_mut().set_exit_handler(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    app.press(KeyCode::Escape);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_mission_events_reach_bevy() {
    let mut app = TestAppBuilder::new().build();
    app.session_mut().select_mission("f-vor");
    app.run_frame();

    let events = app.lesson_events();
    assert!(events.contains(&LessonEvent::MissionSelected {
        mission_id: "f-vor".to_string()
    }));
}

#[test]
fn test_frame_rendered_each_update() {
    let mut app = TestAppBuilder::new()
        .with_config(create_test_config())
        .with_mission("l-crosswind")
        .with_environment(night_haze())
        .with_rendering()
        .build();
    app.run_frame();

    let frame = app.latest_frame().expect("frame resource");
    assert_eq!((frame.width, frame.height), (480, 480));
    assert!(frame.is_ready());
}
