use bevy::prelude::*;

use crate::components::{ControlCommand, TurnDirection};
use crate::session::SimulationSession;

/// Control pulse bound to a key, if any.
pub fn control_for_key(key: KeyCode) -> Option<ControlCommand> {
    match key {
        KeyCode::ArrowLeft => Some(ControlCommand::turn_left()),
        KeyCode::ArrowRight => Some(ControlCommand::turn_right()),
        KeyCode::ArrowUp => Some(ControlCommand::pitch_up()),
        KeyCode::ArrowDown => Some(ControlCommand::pitch_down()),
        KeyCode::BracketLeft => Some(ControlCommand::obs_decrement()),
        KeyCode::BracketRight => Some(ControlCommand::obs_increment()),
        _ => None,
    }
}

/// Edge-triggered keyboard handling. Flight controls become events, session
/// keys (pause, exit, prompt answers) act on the session directly.
pub fn keyboard_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<SimulationSession>,
    mut commands: EventWriter<ControlCommand>,
) {
    for key in keyboard.get_just_pressed() {
        if let Some(command) = control_for_key(*key) {
            commands.send(command);
            continue;
        }

        match key {
            KeyCode::Space => session.toggle_pause(),
            KeyCode::Escape => session.request_exit(),
            KeyCode::Enter => {
                session.acknowledge_course_change();
                session.acknowledge_station_passage();
            }
            KeyCode::KeyL => {
                session.choose_procedure_turn(TurnDirection::Left);
            }
            KeyCode::KeyR => {
                session.choose_procedure_turn(TurnDirection::Right);
            }
            _ => {}
        }
    }
}

/// Applies queued control pulses; the session drops them while not running.
pub fn apply_control_events_system(
    mut session: ResMut<SimulationSession>,
    mut commands: EventReader<ControlCommand>,
) {
    for command in commands.read() {
        session.apply_control(*command);
    }
}
