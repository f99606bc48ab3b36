mod frame;
mod input;
mod kinematics;
mod navigation;
mod simulation;

pub use frame::render_frame_system;
pub use input::{apply_control_events_system, control_for_key, keyboard_control_system};
pub use kinematics::{
    advance_enroute, advance_landing, apply_control, crosswind_component, heading_vector,
    wind_drift,
};
pub use navigation::compute_readout;
pub use simulation::{
    forward_lesson_events_system, kinematics_system, lesson_system, navigation_system,
    session_running, ui_timer_system, SimulationSet,
};
