use vorsim::components::{AircraftState, NavigationReadout};

/// Assert that the aircraft state is finite and inside its legal envelope
#[track_caller]
pub fn assert_aircraft_state_valid(state: &AircraftState) {
    assert!(state.position.x.is_finite(), "Position x is not finite");
    assert!(state.position.y.is_finite(), "Position y is not finite");
    assert!(
        (0.0..360.0).contains(&state.heading),
        "Heading {} outside [0, 360)",
        state.heading
    );
    assert!(state.pitch.abs() <= 15.0, "Pitch {} beyond limit", state.pitch);
    assert!(state.roll.abs() <= 45.0, "Roll {} beyond limit", state.roll);
    assert!(state.altitude >= 0.0, "Altitude {} below ground", state.altitude);
    assert!(
        (0.1..=1.5).contains(&state.velocity),
        "Velocity {} outside [0.1, 1.5]",
        state.velocity
    );
}

/// Assert that the instrument readout obeys its ranges
#[track_caller]
pub fn assert_readout_valid(readout: &NavigationReadout) {
    assert!((0.0..360.0).contains(&readout.radial), "Radial out of range");
    assert!(readout.dme >= 0.0, "Negative DME");
    assert!(
        (-1.0..=1.0).contains(&readout.cdi_deflection),
        "CDI {} not clamped",
        readout.cdi_deflection
    );
}
