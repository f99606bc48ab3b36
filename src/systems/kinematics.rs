use glam::DVec2;
use rand::Rng;

use crate::components::{AircraftState, ControlCommand};
use crate::resources::EnvironmentConfig;
use crate::utils::{
    bearing_vector, normalize_degrees, ATTITUDE_RECOVERY_SECONDS, FEET_PER_SECOND_PER_KNOT,
    KNOTS_PER_VELOCITY_UNIT, MAX_VELOCITY, MIN_VELOCITY, PITCH_LIMIT, ROLL_LIMIT_ENROUTE,
    ROLL_LIMIT_LANDING, RUNWAY_HEADING, WIND_DRIFT_PER_KNOT,
};

const ENROUTE_BANK_PER_DEGREE: f64 = 1.5;
const LANDING_BANK_PER_DEGREE: f64 = 2.0;
const LANDING_YAW_PER_DEGREE: f64 = 0.5;
const PITCH_PER_PULSE: f64 = 0.5;
const VELOCITY_PER_PULSE: f64 = 0.05;
const ALTITUDE_PER_PULSE: f64 = 20.0;
const VSI_PER_PITCH_DEGREE: f64 = 150.0;
const DESCENT_TIME_SCALE: f64 = 5.0;
const ROLL_JITTER: f64 = 0.5;
const PITCH_JITTER: f64 = 0.1;

/// Applies one pilot pulse to the aircraft and the OBS.
pub fn apply_control(state: &mut AircraftState, obs: &mut f64, command: ControlCommand, landing: bool) {
    match command {
        ControlCommand::Heading(amount) if landing => {
            state.roll = (state.roll + LANDING_BANK_PER_DEGREE * amount)
                .clamp(-ROLL_LIMIT_LANDING, ROLL_LIMIT_LANDING);
            state.landing.yaw += LANDING_YAW_PER_DEGREE * amount;
        }
        ControlCommand::Heading(amount) => {
            state.roll = (state.roll + ENROUTE_BANK_PER_DEGREE * amount)
                .clamp(-ROLL_LIMIT_ENROUTE, ROLL_LIMIT_ENROUTE);
            state.heading = normalize_degrees(state.heading + amount);
            state.attitude_recovery = ATTITUDE_RECOVERY_SECONDS;
        }
        ControlCommand::Pitch(amount) => {
            state.pitch = (state.pitch + PITCH_PER_PULSE * amount).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            if !landing {
                state.velocity =
                    (state.velocity + VELOCITY_PER_PULSE * amount).clamp(MIN_VELOCITY, MAX_VELOCITY);
                state.altitude = (state.altitude + ALTITUDE_PER_PULSE * amount).max(0.0);
            }
        }
        ControlCommand::Obs(amount) => {
            *obs = normalize_degrees(*obs + amount);
        }
    }
}

/// Unit vector the aircraft flies along for a heading.
#[inline]
pub fn heading_vector(heading: f64) -> DVec2 {
    bearing_vector(heading)
}

/// Per-tick displacement caused by the wind.
pub fn wind_drift(env: &EnvironmentConfig) -> DVec2 {
    bearing_vector(env.wind_direction) * env.wind_speed * WIND_DRIFT_PER_KNOT
}

/// Crosswind acting on the landing runway (kt).
pub fn crosswind_component(env: &EnvironmentConfig) -> f64 {
    let wind = (env.wind_direction - 90.0).to_radians();
    let runway = (RUNWAY_HEADING - 90.0).to_radians();
    env.wind_speed * (wind - runway).sin()
}

/// Advances the en-route aircraft by one tick.
pub fn advance_enroute<R: Rng + ?Sized>(
    state: &mut AircraftState,
    env: &EnvironmentConfig,
    dt: f64,
    rng: &mut R,
) {
    state.position += heading_vector(state.heading) * state.effective_velocity() + wind_drift(env);

    if state.attitude_recovery > 0.0 {
        let fraction = (dt / state.attitude_recovery).min(1.0);
        state.roll -= state.roll * fraction;
        state.attitude_recovery = (state.attitude_recovery - dt).max(0.0);
    }

    state.roll = (state.roll + (rng.gen::<f64>() - 0.5) * ROLL_JITTER)
        .clamp(-ROLL_LIMIT_ENROUTE, ROLL_LIMIT_ENROUTE);
    state.pitch =
        (state.pitch + (rng.gen::<f64>() - 0.5) * PITCH_JITTER).clamp(-PITCH_LIMIT, PITCH_LIMIT);
}

/// Advances the aircraft on final approach by one tick. Returns true on touchdown.
pub fn advance_landing(state: &mut AircraftState, env: &EnvironmentConfig, dt: f64) -> bool {
    let speed_fps = state.velocity * KNOTS_PER_VELOCITY_UNIT * FEET_PER_SECOND_PER_KNOT;
    state.landing.distance_to_threshold -= speed_fps * dt;

    state.vertical_speed = state.pitch * VSI_PER_PITCH_DEGREE;
    let next_altitude = state.altitude + state.vertical_speed / 60.0 * dt * DESCENT_TIME_SCALE;

    let crosswind_drift = crosswind_component(env) * 0.5 * dt;
    let yaw_drift = state.landing.yaw.to_radians() * speed_fps * dt;
    let bank_drift = -state.roll.to_radians() * speed_fps * 0.5 * dt;
    state.landing.lateral_offset += crosswind_drift + yaw_drift + bank_drift;

    if next_altitude <= 0.0 {
        state.altitude = 0.0;
        true
    } else {
        state.altitude = next_altitude;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{streams, RngManager};
    use approx::assert_relative_eq;

    #[test]
    fn test_heading_wraps_through_north() {
        let mut state = AircraftState::default();
        let mut obs = 0.0;
        apply_control(&mut state, &mut obs, ControlCommand::turn_left(), false);
        assert_relative_eq!(state.heading, 358.0);
        assert_relative_eq!(state.roll, -3.0);
        assert_relative_eq!(state.attitude_recovery, 1.0);

        for _ in 0..400 {
            apply_control(&mut state, &mut obs, ControlCommand::turn_right(), false);
            assert!((0.0..360.0).contains(&state.heading));
        }
        assert_relative_eq!(state.roll, 30.0);
    }

    #[test]
    fn test_landing_heading_pulse_banks_and_yaws() {
        let mut state = AircraftState::default();
        let mut obs = 0.0;
        apply_control(&mut state, &mut obs, ControlCommand::turn_right(), true);
        assert_relative_eq!(state.roll, 4.0);
        assert_relative_eq!(state.landing.yaw, 1.0);
        assert_relative_eq!(state.heading, 0.0);
    }

    #[test]
    fn test_pitch_pulse_limits() {
        let mut state = AircraftState::default();
        let mut obs = 0.0;
        for _ in 0..40 {
            apply_control(&mut state, &mut obs, ControlCommand::pitch_up(), false);
        }
        assert_relative_eq!(state.pitch, 15.0);
        assert_relative_eq!(state.velocity, 1.5);

        state.altitude = 10.0;
        apply_control(&mut state, &mut obs, ControlCommand::pitch_down(), false);
        assert_relative_eq!(state.altitude, 0.0);
    }

    #[test]
    fn test_obs_wraps() {
        let mut state = AircraftState::default();
        let mut obs = 0.0;
        apply_control(&mut state, &mut obs, ControlCommand::obs_decrement(), false);
        assert_relative_eq!(obs, 359.0);
    }

    #[test]
    fn test_enroute_moves_along_heading_with_wind() {
        let mut rng = RngManager::new(1).get_rng(streams::TURBULENCE);
        let env = EnvironmentConfig {
            wind_speed: 10.0,
            wind_direction: 90.0,
            ..Default::default()
        };
        let mut state = AircraftState::at(DVec2::ZERO, 0.0, 0.5, 3500.0);
        advance_enroute(&mut state, &env, 0.016, &mut rng);
        assert_relative_eq!(state.position.x, 0.1, epsilon = 1e-9);
        assert_relative_eq!(state.position.y, -0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_roll_levels_after_recovery() {
        let mut rng = RngManager::new(1).get_rng(streams::TURBULENCE);
        let env = EnvironmentConfig::default();
        let mut state = AircraftState::default();
        let mut obs = 0.0;
        for _ in 0..5 {
            apply_control(&mut state, &mut obs, ControlCommand::turn_right(), false);
        }
        for _ in 0..63 {
            advance_enroute(&mut state, &env, 0.016, &mut rng);
        }
        assert_relative_eq!(state.attitude_recovery, 0.0);
        // only residual jitter left
        assert!(state.roll.abs() < 0.5, "roll {}", state.roll);
    }

    #[test]
    fn test_crosswind_formula() {
        let env = EnvironmentConfig {
            wind_speed: 15.0,
            wind_direction: 270.0,
            ..Default::default()
        };
        assert_relative_eq!(crosswind_component(&env), -15.0, epsilon = 1e-9);
        let calm = EnvironmentConfig::default();
        assert_relative_eq!(crosswind_component(&calm), 0.0);
    }

    #[test]
    fn test_landing_touchdown_clamps_altitude() {
        let env = EnvironmentConfig::default();
        let mut state = AircraftState::default();
        state.altitude = 0.5;
        state.pitch = -5.0;
        assert!(advance_landing(&mut state, &env, 0.016));
        assert_relative_eq!(state.altitude, 0.0);
        assert_relative_eq!(state.vertical_speed, -750.0);
    }

    #[test]
    fn test_landing_closes_on_threshold() {
        let env = EnvironmentConfig::default();
        let mut state = AircraftState::default();
        state.velocity = 0.5;
        let before = state.landing.distance_to_threshold;
        assert!(!advance_landing(&mut state, &env, 0.016));
        let expected = 0.5 * 250.0 * 1.68781 * 0.016;
        assert_relative_eq!(before - state.landing.distance_to_threshold, expected, epsilon = 1e-9);
    }
}
