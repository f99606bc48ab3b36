// World geometry
pub const WORLD_UNITS_PER_NM: f64 = 100.0; // 100 world units = 1 nautical mile
pub const STATION_X: f64 = 0.0;
pub const STATION_Y: f64 = -5000.0;

// Timing
pub const TICK_SECONDS: f64 = 0.016; // fixed physics step the lesson thresholds were tuned against
pub const MAX_SUBSTEPS: u32 = 5;
pub const MISSION_RESUME_DELAY_SECONDS: f64 = 0.5;

// Airspeed model
pub const KNOTS_PER_VELOCITY_UNIT: f64 = 250.0;
pub const FEET_PER_SECOND_PER_KNOT: f64 = 1.68781;
pub const MIN_VELOCITY: f64 = 0.1;
pub const MAX_VELOCITY: f64 = 1.5;
pub const ENROUTE_VELOCITY: f64 = 0.35;
pub const DEFAULT_VELOCITY: f64 = 0.5;

// Attitude limits (degrees)
pub const PITCH_LIMIT: f64 = 15.0;
pub const ROLL_LIMIT_ENROUTE: f64 = 30.0;
pub const ROLL_LIMIT_LANDING: f64 = 45.0;
pub const ATTITUDE_RECOVERY_SECONDS: f64 = 1.0;

// Control pulses
pub const HEADING_PULSE: f64 = 2.0;
pub const PITCH_PULSE: f64 = 1.0;
pub const OBS_PULSE: f64 = 1.0;

// Environment
pub const WIND_DRIFT_PER_KNOT: f64 = 0.01; // world units per tick per knot
pub const MAX_WIND_SPEED: f64 = 50.0;
pub const MIN_VISIBILITY: f64 = 0.1;
pub const MAX_VISIBILITY: f64 = 10.0;

// Navigation
pub const CDI_FULL_SCALE_DEG: f64 = 10.0;
pub const STATION_CONE_DME: f64 = 0.25;

// Flight path trail
pub const TRAIL_MIN_SPACING: f64 = 5.0;
pub const TRAIL_CAPACITY: usize = 20_000;

// Landing scenario
pub const RUNWAY_HEADING: f64 = 360.0;
pub const RUNWAY_HALF_WIDTH: f64 = 100.0; // ft
pub const RUNWAY_LENGTH: f64 = 15_000.0; // ft
pub const LANDING_START_DISTANCE: f64 = 8000.0; // ft to threshold
pub const LANDING_START_ALTITUDE: f64 = 500.0; // ft
pub const ENROUTE_ALTITUDE: f64 = 3500.0; // ft
pub const FEET_PER_NM: f64 = 6076.0;
