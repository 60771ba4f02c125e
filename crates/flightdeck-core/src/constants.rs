//! Simulation constants and tuning parameters.

// --- Flight state defaults ---

/// Altitude the aircraft starts at and returns to on reset (meters).
pub const DEFAULT_ALTITUDE: f64 = 100.0;

/// Default mixture setting (percent).
pub const DEFAULT_MIXTURE: f64 = 100.0;

/// Full tanks (percent).
pub const DEFAULT_FUEL: f64 = 100.0;

/// Upper bound for throttle, mixture and fuel (percent).
pub const PERCENT_MAX: f64 = 100.0;

// --- Autopilot ---

/// Throttle setting the autopilot ramps toward (percent).
pub const AUTOPILOT_THROTTLE_TARGET: f64 = 80.0;

/// Autopilot throttle ramp rate (percent per second).
pub const AUTOPILOT_THROTTLE_RATE: f64 = 10.0;

/// Altitude the autopilot ramps toward (meters).
pub const AUTOPILOT_ALTITUDE_TARGET: f64 = 5000.0;

/// Autopilot climb rate (meters per second).
pub const AUTOPILOT_CLIMB_RATE: f64 = 50.0;

/// Autopilot pitch oscillation amplitude (degrees).
pub const AUTOPILOT_PITCH_AMPLITUDE: f64 = 5.0;

/// Autopilot pitch oscillation angular frequency (radians per wall-clock second).
pub const AUTOPILOT_PITCH_FREQUENCY: f64 = 1.0;

/// Autopilot roll oscillation amplitude (degrees).
pub const AUTOPILOT_ROLL_AMPLITUDE: f64 = 10.0;

/// Autopilot roll oscillation angular frequency (radians per wall-clock second).
pub const AUTOPILOT_ROLL_FREQUENCY: f64 = 2.0;

/// Autopilot turn rate (degrees per second).
pub const AUTOPILOT_TURN_RATE: f64 = 5.0;

// --- Manual control ---

/// Rate at which held pitch/roll keys move the attitude (degrees per second).
pub const MANUAL_ATTITUDE_RATE: f64 = 30.0;

/// Speed at full throttle when the aerodynamic model is off (km/h).
pub const SIMPLE_SPEED_CONSTANT: f64 = 800.0;

// --- Units ---

/// km/h per m/s.
pub const KMH_PER_MS: f64 = 3.6;

/// Knots per km/h, as the HUD rounds it.
pub const KNOTS_PER_KMH: f64 = 0.54;

/// Feet per meter.
pub const FEET_PER_METER: f64 = 3.28084;

/// Meters of scene travel per degree of latitude/longitude.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Full circle in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

// --- Fuel ---

/// Fuel burned per second whenever the throttle is open (percent).
pub const FUEL_BURN_RATE: f64 = 0.01;

// --- Atmosphere ---

/// Sea-level temperature used by the atmosphere model (°C).
pub const BASE_TEMPERATURE_C: f64 = 15.0;

/// Sea-level pressure used by the atmosphere model (inHg).
pub const BASE_PRESSURE_INHG: f64 = 29.92;

/// Specific gas constant for dry air (J/(kg·K)).
pub const GAS_CONSTANT: f64 = 287.1;

/// Offset between Celsius and Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Temperature lapse rate (°C per 1000 m).
pub const LAPSE_RATE_PER_KM: f64 = 6.5;

/// Pressure scale height (meters).
pub const PRESSURE_SCALE_HEIGHT: f64 = 8000.0;

/// Ratio of specific heats for air.
pub const HEAT_CAPACITY_RATIO: f64 = 1.4;

/// Induced drag factor applied to sin²(angle of attack).
pub const INDUCED_DRAG_FACTOR: f64 = 0.1;

/// Standard gravity (m/s²).
pub const STANDARD_GRAVITY: f64 = 9.81;
