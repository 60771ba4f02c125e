//! Manual flight controls and the throttle-to-speed law.

use flightdeck_core::constants::{MANUAL_ATTITUDE_RATE, PERCENT_MAX, SIMPLE_SPEED_CONSTANT};
use flightdeck_core::flight::{FlightState, HeldControls};

use crate::config::AttitudeLimits;

/// Integrate held pitch/roll keys.
pub fn run(flight: &mut FlightState, held: &HeldControls, limits: AttitudeLimits, dt: f64) {
    if !held.any() {
        return;
    }
    flight.pitch = limits.pitch(flight.pitch + held.pitch_axis() * MANUAL_ATTITUDE_RATE * dt);
    flight.roll = limits.roll(flight.roll + held.roll_axis() * MANUAL_ATTITUDE_RATE * dt);
}

/// Speed as a straight fraction of throttle, used when the aerodynamic
/// model is off.
pub fn apply_simple_speed(flight: &mut FlightState) {
    flight.speed = flight.throttle / PERCENT_MAX * SIMPLE_SPEED_CONSTANT;
}
