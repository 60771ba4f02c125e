//! Derived instrument readings.

use flightdeck_core::aircraft::AircraftSpec;
use flightdeck_core::constants::{KNOTS_PER_KMH, PERCENT_MAX};
use flightdeck_core::flight::{FlightState, SystemsState};

/// Airspeed, engine RPM and vertical speed for the frame just integrated.
pub fn run(
    flight: &mut FlightState,
    spec: &AircraftSpec,
    systems: &SystemsState,
    previous_altitude: f64,
    dt: f64,
) {
    flight.airspeed = flight.speed * KNOTS_PER_KMH;
    flight.rpm = if systems.engine_running {
        flight.throttle / PERCENT_MAX * spec.engine_rpm
    } else {
        0.0
    };
    flight.vertical_speed = (flight.altitude - previous_altitude) / dt;
}

/// Whether the stall warning light should be on.
pub fn stall_warning(flight: &FlightState, spec: &AircraftSpec, systems: &SystemsState) -> bool {
    systems.stall_warning
        && spec.stall_speed > 0.0
        && flight.speed > 0.0
        && flight.airspeed < spec.stall_speed
}
