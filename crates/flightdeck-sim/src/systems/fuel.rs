//! Fuel burn.

use flightdeck_core::constants::FUEL_BURN_RATE;
use flightdeck_core::flight::FlightState;

/// Burn fuel while the throttle is open. Returns `true` on the frame the
/// tanks run dry.
pub fn run(flight: &mut FlightState, dt: f64) -> bool {
    if flight.throttle <= 0.0 {
        return false;
    }
    let before = flight.fuel;
    flight.fuel = (flight.fuel - FUEL_BURN_RATE * dt).max(0.0);
    before > 0.0 && flight.fuel == 0.0
}
