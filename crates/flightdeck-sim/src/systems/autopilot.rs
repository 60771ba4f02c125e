//! Autopilot control law.
//!
//! While engaged it owns throttle, altitude, pitch, roll and heading; manual
//! input is ignored.

use flightdeck_core::constants::*;
use flightdeck_core::flight::{clamp_percent, FlightState};

/// Move `current` toward `target` by at most `rate * dt`, never overshooting.
pub fn ramp_toward(current: f64, target: f64, rate: f64, dt: f64) -> f64 {
    let step = rate * dt;
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

pub fn run(flight: &mut FlightState, dt: f64, wall_clock_secs: f64) {
    flight.throttle = clamp_percent(ramp_toward(
        flight.throttle,
        AUTOPILOT_THROTTLE_TARGET,
        AUTOPILOT_THROTTLE_RATE,
        dt,
    ));
    flight.altitude = ramp_toward(
        flight.altitude,
        AUTOPILOT_ALTITUDE_TARGET,
        AUTOPILOT_CLIMB_RATE,
        dt,
    );

    // Absolute angles from wall-clock time, not integrated.
    flight.pitch = (wall_clock_secs * AUTOPILOT_PITCH_FREQUENCY).sin() * AUTOPILOT_PITCH_AMPLITUDE;
    flight.roll = (wall_clock_secs * AUTOPILOT_ROLL_FREQUENCY).sin() * AUTOPILOT_ROLL_AMPLITUDE;

    flight.heading = (flight.heading + AUTOPILOT_TURN_RATE * dt).rem_euclid(FULL_TURN_DEG);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_stops_at_target() {
        assert_eq!(ramp_toward(0.0, 80.0, 10.0, 3.0), 30.0);
        assert_eq!(ramp_toward(75.0, 80.0, 10.0, 3.0), 80.0);
        assert_eq!(ramp_toward(100.0, 80.0, 10.0, 1.0), 90.0);
        assert_eq!(ramp_toward(85.0, 80.0, 10.0, 1.0), 80.0);
        assert_eq!(ramp_toward(80.0, 80.0, 10.0, 1.0), 80.0);
    }

    #[test]
    fn test_heading_wraps() {
        let mut flight = FlightState {
            heading: 358.0,
            ..FlightState::default()
        };
        run(&mut flight, 1.0, 0.0);
        assert!((flight.heading - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_attitude_follows_wall_clock() {
        let mut flight = FlightState::default();
        let t = std::f64::consts::FRAC_PI_2;
        run(&mut flight, 0.1, t);
        assert!((flight.pitch - 5.0).abs() < 1e-12);
        assert!(flight.roll.abs() < 1e-9, "sin(pi) * 10 is zero");
    }
}
