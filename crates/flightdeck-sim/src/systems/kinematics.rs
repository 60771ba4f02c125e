//! Orientation and position integration.
//!
//! Orientation is rebuilt every frame from the absolute heading, pitch and
//! roll. Position moves along the resulting forward axis, then the altitude
//! from the flight state is written straight into the vertical coordinate.

use glam::{DQuat, DVec3, EulerRot};

use flightdeck_core::components::Transform;
use flightdeck_core::constants::{KMH_PER_MS, METERS_PER_DEGREE};
use flightdeck_core::flight::FlightState;

/// Euler angles in radians: x = pitch, y = heading, z = roll.
pub fn rotation(flight: &FlightState) -> DVec3 {
    DVec3::new(
        flight.pitch.to_radians(),
        flight.heading.to_radians(),
        flight.roll.to_radians(),
    )
}

pub fn orientation(rotation: DVec3) -> DQuat {
    DQuat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

/// Unit vector the aircraft's nose points along.
pub fn forward(rotation: DVec3) -> DVec3 {
    orientation(rotation) * DVec3::NEG_Z
}

/// Write the new orientation and position into `transform`. Returns the
/// movement along the forward axis.
pub fn run(flight: &mut FlightState, transform: &mut Transform, dt: f64) -> DVec3 {
    let rotation = rotation(flight);
    transform.rotation = rotation;

    let distance = flight.speed / KMH_PER_MS * dt;
    let displacement = forward(rotation) * distance;
    transform.position += displacement;
    transform.position.y = flight.altitude;

    flight.latitude = transform.position.x / METERS_PER_DEGREE;
    flight.longitude = transform.position.z / METERS_PER_DEGREE;

    displacement
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forward_at_zero_heading_is_negative_z() {
        assert_eq!(forward(DVec3::ZERO), DVec3::NEG_Z);
    }

    #[test]
    fn test_forward_at_quarter_turn() {
        let f = forward(DVec3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0));
        assert_relative_eq!(f.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(f.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(f.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_roll_does_not_change_forward() {
        let f = forward(DVec3::new(0.0, 0.0, 0.7));
        assert_relative_eq!(f.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(f.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_altitude_is_written_not_integrated() {
        let mut flight = FlightState {
            speed: 360.0,
            pitch: 30.0,
            altitude: 750.0,
            ..FlightState::default()
        };
        let mut transform = Transform::aircraft_start();
        let displacement = run(&mut flight, &mut transform, 1.0);
        assert!(displacement.y > 0.0, "nose-up forward axis climbs");
        assert_eq!(transform.position.y, 750.0);
        assert_relative_eq!(transform.rotation.x, 30f64.to_radians());
    }

    #[test]
    fn test_coordinates_follow_position() {
        let mut flight = FlightState {
            speed: 3.6 * 1110.0,
            heading: 180.0,
            ..FlightState::default()
        };
        let mut transform = Transform::aircraft_start();
        run(&mut flight, &mut transform, 1.0);
        assert_relative_eq!(transform.position.z, 1110.0, epsilon = 1e-9);
        assert_relative_eq!(flight.longitude, 0.01, epsilon = 1e-12);
        assert_relative_eq!(flight.latitude, 0.0, epsilon = 1e-12);
    }
}
