//! Atmosphere and force-balance speed model.
//!
//! Pressure stays in whatever unit the base pressure is given in (inHg by
//! default), so densities are only meaningful relative to each other. Speed
//! enters the dynamic pressure in km/h, exactly as the flight state holds it.

use flightdeck_core::aircraft::AircraftSpec;
use flightdeck_core::constants::*;
use flightdeck_core::flight::{FlightState, SystemsState};

use crate::config::SimConfig;

/// Air properties at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    pub temperature_c: f64,
    pub pressure: f64,
    pub density: f64,
}

impl Atmosphere {
    pub fn at_altitude(base_temperature_c: f64, base_pressure: f64, altitude: f64) -> Self {
        let temperature_c = base_temperature_c - (altitude / 1000.0) * LAPSE_RATE_PER_KM;
        let pressure = base_pressure * (-altitude / PRESSURE_SCALE_HEIGHT).exp();
        let density = pressure / (GAS_CONSTANT * (temperature_c + KELVIN_OFFSET));
        Self {
            temperature_c,
            pressure,
            density,
        }
    }

    /// Speed of sound (m/s).
    pub fn speed_of_sound(&self) -> f64 {
        (HEAT_CAPACITY_RATIO * GAS_CONSTANT * (self.temperature_c + KELVIN_OFFSET)).sqrt()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AeroForces {
    pub dynamic_pressure: f64,
    pub lift: f64,
    pub drag: f64,
    pub thrust: f64,
}

impl AeroForces {
    pub fn compute(
        spec: &AircraftSpec,
        density: f64,
        speed: f64,
        angle_of_attack: f64,
        engine_running: bool,
        throttle: f64,
    ) -> Self {
        let dynamic_pressure = 0.5 * density * speed * speed;
        let sin_aoa = angle_of_attack.sin();
        let lift = spec.lift_coefficient * sin_aoa * spec.wing_area * dynamic_pressure;
        let drag = (spec.drag_coefficient + INDUCED_DRAG_FACTOR * sin_aoa * sin_aoa)
            * spec.wing_area
            * dynamic_pressure;
        let thrust = if engine_running {
            spec.thrust * (throttle / PERCENT_MAX)
        } else {
            0.0
        };
        Self {
            dynamic_pressure,
            lift,
            drag,
            thrust,
        }
    }
}

/// Integrate speed from the force balance and fill in the aerodynamic
/// readouts. The angle of attack is the pitch angle.
pub fn run(
    flight: &mut FlightState,
    spec: &AircraftSpec,
    systems: &SystemsState,
    config: &SimConfig,
    dt: f64,
) {
    let atmosphere =
        Atmosphere::at_altitude(config.base_temperature_c, config.base_pressure, flight.altitude);
    let forces = AeroForces::compute(
        spec,
        atmosphere.density,
        flight.speed,
        flight.pitch.to_radians(),
        systems.engine_running,
        flight.throttle,
    );

    let acceleration = (forces.thrust - forces.drag) / spec.weight;
    flight.speed = (flight.speed + acceleration * dt).clamp(0.0, spec.max_speed_kmh());

    flight.temperature = atmosphere.temperature_c;
    flight.lift = forces.lift;
    flight.drag = forces.drag;
    flight.thrust = forces.thrust;

    let sea_level = Atmosphere::at_altitude(config.base_temperature_c, config.base_pressure, 0.0);
    flight.true_airspeed =
        flight.speed * KNOTS_PER_KMH * (sea_level.density / atmosphere.density).sqrt();
    flight.mach = flight.speed / KMH_PER_MS / atmosphere.speed_of_sound();
    flight.g_force = forces.lift / (spec.weight * STANDARD_GRAVITY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use flightdeck_core::aircraft::CESSNA_172;

    #[test]
    fn test_sea_level_density() {
        let atmosphere = Atmosphere::at_altitude(15.0, 29.92, 0.0);
        assert_relative_eq!(atmosphere.temperature_c, 15.0);
        assert_relative_eq!(atmosphere.pressure, 29.92);
        assert_relative_eq!(
            atmosphere.density,
            29.92 / (287.1 * 288.15),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_density_falls_with_altitude() {
        let low = Atmosphere::at_altitude(15.0, 29.92, 0.0);
        let high = Atmosphere::at_altitude(15.0, 29.92, 5000.0);
        assert_relative_eq!(high.temperature_c, 15.0 - 32.5);
        assert_relative_eq!(high.pressure, 29.92 * (-0.625f64).exp());
        assert!(high.density < low.density);
        assert!(high.speed_of_sound() < low.speed_of_sound());
    }

    #[test]
    fn test_no_forces_at_rest_with_engine_off() {
        let forces = AeroForces::compute(&CESSNA_172, 0.0003, 0.0, 0.2, false, 100.0);
        assert_eq!(forces, AeroForces::default());
    }

    #[test]
    fn test_force_formulas() {
        let density = 0.0004;
        let speed = 200.0;
        let aoa = 0.1f64;
        let forces = AeroForces::compute(&CESSNA_172, density, speed, aoa, true, 50.0);
        let q = 0.5 * density * speed * speed;
        assert_relative_eq!(forces.dynamic_pressure, q);
        assert_relative_eq!(forces.lift, 5.0 * aoa.sin() * 16.2 * q);
        assert_relative_eq!(forces.drag, (0.027 + 0.1 * aoa.sin().powi(2)) * 16.2 * q);
        assert_relative_eq!(forces.thrust, 1250.0);
    }

    #[test]
    fn test_level_flight_produces_no_lift() {
        let forces = AeroForces::compute(&CESSNA_172, 0.0004, 150.0, 0.0, true, 50.0);
        assert_eq!(forces.lift, 0.0);
        assert!(forces.drag > 0.0);
    }
}
