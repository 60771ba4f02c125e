//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Weather;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlightEvent {
    AutopilotEngaged,
    AutopilotDisengaged,
    EngineStarted,
    EngineStopped,
    GearChanged { down: bool },
    FlapsChanged { down: bool },
    WeatherChanged { weather: Weather },
    /// Fuel reached zero this frame.
    FuelExhausted,
    /// Airspeed dropped below the aircraft's stall speed (knots).
    StallWarning { airspeed: f64, stall_speed: f64 },
    FlightReset,
}
