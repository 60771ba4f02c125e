//! Snapshot builder: gathers engine state and the written transform into a
//! `FlightSnapshot`.

use glam::DVec3;

use flightdeck_core::components::Transform;
use flightdeck_core::events::FlightEvent;
use flightdeck_core::flight::{FlightState, SystemsState};
use flightdeck_core::state::FlightSnapshot;
use flightdeck_core::types::SimTime;

use crate::config::SimConfig;

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: &SimTime,
    config: &SimConfig,
    flight: &FlightState,
    systems: &SystemsState,
    transform: &Transform,
    displacement: DVec3,
    stall_warning: bool,
    events: Vec<FlightEvent>,
) -> FlightSnapshot {
    FlightSnapshot {
        time: *time,
        detail: config.detail,
        aircraft: config.aircraft,
        mode: systems.mode(),
        flight: flight.clone(),
        systems: systems.clone(),
        position: transform.position,
        rotation: transform.rotation,
        displacement,
        stall_warning,
        fog: systems.weather.fog(),
        events,
    }
}
