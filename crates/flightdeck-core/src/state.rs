//! Flight snapshot: the read-only view handed to the HUD and minimap each frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::aircraft::AircraftKind;
use crate::constants::FEET_PER_METER;
use crate::enums::{DetailLevel, FlightMode};
use crate::environment::FogSettings;
use crate::events::FlightEvent;
use crate::flight::{FlightState, SystemsState};
use crate::types::SimTime;

/// Complete visible state after a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub time: SimTime,
    pub detail: DetailLevel,
    pub aircraft: AircraftKind,
    pub mode: FlightMode,
    pub flight: FlightState,
    pub systems: SystemsState,
    /// Aircraft position as written to the transform (meters).
    pub position: DVec3,
    /// Aircraft rotation as written to the transform (radians).
    pub rotation: DVec3,
    /// Movement along the forward axis during the frame, before the
    /// altitude write (meters).
    pub displacement: DVec3,
    /// Stall warning light state.
    pub stall_warning: bool,
    pub fog: FogSettings,
    pub events: Vec<FlightEvent>,
}

/// Values as the HUD prints them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudReadout {
    pub speed_kmh: i64,
    pub altitude_m: i64,
    pub altitude_ft: i64,
    pub heading_deg: i64,
    pub airspeed_kt: i64,
    pub fuel_pct: i64,
    pub throttle_pct: i64,
    pub pitch_deg: i64,
    pub roll_deg: i64,
    pub latitude: String,
    pub longitude: String,
}

impl FlightSnapshot {
    pub fn hud(&self) -> HudReadout {
        let f = &self.flight;
        HudReadout {
            speed_kmh: round(f.speed),
            altitude_m: round(f.altitude),
            altitude_ft: round(f.altitude * FEET_PER_METER),
            heading_deg: round(f.heading),
            airspeed_kt: round(f.airspeed),
            fuel_pct: round(f.fuel),
            throttle_pct: round(f.throttle),
            pitch_deg: round(f.pitch),
            roll_deg: round(f.roll),
            latitude: format!("{:.3}", f.latitude),
            longitude: format!("{:.3}", f.longitude),
        }
    }
}

fn round(value: f64) -> i64 {
    value.round() as i64
}
