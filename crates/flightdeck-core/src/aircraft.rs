//! Aircraft roster and per-type constants.

use serde::{Deserialize, Serialize};

use crate::constants::KNOTS_PER_KMH;
use crate::enums::DetailLevel;

/// Aircraft types available in the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftKind {
    #[default]
    Cessna,
    Boeing,
    Helicopter,
    Fighter,
}

/// Immutable per-type constants, selected once before the simulation starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AircraftSpec {
    pub name: &'static str,
    /// Maximum speed (knots).
    pub max_speed: f64,
    /// Service ceiling (feet).
    pub max_altitude: f64,
    /// Fuel capacity (gallons).
    pub fuel_capacity: f64,
    /// Engine RPM at full throttle.
    pub engine_rpm: f64,
    /// Stall speed (knots). Zero for rotorcraft.
    pub stall_speed: f64,
    pub takeoff_speed: f64,
    pub landing_speed: f64,
    /// Reference wing area (m²).
    pub wing_area: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    /// Static thrust at full throttle (N).
    pub thrust: f64,
    /// Mass used by the force balance (kg).
    pub weight: f64,
}

pub const CESSNA_172: AircraftSpec = AircraftSpec {
    name: "Cessna 172",
    max_speed: 126.0,
    max_altitude: 14_000.0,
    fuel_capacity: 56.0,
    engine_rpm: 2700.0,
    stall_speed: 48.0,
    takeoff_speed: 55.0,
    landing_speed: 50.0,
    wing_area: 16.2,
    lift_coefficient: 5.0,
    drag_coefficient: 0.027,
    thrust: 2_500.0,
    weight: 1_111.0,
};

pub const BOEING_737: AircraftSpec = AircraftSpec {
    name: "Boeing 737",
    max_speed: 450.0,
    max_altitude: 41_000.0,
    fuel_capacity: 26_020.0,
    engine_rpm: 15_000.0,
    stall_speed: 120.0,
    takeoff_speed: 150.0,
    landing_speed: 140.0,
    wing_area: 124.6,
    lift_coefficient: 5.5,
    drag_coefficient: 0.024,
    thrust: 240_000.0,
    weight: 70_000.0,
};

pub const BELL_206: AircraftSpec = AircraftSpec {
    name: "Bell 206",
    max_speed: 140.0,
    max_altitude: 13_000.0,
    fuel_capacity: 344.0,
    engine_rpm: 6000.0,
    stall_speed: 0.0,
    takeoff_speed: 0.0,
    landing_speed: 0.0,
    wing_area: 10.0,
    lift_coefficient: 4.0,
    drag_coefficient: 0.05,
    thrust: 3_500.0,
    weight: 1_450.0,
};

pub const F16: AircraftSpec = AircraftSpec {
    name: "F-16 Fighting Falcon",
    max_speed: 1500.0,
    max_altitude: 50_000.0,
    fuel_capacity: 7000.0,
    engine_rpm: 15_000.0,
    stall_speed: 100.0,
    takeoff_speed: 180.0,
    landing_speed: 160.0,
    wing_area: 27.87,
    lift_coefficient: 3.5,
    drag_coefficient: 0.016,
    thrust: 129_000.0,
    weight: 12_000.0,
};

impl AircraftKind {
    pub const ALL: [AircraftKind; 4] = [
        AircraftKind::Cessna,
        AircraftKind::Boeing,
        AircraftKind::Helicopter,
        AircraftKind::Fighter,
    ];

    pub fn spec(self) -> &'static AircraftSpec {
        match self {
            AircraftKind::Cessna => &CESSNA_172,
            AircraftKind::Boeing => &BOEING_737,
            AircraftKind::Helicopter => &BELL_206,
            AircraftKind::Fighter => &F16,
        }
    }

    /// Aircraft selectable at a given detail level.
    pub fn roster(detail: DetailLevel) -> &'static [AircraftKind] {
        match detail {
            DetailLevel::Low => &Self::ALL[..1],
            DetailLevel::Medium => &Self::ALL[..2],
            DetailLevel::High => &Self::ALL,
        }
    }
}

impl AircraftSpec {
    /// Maximum speed converted to the km/h the flight state is kept in.
    pub fn max_speed_kmh(&self) -> f64 {
        self.max_speed / KNOTS_PER_KMH
    }
}
