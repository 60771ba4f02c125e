//! Scene parameters exported to the renderer.
//!
//! The simulation never draws anything; these values tell the host how dense
//! to build the scene and how to fog it.

use serde::{Deserialize, Serialize};

use crate::enums::{DetailLevel, Weather};

/// Linear fog the renderer applies for the current weather.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogSettings {
    /// RGB color, 0xRRGGBB.
    pub color: u32,
    /// Distance at which fog starts (meters).
    pub near: f64,
    /// Distance at which fog is opaque (meters).
    pub far: f64,
}

/// Scene object counts and draw distances for a detail level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentDensity {
    pub mountains: u32,
    pub hills: u32,
    pub clouds: u32,
    pub buildings: u32,
    pub trees: u32,
    pub water_bodies: u32,
    /// Distance beyond which the renderer switches to low-detail meshes (meters).
    pub lod_distance: u32,
    pub max_draw_distance: u32,
}

impl Weather {
    pub fn fog(self) -> FogSettings {
        match self {
            Weather::Clear => FogSettings {
                color: 0x87CEEB,
                near: 1000.0,
                far: 20_000.0,
            },
            Weather::Cloudy => FogSettings {
                color: 0xCCCCCC,
                near: 500.0,
                far: 10_000.0,
            },
            Weather::Stormy => FogSettings {
                color: 0x666666,
                near: 200.0,
                far: 5000.0,
            },
            Weather::Foggy => FogSettings {
                color: 0xDDDDDD,
                near: 100.0,
                far: 2000.0,
            },
        }
    }
}

impl DetailLevel {
    pub fn environment(self) -> EnvironmentDensity {
        match self {
            DetailLevel::Low => EnvironmentDensity {
                mountains: 10,
                hills: 20,
                clouds: 20,
                buildings: 20,
                trees: 50,
                water_bodies: 2,
                lod_distance: 2500,
                max_draw_distance: 5000,
            },
            DetailLevel::Medium => EnvironmentDensity {
                mountains: 20,
                hills: 40,
                clouds: 50,
                buildings: 40,
                trees: 100,
                water_bodies: 4,
                lod_distance: 5000,
                max_draw_distance: 10_000,
            },
            DetailLevel::High => EnvironmentDensity {
                mountains: 50,
                hills: 100,
                clouds: 150,
                buildings: 100,
                trees: 500,
                water_bodies: 8,
                lod_distance: 5000,
                max_draw_distance: 20_000,
            },
        }
    }

    /// Whether the force-balance speed model runs at this level.
    pub fn aerodynamics_enabled(self) -> bool {
        self == DetailLevel::High
    }
}
