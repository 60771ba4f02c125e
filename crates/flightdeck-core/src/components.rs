//! Scene components shared with the host's `hecs` world.
//!
//! The host owns the world and the aircraft entity. The simulation only
//! writes into the entity's `Transform`.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ALTITUDE;

/// Position and orientation of a scene object.
///
/// Position is meters with y up; the aircraft flies toward -z at heading 0.
/// Rotation holds Euler angles in radians applied in XYZ order:
/// x = pitch, y = heading, z = roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::aircraft_start()
    }
}

impl Transform {
    /// Where the aircraft sits at startup and after a reset.
    pub fn aircraft_start() -> Self {
        Self {
            position: DVec3::new(0.0, DEFAULT_ALTITUDE, 0.0),
            rotation: DVec3::ZERO,
        }
    }
}

/// Marker for the player's aircraft entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAircraft;
