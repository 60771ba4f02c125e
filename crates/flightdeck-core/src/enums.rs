//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which control law is driving the aircraft this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightMode {
    #[default]
    Manual,
    Autopilot,
}

/// Weather selection. Only affects what the renderer draws (fog).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    Clear,
    Cloudy,
    Stormy,
    Foggy,
}

/// Time of day selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

/// Simulation detail level. Selects the aircraft roster, the scene density
/// exported to the renderer, and whether the aerodynamic model runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DetailLevel {
    Low,
    Medium,
    #[default]
    High,
}

/// Keys with a flight-control meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKey {
    /// W: nose up while held.
    PitchUp,
    /// S: nose down while held.
    PitchDown,
    /// A: roll left while held.
    RollLeft,
    /// D: roll right while held.
    RollRight,
    /// Space: toggles the autopilot on key-down.
    Autopilot,
    /// R: resets the flight on key-down.
    Reset,
}

impl ControlKey {
    /// Map a DOM-style key code (`"KeyW"`, `"Space"`, ...) to a control key.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Self::PitchUp),
            "KeyS" => Some(Self::PitchDown),
            "KeyA" => Some(Self::RollLeft),
            "KeyD" => Some(Self::RollRight),
            "Space" => Some(Self::Autopilot),
            "KeyR" => Some(Self::Reset),
            _ => None,
        }
    }
}
