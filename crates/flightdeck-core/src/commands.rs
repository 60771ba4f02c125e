//! Control inputs sent from the UI layer to the simulation.
//!
//! Inputs are queued and applied at the start of the next frame, before any
//! integration runs.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All discrete inputs the UI can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlInput {
    // --- Sliders ---
    /// Throttle slider (percent, clamped to [0, 100]).
    SetThrottle { value: f64 },
    /// Mixture slider (percent, clamped to [0, 100]).
    SetMixture { value: f64 },
    /// Pitch slider (degrees).
    SetPitch { degrees: f64 },
    /// Roll slider (degrees).
    SetRoll { degrees: f64 },
    /// Yaw slider (degrees). Displayed only; heading is not driven by it.
    SetYaw { degrees: f64 },

    // --- Keyboard ---
    KeyDown { key: ControlKey },
    KeyUp { key: ControlKey },

    // --- System toggles ---
    ToggleEngine,
    ToggleGear,
    ToggleFlaps,
    ToggleAutopilot,
    ToggleGps,
    ToggleStallWarning,
    SetWeather { weather: Weather },
    SetTimeOfDay { time_of_day: TimeOfDay },

    /// Put the aircraft back at its start position with default flight data.
    Reset,
}
