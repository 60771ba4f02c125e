//! Engine configuration, chosen once before the simulation starts.

use serde::{Deserialize, Serialize};

use flightdeck_core::aircraft::AircraftKind;
use flightdeck_core::constants::{BASE_PRESSURE_INHG, BASE_TEMPERATURE_C, KELVIN_OFFSET};
use flightdeck_core::enums::DetailLevel;

use crate::error::SimError;

/// How manual pitch and roll are bounded.
///
/// Held keys and sliders integrate without any bound by default, relying on
/// the angles wrapping through the trigonometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum AttitudeLimits {
    #[default]
    Unclamped,
    /// Symmetric bounds in degrees.
    Clamped { max_pitch: f64, max_roll: f64 },
}

impl AttitudeLimits {
    pub fn pitch(&self, degrees: f64) -> f64 {
        match *self {
            AttitudeLimits::Unclamped => degrees,
            AttitudeLimits::Clamped { max_pitch, .. } => degrees.clamp(-max_pitch, max_pitch),
        }
    }

    pub fn roll(&self, degrees: f64) -> f64 {
        match *self {
            AttitudeLimits::Unclamped => degrees,
            AttitudeLimits::Clamped { max_roll, .. } => degrees.clamp(-max_roll, max_roll),
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub detail: DetailLevel,
    pub aircraft: AircraftKind,
    pub attitude_limits: AttitudeLimits,
    /// Sea-level temperature for the atmosphere model (°C).
    pub base_temperature_c: f64,
    /// Sea-level pressure for the atmosphere model (inHg).
    pub base_pressure: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            detail: DetailLevel::default(),
            aircraft: AircraftKind::default(),
            attitude_limits: AttitudeLimits::default(),
            base_temperature_c: BASE_TEMPERATURE_C,
            base_pressure: BASE_PRESSURE_INHG,
        }
    }
}

impl SimConfig {
    /// Default configuration at a given detail level.
    pub fn for_detail(detail: DetailLevel) -> Self {
        Self {
            detail,
            ..Default::default()
        }
    }

    pub fn aerodynamics(&self) -> bool {
        self.detail.aerodynamics_enabled()
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !AircraftKind::roster(self.detail).contains(&self.aircraft) {
            return Err(SimError::AircraftNotInRoster {
                aircraft: self.aircraft,
                detail: self.detail,
            });
        }
        if !(self.base_pressure.is_finite() && self.base_pressure > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "base pressure must be positive, got {}",
                self.base_pressure
            )));
        }
        if !(self.base_temperature_c.is_finite() && self.base_temperature_c > -KELVIN_OFFSET) {
            return Err(SimError::InvalidConfig(format!(
                "base temperature must be above absolute zero, got {}",
                self.base_temperature_c
            )));
        }
        if let AttitudeLimits::Clamped {
            max_pitch,
            max_roll,
        } = self.attitude_limits
        {
            // clamp() panics on min > max, so reject negative or NaN bounds here.
            if !(max_pitch >= 0.0 && max_roll >= 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "attitude limits must be non-negative, got pitch {max_pitch} roll {max_roll}"
                )));
            }
        }
        Ok(())
    }
}
