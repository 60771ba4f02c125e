//! Mutable flight records owned by the simulation engine.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{ControlKey, FlightMode, TimeOfDay, Weather};

/// Flight scalars advanced every frame.
///
/// Angles are degrees, speed is km/h, altitude is meters. Throttle, mixture
/// and fuel are percentages and never leave [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    pub speed: f64,
    pub altitude: f64,
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub throttle: f64,
    pub mixture: f64,
    pub fuel: f64,
    /// Outside air temperature (°C).
    pub temperature: f64,
    /// Indicated airspeed (knots).
    pub airspeed: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub rpm: f64,
    /// Rate of altitude change over the last frame (m/s).
    pub vertical_speed: f64,

    // --- Aerodynamic model outputs (zero when the model is off) ---
    pub lift: f64,
    pub drag: f64,
    pub thrust: f64,
    /// True airspeed (knots).
    pub true_airspeed: f64,
    pub mach: f64,
    pub g_force: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            speed: 0.0,
            altitude: DEFAULT_ALTITUDE,
            heading: 0.0,
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            throttle: 0.0,
            mixture: DEFAULT_MIXTURE,
            fuel: DEFAULT_FUEL,
            temperature: BASE_TEMPERATURE_C,
            airspeed: 0.0,
            latitude: 0.0,
            longitude: 0.0,
            rpm: 0.0,
            vertical_speed: 0.0,
            lift: 0.0,
            drag: 0.0,
            thrust: 0.0,
            true_airspeed: 0.0,
            mach: 0.0,
            g_force: 0.0,
        }
    }
}

impl FlightState {
    /// Restore every scalar to its startup default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_throttle(&mut self, value: f64) {
        self.throttle = clamp_percent(value);
    }

    pub fn set_mixture(&mut self, value: f64) {
        self.mixture = clamp_percent(value);
    }
}

/// Clamp a percentage into [0, 100]. NaN collapses to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, PERCENT_MAX)
}

/// Discrete aircraft systems, changed only by toggle inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemsState {
    pub engine_running: bool,
    /// `true` when the gear is down.
    pub landing_gear: bool,
    pub flaps: bool,
    pub autopilot: bool,
    pub gps: bool,
    pub stall_warning: bool,
    pub weather: Weather,
    pub time_of_day: TimeOfDay,
}

impl Default for SystemsState {
    fn default() -> Self {
        Self {
            engine_running: false,
            landing_gear: true,
            flaps: false,
            autopilot: false,
            gps: true,
            stall_warning: true,
            weather: Weather::Clear,
            time_of_day: TimeOfDay::Day,
        }
    }
}

impl SystemsState {
    pub fn mode(&self) -> FlightMode {
        if self.autopilot {
            FlightMode::Autopilot
        } else {
            FlightMode::Manual
        }
    }
}

/// Directional keys currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldControls {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
}

impl HeldControls {
    /// Record a key transition. Returns `false` for keys that are not held
    /// directional controls.
    pub fn set(&mut self, key: ControlKey, down: bool) -> bool {
        match key {
            ControlKey::PitchUp => self.pitch_up = down,
            ControlKey::PitchDown => self.pitch_down = down,
            ControlKey::RollLeft => self.roll_left = down,
            ControlKey::RollRight => self.roll_right = down,
            ControlKey::Autopilot | ControlKey::Reset => return false,
        }
        true
    }

    /// Net pitch direction: +1 nose up, -1 nose down, 0 when neither or both.
    pub fn pitch_axis(&self) -> f64 {
        axis(self.pitch_up, self.pitch_down)
    }

    /// Net roll direction: +1 right, -1 left.
    pub fn roll_axis(&self) -> f64 {
        axis(self.roll_right, self.roll_left)
    }

    pub fn any(&self) -> bool {
        self.pitch_up || self.pitch_down || self.roll_left || self.roll_right
    }
}

fn axis(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
