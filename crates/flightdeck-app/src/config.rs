//! Host configuration, read from a JSON file or built from CLI flags.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use flightdeck_core::commands::ControlInput;
use flightdeck_sim::{SimConfig, SimError};

/// Frame rate the loop paces itself to when none is configured.
pub const DEFAULT_FRAME_RATE: u32 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("frame rate must be between 1 and 1000, got {0}")]
    FrameRate(u32),
    #[error("duration must be finite and non-negative, got {0}")]
    Duration(f64),
    #[error("scheduled input at {0}s is not a valid time")]
    InputTime(f64),
}

/// Where frame timing comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockMode {
    /// Wall-clock timing, paced to the frame rate.
    #[default]
    Realtime,
    /// Fixed steps of `1 / frame_rate`, run as fast as possible.
    Fixed,
}

/// A control input delivered once simulated time reaches `at_secs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledInput {
    pub at_secs: f64,
    pub input: ControlInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub frame_rate: u32,
    pub clock: ClockMode,
    /// Simulated seconds to run before stopping. Zero runs until shutdown.
    pub duration_secs: f64,
    pub inputs: Vec<ScheduledInput>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            clock: ClockMode::default(),
            duration_secs: 0.0,
            inputs: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.validate()?;
        config.sort_inputs();
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sim.validate()?;
        if self.frame_rate == 0 || self.frame_rate > 1000 {
            return Err(ConfigError::FrameRate(self.frame_rate));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(ConfigError::Duration(self.duration_secs));
        }
        if let Some(bad) = self
            .inputs
            .iter()
            .find(|s| !s.at_secs.is_finite() || s.at_secs < 0.0)
        {
            return Err(ConfigError::InputTime(bad.at_secs));
        }
        Ok(())
    }

    /// Seconds per frame at the configured rate.
    pub fn frame_secs(&self) -> f64 {
        1.0 / f64::from(self.frame_rate)
    }

    /// Order scheduled inputs by delivery time. Inputs sharing a time keep
    /// their file order.
    pub fn sort_inputs(&mut self) {
        self.inputs.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
    }

    pub fn schedule(&mut self, at_secs: f64, input: ControlInput) {
        self.inputs.push(ScheduledInput { at_secs, input });
        self.sort_inputs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightdeck_core::aircraft::AircraftKind;
    use flightdeck_core::enums::DetailLevel;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.clock, ClockMode::Realtime);
    }

    #[test]
    fn test_full_config_parses_and_sorts() {
        let json = r#"{
            "sim": { "detail": "Medium", "aircraft": "Boeing" },
            "frame_rate": 30,
            "clock": "Fixed",
            "duration_secs": 12.0,
            "inputs": [
                { "at_secs": 5.0, "input": { "type": "ToggleAutopilot" } },
                { "at_secs": 0.0, "input": { "type": "SetThrottle", "value": 60.0 } }
            ]
        }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.sim.detail, DetailLevel::Medium);
        assert_eq!(config.sim.aircraft, AircraftKind::Boeing);
        assert_eq!(config.clock, ClockMode::Fixed);
        assert_eq!(config.inputs[0].at_secs, 0.0);
        assert_eq!(config.inputs[1].input, ControlInput::ToggleAutopilot);
        assert!((config.frame_secs() - 1.0 / 30.0).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let roster = r#"{ "sim": { "detail": "Low", "aircraft": "Fighter" } }"#;
        assert!(matches!(
            AppConfig::from_json(roster),
            Err(ConfigError::Sim(SimError::AircraftNotInRoster { .. }))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "frame_rate": 0 }"#),
            Err(ConfigError::FrameRate(0))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "duration_secs": -1.0 }"#),
            Err(ConfigError::Duration(_))
        ));
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AppConfig::load(Path::new("/nonexistent/flightdeck.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_round_trip_through_file() {
        let mut config = AppConfig {
            duration_secs: 3.0,
            ..Default::default()
        };
        config.schedule(1.5, ControlInput::ToggleEngine);
        let path = std::env::temp_dir().join(format!("flightdeck-{}.json", std::process::id()));
        fs::write(&path, config.to_json().unwrap()).unwrap();
        let loaded = AppConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
