//! Flight simulation engine for FLIGHTDECK.
//!
//! Owns the flight state, applies queued control inputs, runs the per-frame
//! systems, writes the aircraft transform in the host's `hecs` world, and
//! produces `FlightSnapshot`s for display.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod systems;

pub use flightdeck_core as core;
pub use clock::{FrameClock, FrameStep, ManualClock, SystemClock};
pub use config::{AttitudeLimits, SimConfig};
pub use engine::FlightEngine;
pub use error::SimError;
