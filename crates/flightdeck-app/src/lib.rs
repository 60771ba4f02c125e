//! FLIGHTDECK headless host.
//!
//! Loads the configuration, runs the flight engine on a paced frame loop
//! thread, and forwards control inputs to it over a channel.

pub mod config;
pub mod console;
pub mod frame_loop;
pub mod state;

pub use flightdeck_core as core;
pub use flightdeck_sim as sim;
