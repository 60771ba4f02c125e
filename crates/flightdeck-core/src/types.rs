//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking. Frames have variable length, so elapsed time
/// is accumulated rather than derived from the frame count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of integrated frames.
    pub frame: u64,
    /// Simulated seconds since start.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}
