//! Frame timing sources.
//!
//! The engine never reads a clock itself. The host hands it a `FrameStep`
//! per frame, normally produced by one of the clocks here.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Timing for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    /// Seconds since the previous frame. `None` when no timer is available,
    /// in which case the frame integrates nothing.
    pub elapsed_secs: Option<f64>,
    /// Wall-clock seconds, used by the autopilot's attitude oscillation.
    pub wall_clock_secs: f64,
}

impl FrameStep {
    pub fn new(elapsed_secs: f64, wall_clock_secs: f64) -> Self {
        Self {
            elapsed_secs: Some(elapsed_secs),
            wall_clock_secs,
        }
    }

    /// A frame with no timer source.
    pub fn without_timer(wall_clock_secs: f64) -> Self {
        Self {
            elapsed_secs: None,
            wall_clock_secs,
        }
    }

    /// The integration step, if this frame should integrate at all.
    pub fn dt(&self) -> Option<f64> {
        self.elapsed_secs.filter(|dt| dt.is_finite() && *dt > 0.0)
    }
}

/// Anything that can time frames.
pub trait FrameClock {
    fn step(&mut self) -> FrameStep;
}

/// Real time. The first step reports zero elapsed seconds.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for SystemClock {
    fn step(&mut self) -> FrameStep {
        let now = Instant::now();
        let elapsed = self
            .last
            .map(|last| now.duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last = Some(now);

        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        FrameStep::new(elapsed, wall)
    }
}

/// Fixed-step clock for deterministic runs. Wall-clock time starts at
/// `wall_clock_secs` and advances with every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualClock {
    pub dt: f64,
    pub wall_clock_secs: f64,
}

impl ManualClock {
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            wall_clock_secs: 0.0,
        }
    }
}

impl FrameClock for ManualClock {
    fn step(&mut self) -> FrameStep {
        self.wall_clock_secs += self.dt;
        FrameStep::new(self.dt, self.wall_clock_secs)
    }
}
