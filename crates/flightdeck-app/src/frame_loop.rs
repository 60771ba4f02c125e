//! Frame loop thread: owns the scene and the flight engine, applies inputs
//! from the host, and publishes a snapshot after every frame.
//!
//! Each frame runs behind a guard. A frame that returns an error or panics
//! is logged and skipped, and the loop carries on with the next one.

use std::any::Any;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use hecs::World;
use thiserror::Error;

use flightdeck_core::commands::ControlInput;
use flightdeck_core::state::FlightSnapshot;
use flightdeck_sim::{FlightEngine, FrameClock, FrameStep, ManualClock, SimError, SystemClock};

use crate::config::{AppConfig, ClockMode, ScheduledInput};
use crate::state::{FrameLoopHandle, LoopCommand};

/// Window over which the frame rate is averaged.
const FPS_WINDOW: Duration = Duration::from_millis(1000);

/// Slack when comparing accumulated simulated time against the run length.
const TIME_EPSILON: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum FrameLoopError {
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("cannot spawn frame loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Frame counters and a once-a-second FPS reading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    pub failed: u64,
    pub fps: f64,
    window_start: Option<Instant>,
    window_frames: u32,
}

impl FrameStats {
    pub fn record(&mut self, now: Instant, completed: bool) {
        self.frames += 1;
        if !completed {
            self.failed += 1;
        }
        let start = *self.window_start.get_or_insert(now);
        self.window_frames += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed >= FPS_WINDOW {
            self.fps = f64::from(self.window_frames) / elapsed.as_secs_f64();
            self.window_start = Some(now);
            self.window_frames = 0;
        }
    }
}

/// Run one frame, turning errors and panics into a logged `None`.
pub fn guarded<F>(frame: u64, run: F) -> Option<FlightSnapshot>
where
    F: FnOnce() -> Result<FlightSnapshot, SimError>,
{
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(Ok(snapshot)) => Some(snapshot),
        Ok(Err(err)) => {
            log::error!("frame {frame} failed: {err}");
            None
        }
        Err(payload) => {
            log::error!("frame {frame} panicked: {}", panic_message(payload.as_ref()));
            None
        }
    }
}

pub fn run_guarded_frame(
    engine: &mut FlightEngine,
    scene: &mut World,
    step: FrameStep,
) -> Option<FlightSnapshot> {
    let frame = engine.time().frame;
    guarded(frame, || engine.tick(step, scene))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Everything one running simulation needs, independent of threading and
/// timing.
pub struct FrameLoop {
    engine: FlightEngine,
    scene: World,
    schedule: VecDeque<ScheduledInput>,
    duration_secs: f64,
    stats: FrameStats,
}

impl FrameLoop {
    pub fn new(config: &AppConfig) -> Result<Self, SimError> {
        let mut scene = World::new();
        let mut engine = FlightEngine::new(config.sim.clone())?;
        engine.spawn_aircraft(&mut scene);

        let mut schedule = config.inputs.clone();
        schedule.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));

        Ok(Self {
            engine,
            scene,
            schedule: schedule.into(),
            duration_secs: config.duration_secs,
            stats: FrameStats::default(),
        })
    }

    pub fn queue_input(&mut self, input: ControlInput) {
        self.engine.queue_input(input);
    }

    /// Release scheduled inputs that are due, then run one guarded frame.
    pub fn step(&mut self, step: FrameStep, now: Instant) -> Option<FlightSnapshot> {
        let elapsed = self.engine.time().elapsed_secs;
        while self
            .schedule
            .front()
            .is_some_and(|s| s.at_secs <= elapsed + TIME_EPSILON)
        {
            if let Some(scheduled) = self.schedule.pop_front() {
                self.engine.queue_input(scheduled.input);
            }
        }

        let snapshot = run_guarded_frame(&mut self.engine, &mut self.scene, step);
        self.stats.record(now, snapshot.is_some());
        snapshot
    }

    /// Whether the configured run length has been simulated.
    pub fn finished(&self) -> bool {
        self.duration_secs > 0.0
            && self.engine.time().elapsed_secs + TIME_EPSILON >= self.duration_secs
    }

    pub fn engine(&self) -> &FlightEngine {
        &self.engine
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}

/// Spawn the frame loop on its own thread.
pub fn spawn_frame_loop(config: AppConfig) -> Result<FrameLoopHandle, FrameLoopError> {
    let frame_loop = FrameLoop::new(&config)?;
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let latest = Arc::clone(&latest_snapshot);
    let frame_secs = config.frame_secs();
    let clock = config.clock;

    let thread = std::thread::Builder::new()
        .name("flightdeck-frame-loop".into())
        .spawn(move || match clock {
            ClockMode::Realtime => run_frame_loop(
                frame_loop,
                SystemClock::new(),
                Some(Duration::from_secs_f64(frame_secs)),
                &command_rx,
                &latest,
            ),
            ClockMode::Fixed => run_frame_loop(
                frame_loop,
                ManualClock::new(frame_secs),
                None,
                &command_rx,
                &latest,
            ),
        })?;

    Ok(FrameLoopHandle {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// Runs until shutdown, channel disconnect, or the configured run length.
/// `pace` is the target frame duration; `None` runs flat out.
fn run_frame_loop<C: FrameClock>(
    mut frame_loop: FrameLoop,
    mut clock: C,
    pace: Option<Duration>,
    command_rx: &mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<FlightSnapshot>>,
) -> FrameStats {
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain pending commands
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Input(input)) => frame_loop.queue_input(input),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    return stop(&frame_loop);
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame
        if let Some(snapshot) = frame_loop.step(clock.step(), Instant::now()) {
            for event in &snapshot.events {
                log::debug!("frame {}: {event:?}", snapshot.time.frame);
            }
            // 3. Publish
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot);
            }
        }

        if frame_loop.finished() {
            return stop(&frame_loop);
        }

        // 4. Sleep until the next frame
        if let Some(frame_duration) = pace {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                next_frame_time = now;
            }
        }
    }
}

fn stop(frame_loop: &FrameLoop) -> FrameStats {
    let stats = frame_loop.stats();
    log::info!(
        "frame loop stopped after {} frames ({} failed, {:.0} fps)",
        stats.frames,
        stats.failed,
        stats.fps
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use flightdeck_sim::SimConfig;

    fn fixed_config(frame_rate: u32, duration_secs: f64) -> AppConfig {
        AppConfig {
            sim: SimConfig::default(),
            frame_rate,
            clock: ClockMode::Fixed,
            duration_secs,
            inputs: Vec::new(),
        }
    }

    #[test]
    fn test_fps_over_one_second_window() {
        let mut stats = FrameStats::default();
        let start = Instant::now();
        stats.record(start, true);
        stats.record(start + Duration::from_millis(500), true);
        assert_eq!(stats.fps, 0.0, "no reading before a full window");
        stats.record(start + Duration::from_millis(1000), false);
        assert_relative_eq!(stats.fps, 3.0);
        assert_eq!(stats.frames, 3);
        assert_eq!(stats.failed, 1);
    }

    #[test]
    fn test_guard_logs_errors_and_panics() {
        assert!(guarded(7, || Err(SimError::NoAircraftBound)).is_none());
        assert!(guarded(8, || panic!("bad frame")).is_none());
    }

    #[test]
    fn test_guarded_frame_without_aircraft_continues() {
        let mut engine = FlightEngine::new(SimConfig::default()).unwrap();
        let mut scene = World::new();
        let step = FrameStep::new(0.1, 0.0);
        assert!(run_guarded_frame(&mut engine, &mut scene, step).is_none());

        engine.spawn_aircraft(&mut scene);
        let snapshot = run_guarded_frame(&mut engine, &mut scene, step).unwrap();
        assert_eq!(snapshot.time.frame, 1);
    }

    #[test]
    fn test_scheduled_autopilot_run() {
        let mut config = fixed_config(10, 10.0);
        config.schedule(0.0, ControlInput::ToggleAutopilot);
        let mut frame_loop = FrameLoop::new(&config).unwrap();
        let mut clock = ManualClock::new(config.frame_secs());

        while !frame_loop.finished() {
            frame_loop.step(clock.step(), Instant::now());
        }
        let flight = frame_loop.engine().flight();
        assert_eq!(frame_loop.stats().frames, 100);
        assert_relative_eq!(flight.throttle, 80.0);
        assert_relative_eq!(flight.altitude, 600.0, epsilon = 1e-6);
    }

    #[test]
    fn test_inputs_released_on_time() {
        let mut config = fixed_config(4, 0.0);
        config.schedule(1.0, ControlInput::SetThrottle { value: 50.0 });
        let mut frame_loop = FrameLoop::new(&config).unwrap();
        let mut clock = ManualClock::new(0.25);

        for _ in 0..4 {
            let snapshot = frame_loop.step(clock.step(), Instant::now()).unwrap();
            assert_eq!(snapshot.flight.throttle, 0.0);
        }
        let snapshot = frame_loop.step(clock.step(), Instant::now()).unwrap();
        assert_eq!(snapshot.flight.throttle, 50.0);
        assert!(!frame_loop.finished(), "zero duration never finishes");
    }

    #[test]
    fn test_fixed_loop_thread_runs_to_duration() {
        let handle = spawn_frame_loop(fixed_config(60, 1.0)).unwrap();
        let stats = handle.thread.join().unwrap();
        assert_eq!(stats.frames, 60);

        let snapshot = handle.latest_snapshot.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.frame, 60);
    }

    #[test]
    fn test_shutdown_stops_open_ended_loop() {
        let handle = spawn_frame_loop(fixed_config(60, 0.0)).unwrap();
        handle.send(ControlInput::ToggleEngine).unwrap();
        let stats = handle.shutdown().unwrap();
        assert_eq!(stats.failed, 0);
    }

    #[test]
    fn test_invalid_config_does_not_spawn() {
        let mut config = fixed_config(60, 1.0);
        config.sim.base_pressure = -1.0;
        assert!(matches!(
            spawn_frame_loop(config),
            Err(FrameLoopError::Sim(SimError::InvalidConfig(_)))
        ));
    }
}
