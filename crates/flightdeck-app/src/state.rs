//! State shared between the host and the frame loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use flightdeck_core::commands::ControlInput;
use flightdeck_core::state::FlightSnapshot;

use crate::frame_loop::FrameStats;

/// Messages for the frame loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A control input to apply at the next frame boundary.
    Input(ControlInput),
    /// Stop after the current frame.
    Shutdown,
}

/// Handle to a running frame loop.
pub struct FrameLoopHandle {
    pub command_tx: mpsc::Sender<LoopCommand>,
    /// Updated by the loop after every completed frame.
    pub latest_snapshot: Arc<Mutex<Option<FlightSnapshot>>>,
    pub thread: JoinHandle<FrameStats>,
}

impl FrameLoopHandle {
    pub fn send(&self, input: ControlInput) -> Result<(), mpsc::SendError<LoopCommand>> {
        self.command_tx.send(LoopCommand::Input(input))
    }

    /// Clone of the most recent snapshot, if a frame has completed.
    pub fn latest(&self) -> Option<FlightSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Ask the loop to stop and wait for it. A loop that already exited on
    /// its own just gets joined.
    pub fn shutdown(self) -> std::thread::Result<FrameStats> {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        self.thread.join()
    }
}
