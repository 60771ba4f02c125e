//! Per-frame systems, run by the engine in a fixed order.

pub mod aerodynamics;
pub mod autopilot;
pub mod controls;
pub mod fuel;
pub mod instruments;
pub mod kinematics;
pub mod snapshot;
