//! Core types and definitions for the FLIGHTDECK simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! flight records, the aircraft roster, control inputs, snapshots, events,
//! scene components, and constants. It has no runtime of its own.

pub mod aircraft;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod environment;
pub mod events;
pub mod flight;
pub mod state;
pub mod types;
