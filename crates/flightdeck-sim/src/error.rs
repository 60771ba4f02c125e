//! Errors surfaced by the flight engine.
//!
//! Flight math itself never fails; everything here is about configuration
//! or the host's scene not holding what the engine was told it would.

use thiserror::Error;

use flightdeck_core::aircraft::AircraftKind;
use flightdeck_core::enums::DetailLevel;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("aircraft {aircraft:?} is not available at detail level {detail:?}")]
    AircraftNotInRoster {
        aircraft: AircraftKind,
        detail: DetailLevel,
    },
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),
    #[error("no aircraft entity bound to the flight engine")]
    NoAircraftBound,
    #[error("aircraft transform unavailable: {0}")]
    MissingTransform(#[from] hecs::QueryOneError),
}
