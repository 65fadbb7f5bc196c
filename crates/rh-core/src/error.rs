//! Simulation error type.
//!
//! Every variant is recoverable: the harness reports the `Display` form and
//! keeps accepting commands.  Operations validate before they mutate, so an
//! `Err` always means the directory is unchanged.

use thiserror::Error;

/// Errors surfaced by directory and taxi operations.
///
/// Entities are named by their operator-facing key (stop name, taxi number,
/// passenger name) so messages read well without a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    #[error("stop {0:?} does not exist")]
    UnknownStop(String),

    #[error("taxi {0:?} not found")]
    UnknownTaxi(String),

    #[error("passenger {0:?} not found")]
    UnknownPassenger(String),

    #[error("taxi {0:?} has no remaining route stops; it did not move")]
    RouteExhausted(String),

    #[error("taxi {taxi:?} is already full ({capacity} seats); cannot add passenger {passenger:?}")]
    TaxiFull {
        taxi:      String,
        passenger: String,
        capacity:  u32,
    },

    #[error("passenger {passenger:?} is not waiting at the current stop of taxi {taxi:?}")]
    PassengerNotAtStop {
        passenger: String,
        taxi:      String,
    },

    #[error("passenger {0:?} has the same current and destination stop")]
    DegenerateTrip(String),

    #[error("a taxi numbered {0:?} already exists")]
    DuplicateTaxi(String),

    #[error("a passenger named {0:?} is already in the network")]
    DuplicatePassenger(String),

    #[error("taxi {0:?} must have at least one seat")]
    ZeroCapacity(String),

    #[error("{0} must not be empty")]
    EmptyName(&'static str),
}

/// Shorthand result type for all `rh-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;
