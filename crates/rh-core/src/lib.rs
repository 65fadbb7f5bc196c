//! `rh-core` — foundational types for the rideshare taxi simulation.
//!
//! This crate is a dependency of every other `rh-*` crate.  It has no `rh-*`
//! dependencies and only `rand` and `thiserror` externally, plus optional
//! `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `StopId`, `TaxiId`, `PassengerId`                     |
//! | [`config`]      | `FleetConfig`, `StopPolicy`, `DegenerateTripPolicy`   |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`error`]       | `FleetError`, `FleetResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and configuration.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DegenerateTripPolicy, FleetConfig, StopPolicy};
pub use error::{FleetError, FleetResult};
pub use ids::{PassengerId, StopId, TaxiId};
pub use rng::SimRng;
