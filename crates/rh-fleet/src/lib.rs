//! `rh-fleet` — the taxi network state machine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`stop`]        | `Stop`: name + FIFO waiting line                           |
//! | [`passenger`]   | `Passenger`, `PassengerStatus`                             |
//! | [`taxi`]        | `Taxi`: capacity, current stop, route queue, seats         |
//! | [`directory`]   | `Directory`: owns everything; advance / board / drop off   |
//! | [`report`]      | `Boarding`, `RideReport`                                   |
//! | [`invariants`]  | `Directory::check_invariants`, `InvariantViolation`        |
//!
//! # Passenger lifecycle
//!
//! ```text
//! add_passenger ──► Waiting(stop) ──advance / pick_up / direct_board──► Riding(taxi)
//!                                                                          │
//!                                            drop_off at destination ◄─────┘
//!                                                      │
//!                                                      ▼
//!                                                  Delivered
//! ```
//!
//! A passenger is in exactly one waiting line or one taxi until delivered,
//! and in neither afterwards.  Boarding admits strictly from the front of a
//! stop's line and stops when the taxi is full.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the name lookup tables.    |
//! | `serde`   | Serde derives on ids and configuration (via `rh-core`).  |

pub mod directory;
pub mod invariants;
pub mod passenger;
pub mod report;
pub mod stop;
pub mod taxi;


pub use directory::Directory;
pub use invariants::InvariantViolation;
pub use passenger::{Passenger, PassengerStatus};
pub use report::{Boarding, RideReport};
pub use stop::Stop;
pub use taxi::Taxi;
