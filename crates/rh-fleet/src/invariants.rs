//! Whole-directory consistency checks.

use rh_core::{PassengerId, StopId, TaxiId};
use thiserror::Error;

use crate::{Directory, PassengerStatus};

/// The first breach found by [`Directory::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{taxi} carries {boarded} passengers but has {capacity} seats")]
    OverCapacity {
        taxi:     TaxiId,
        boarded:  usize,
        capacity: u32,
    },

    #[error("{passenger} appears in {count} waiting lines or seats")]
    Duplicated {
        passenger: PassengerId,
        count:     usize,
    },

    #[error("{passenger} is {status} but is not where its status says")]
    Misplaced {
        passenger: PassengerId,
        status:    &'static str,
    },

    #[error("{passenger} is riding {taxi}, which is already at its destination {stop}")]
    Overdue {
        passenger: PassengerId,
        taxi:      TaxiId,
        stop:      StopId,
    },
}

impl Directory {
    /// Verify the capacity and exclusivity invariants.
    ///
    /// - every taxi carries at most `capacity` passengers;
    /// - every active passenger sits in exactly one place, the one its status
    ///   names (a stop's waiting line, or a taxi's seats);
    /// - a delivered passenger sits nowhere.
    ///
    /// A rider whose destination equals the taxi's current stop is reported
    /// as [`InvariantViolation::Overdue`] only when `strict` is set: between
    /// `advance` and `drop_off` that state is expected.
    pub fn check_invariants(&self, strict: bool) -> Result<(), InvariantViolation> {
        let mut seen = vec![0usize; self.passengers.len()];
        let mut placed_ok = vec![false; self.passengers.len()];

        for (i, stop) in self.stops.iter().enumerate() {
            let here = PassengerStatus::Waiting(StopId::from_index(i));
            for &p in stop.waiting() {
                seen[p.index()] += 1;
                placed_ok[p.index()] |= self.passengers[p.index()].status() == here;
            }
        }

        for (i, taxi) in self.taxis.iter().enumerate() {
            let id = TaxiId::from_index(i);
            if taxi.boarded().len() > taxi.capacity() as usize {
                return Err(InvariantViolation::OverCapacity {
                    taxi:     id,
                    boarded:  taxi.boarded().len(),
                    capacity: taxi.capacity(),
                });
            }
            for &p in taxi.boarded() {
                seen[p.index()] += 1;
                let passenger = &self.passengers[p.index()];
                placed_ok[p.index()] |= passenger.status() == PassengerStatus::Riding(id);
                if strict && passenger.destination() == taxi.current_stop() {
                    return Err(InvariantViolation::Overdue {
                        passenger: p,
                        taxi:      id,
                        stop:      taxi.current_stop(),
                    });
                }
            }
        }

        for (i, passenger) in self.passengers.iter().enumerate() {
            let id = PassengerId::from_index(i);
            if seen[i] > 1 {
                return Err(InvariantViolation::Duplicated { passenger: id, count: seen[i] });
            }
            let placed = match (passenger.is_delivered(), seen[i]) {
                (true, 0)  => true,
                (false, 1) => placed_ok[i],
                _          => false,
            };
            if !placed {
                return Err(InvariantViolation::Misplaced {
                    passenger: id,
                    status:    passenger.status().as_str(),
                });
            }
        }

        Ok(())
    }
}
