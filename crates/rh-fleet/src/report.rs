//! Outcome records returned by taxi operations.

use rh_core::{PassengerId, StopId, TaxiId};

/// What happened when a taxi boarded passengers at a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boarding {
    pub taxi: TaxiId,
    pub stop: StopId,
    /// Free seats before anyone boarded.
    pub free_seats: usize,
    /// Admitted passengers, in the order they were waiting.
    pub boarded: Vec<PassengerId>,
    /// Passengers left at the stop, in the order they are waiting.
    pub still_waiting: Vec<PassengerId>,
}

impl Boarding {
    /// Everyone who was waiting when boarding began.
    ///
    /// Admission is strictly from the front of the line, so this is the
    /// boarded passengers followed by the ones left behind.
    pub fn waiting_on_arrival(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.boarded.iter().chain(self.still_waiting.iter()).copied()
    }
}

/// The harness "move taxi" step: advance, board, then drop off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideReport {
    pub boarding: Boarding,
    /// Passengers whose destination was the arrival stop.  They have left
    /// the network.
    pub dropped: Vec<PassengerId>,
}

impl RideReport {
    #[inline]
    pub fn stop(&self) -> StopId {
        self.boarding.stop
    }
}
