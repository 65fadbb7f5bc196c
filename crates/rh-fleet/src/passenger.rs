//! Passengers and their trip state.

use rh_core::{StopId, TaxiId};

/// Where a passenger is right now.
///
/// Exactly one variant holds at any time, which is what keeps a passenger
/// from being both at a stop and in a taxi.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PassengerStatus {
    /// In the waiting line of this stop.
    Waiting(StopId),
    /// Occupying a seat in this taxi.
    Riding(TaxiId),
    /// Reached the destination and left the network.
    Delivered,
}

impl PassengerStatus {
    #[inline]
    pub fn is_riding(self) -> bool {
        matches!(self, PassengerStatus::Riding(_))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PassengerStatus::Waiting(_) => "waiting",
            PassengerStatus::Riding(_)  => "riding",
            PassengerStatus::Delivered  => "delivered",
        }
    }
}

/// A rider travelling from `origin` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    name:        String,
    origin:      StopId,
    destination: StopId,
    status:      PassengerStatus,
}

impl Passenger {
    /// A passenger waiting at `origin`.
    pub(crate) fn waiting(name: impl Into<String>, origin: StopId, destination: StopId) -> Self {
        Self {
            name: name.into(),
            origin,
            destination,
            status: PassengerStatus::Waiting(origin),
        }
    }

    /// A passenger whose trip is already complete.
    pub(crate) fn delivered(name: impl Into<String>, origin: StopId, destination: StopId) -> Self {
        Self {
            name: name.into(),
            origin,
            destination,
            status: PassengerStatus::Delivered,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stop the passenger was created at.
    #[inline]
    pub fn origin(&self) -> StopId {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> StopId {
        self.destination
    }

    #[inline]
    pub fn status(&self) -> PassengerStatus {
        self.status
    }

    /// The stop the passenger is waiting at, or `None` once boarded.
    #[inline]
    pub fn current_stop(&self) -> Option<StopId> {
        match self.status {
            PassengerStatus::Waiting(stop) => Some(stop),
            _ => None,
        }
    }

    #[inline]
    pub fn is_boarded(&self) -> bool {
        self.status.is_riding()
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.status == PassengerStatus::Delivered
    }

    pub(crate) fn board(&mut self, taxi: TaxiId) {
        self.status = PassengerStatus::Riding(taxi);
    }

    pub(crate) fn deliver(&mut self) {
        self.status = PassengerStatus::Delivered;
    }
}
