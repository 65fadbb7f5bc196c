//! Taxis: seat capacity, position, pending route, and the seats themselves.

use std::collections::VecDeque;

use rh_core::{PassengerId, StopId};

/// A vehicle that visits stops in route order.
///
/// A taxi is always at exactly one stop; moving to the next route entry is
/// instantaneous.  The route is consumed front to back and never replayed.
///
/// `Taxi` only tracks *which* passengers it carries.  Moving a passenger in
/// or out of a seat also changes the passenger and the stop, so those
/// transitions are driven by [`Directory`][crate::Directory], which owns all
/// three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxi {
    number:   String,
    capacity: u32,
    current:  StopId,
    route:    VecDeque<StopId>,
    boarded:  Vec<PassengerId>,
}

impl Taxi {
    pub(crate) fn new(number: impl Into<String>, start: StopId, capacity: u32) -> Self {
        Self {
            number:  number.into(),
            capacity,
            current: start,
            route:   VecDeque::new(),
            boarded: Vec::new(),
        }
    }

    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn current_stop(&self) -> StopId {
        self.current
    }

    /// Remaining route stops, next stop first.
    pub fn route(&self) -> impl ExactSizeIterator<Item = StopId> + '_ {
        self.route.iter().copied()
    }

    #[inline]
    pub fn next_stop(&self) -> Option<StopId> {
        self.route.front().copied()
    }

    /// Passengers on board, in boarding order.
    #[inline]
    pub fn boarded(&self) -> &[PassengerId] {
        &self.boarded
    }

    #[inline]
    pub fn has_passengers(&self) -> bool {
        !self.boarded.is_empty()
    }

    #[inline]
    pub fn free_seats(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.boarded.len())
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_seats() == 0
    }

    pub(crate) fn push_route(&mut self, stop: StopId) {
        self.route.push_back(stop);
    }

    /// Pop the front route entry and make it the current stop.
    ///
    /// Returns the new current stop, or `None` (and leaves the taxi where it
    /// is) when the route is empty.
    pub(crate) fn move_to_next(&mut self) -> Option<StopId> {
        let next = self.route.pop_front()?;
        self.current = next;
        Some(next)
    }

    /// Seat `passengers`.  The caller has already checked there is room.
    pub(crate) fn seat(&mut self, passengers: &[PassengerId]) {
        debug_assert!(passengers.len() <= self.free_seats(), "taxi {} over capacity", self.number);
        self.boarded.extend_from_slice(passengers);
    }

    /// Unseat every passenger for whom `arrived` is true, returning them in
    /// boarding order.  The rest keep their seats and relative order.
    pub(crate) fn unseat_where(&mut self, mut arrived: impl FnMut(PassengerId) -> bool) -> Vec<PassengerId> {
        let mut leaving = Vec::new();
        self.boarded.retain(|&p| {
            if arrived(p) {
                leaving.push(p);
                false
            } else {
                true
            }
        });
        leaving
    }
}
