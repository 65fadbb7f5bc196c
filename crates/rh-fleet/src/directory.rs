//! The `Directory`: owner of every stop, taxi, and passenger.
//!
//! Entities live in three arenas indexed by their typed ids.  Entities refer
//! to each other only by id, so the directory is the single owner and a
//! passenger's stop references can never dangle.  Names resolve to ids
//! through one lookup table per entity kind.
//!
//! All mutating operations validate first and mutate second: an `Err` return
//! means nothing changed.

use rh_core::{
    DegenerateTripPolicy, FleetConfig, FleetError, FleetResult, PassengerId, StopId, TaxiId,
};
use tracing::{debug, info};

use crate::{Boarding, Passenger, RideReport, Stop, Taxi};

#[cfg(feature = "fx-hash")]
type NameIndex<V> = rustc_hash::FxHashMap<String, V>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex<V> = std::collections::HashMap<String, V>;

/// Registry and state machine for the whole taxi network.
///
/// # Panics
///
/// Methods taking a `TaxiId`, `StopId`, or `PassengerId` index directly into
/// the arenas and panic on an id that this directory did not hand out.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    config: FleetConfig,

    pub(crate) stops:      Vec<Stop>,
    pub(crate) taxis:      Vec<Taxi>,
    pub(crate) passengers: Vec<Passenger>,

    stop_index:      NameIndex<StopId>,
    taxi_index:      NameIndex<TaxiId>,
    /// Active passengers only.  A delivered passenger's name is released.
    passenger_index: NameIndex<PassengerId>,

    delivered: usize,
}

impl Directory {
    pub fn new(config: FleetConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[inline]
    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    /// Register a stop, or return the existing one with the same name.
    ///
    /// Explicit creation always succeeds regardless of [`StopPolicy`]; the
    /// policy only governs stops named implicitly by other commands.
    ///
    /// [`StopPolicy`]: rh_core::StopPolicy
    pub fn add_stop(&mut self, name: &str) -> FleetResult<StopId> {
        let name = non_empty(name, "stop name")?;
        if let Some(&id) = self.stop_index.get(name) {
            return Ok(id);
        }
        let id = StopId::from_index(self.stops.len());
        self.stops.push(Stop::new(name));
        self.stop_index.insert(name.to_owned(), id);
        info!(stop = name, %id, "stop created");
        Ok(id)
    }

    /// Look up a stop by name.
    pub fn stop_id(&self, name: &str) -> FleetResult<StopId> {
        self.stop_index
            .get(name.trim())
            .copied()
            .ok_or_else(|| FleetError::UnknownStop(name.trim().to_owned()))
    }

    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    #[inline]
    pub fn stop_name(&self, id: StopId) -> &str {
        self.stops[id.index()].name()
    }

    /// All stops in creation order.
    pub fn stops(&self) -> impl ExactSizeIterator<Item = (StopId, &Stop)> + '_ {
        self.stops.iter().enumerate().map(|(i, s)| (StopId::from_index(i), s))
    }

    /// Fail unless `name` resolves to a stop or the policy allows creating it.
    fn check_stop_name(&self, name: &str) -> FleetResult<()> {
        let name = non_empty(name, "stop name")?;
        if self.config.creates_stops() || self.stop_index.contains_key(name) {
            Ok(())
        } else {
            Err(FleetError::UnknownStop(name.to_owned()))
        }
    }

    /// Resolve a name already accepted by [`check_stop_name`](Self::check_stop_name).
    fn resolve_stop(&mut self, name: &str) -> FleetResult<StopId> {
        if self.config.creates_stops() {
            self.add_stop(name)
        } else {
            self.stop_id(name)
        }
    }

    // ── Taxis ─────────────────────────────────────────────────────────────

    /// Register a taxi at stop `start` with `capacity` seats.
    pub fn add_taxi(&mut self, number: &str, start: &str, capacity: u32) -> FleetResult<TaxiId> {
        let number = non_empty(number, "taxi number")?;
        if self.taxi_index.contains_key(number) {
            return Err(FleetError::DuplicateTaxi(number.to_owned()));
        }
        if capacity == 0 {
            return Err(FleetError::ZeroCapacity(number.to_owned()));
        }
        self.check_stop_name(start)?;

        let start = self.resolve_stop(start)?;
        let id = TaxiId::from_index(self.taxis.len());
        self.taxis.push(Taxi::new(number, start, capacity));
        self.taxi_index.insert(number.to_owned(), id);
        info!(taxi = number, stop = self.stop_name(start), capacity, "taxi created");
        Ok(id)
    }

    /// Look up a taxi by number.
    pub fn taxi_id(&self, number: &str) -> FleetResult<TaxiId> {
        self.taxi_index
            .get(number.trim())
            .copied()
            .ok_or_else(|| FleetError::UnknownTaxi(number.trim().to_owned()))
    }

    #[inline]
    pub fn taxi(&self, id: TaxiId) -> &Taxi {
        &self.taxis[id.index()]
    }

    /// All taxis in creation order.
    pub fn taxis(&self) -> impl ExactSizeIterator<Item = (TaxiId, &Taxi)> + '_ {
        self.taxis.iter().enumerate().map(|(i, t)| (TaxiId::from_index(i), t))
    }

    // ── Passengers ────────────────────────────────────────────────────────

    /// Register a passenger waiting at `origin` for a ride to `destination`.
    ///
    /// A passenger whose origin equals its destination is handled by
    /// [`FleetConfig::degenerate_trip`]: rejected with
    /// [`FleetError::DegenerateTrip`], or recorded as already delivered.
    pub fn add_passenger(
        &mut self,
        name:        &str,
        origin:      &str,
        destination: &str,
    ) -> FleetResult<PassengerId> {
        let name = non_empty(name, "passenger name")?;
        if self.passenger_index.contains_key(name) {
            return Err(FleetError::DuplicatePassenger(name.to_owned()));
        }
        self.check_stop_name(origin)?;
        self.check_stop_name(destination)?;
        let degenerate = origin.trim() == destination.trim();
        if degenerate && self.config.degenerate_trip == DegenerateTripPolicy::Reject {
            return Err(FleetError::DegenerateTrip(name.to_owned()));
        }

        let origin      = self.resolve_stop(origin)?;
        let destination = self.resolve_stop(destination)?;
        let id = PassengerId::from_index(self.passengers.len());

        if degenerate {
            self.passengers.push(Passenger::delivered(name, origin, destination));
            self.delivered += 1;
            info!(passenger = name, stop = self.stop_name(origin), "passenger already at destination");
            return Ok(id);
        }

        self.passengers.push(Passenger::waiting(name, origin, destination));
        self.stops[origin.index()].add_waiting(id);
        self.passenger_index.insert(name.to_owned(), id);
        info!(
            passenger = name,
            from = self.stop_name(origin),
            to = self.stop_name(destination),
            "passenger waiting"
        );
        Ok(id)
    }

    /// Look up an active (not yet delivered) passenger by name.
    pub fn passenger_id(&self, name: &str) -> FleetResult<PassengerId> {
        self.passenger_index
            .get(name.trim())
            .copied()
            .ok_or_else(|| FleetError::UnknownPassenger(name.trim().to_owned()))
    }

    #[inline]
    pub fn passenger(&self, id: PassengerId) -> &Passenger {
        &self.passengers[id.index()]
    }

    /// Active passengers (waiting or riding) in creation order.
    pub fn passengers(&self) -> impl Iterator<Item = (PassengerId, &Passenger)> + '_ {
        self.all_passengers().filter(|(_, p)| !p.is_delivered())
    }

    /// Every passenger ever registered, delivered ones included.
    pub fn all_passengers(&self) -> impl ExactSizeIterator<Item = (PassengerId, &Passenger)> + '_ {
        self.passengers.iter().enumerate().map(|(i, p)| (PassengerId::from_index(i), p))
    }

    /// Number of passengers that have reached their destination.
    #[inline]
    pub fn delivered_count(&self) -> usize {
        self.delivered
    }

    // ── Routes ────────────────────────────────────────────────────────────

    /// Append `stop` to the end of `taxi`'s route.
    ///
    /// Repeats of the current stop or of earlier entries are allowed.
    pub fn append_route_stop(&mut self, taxi: TaxiId, stop: StopId) {
        self.taxis[taxi.index()].push_route(stop);
        debug!(taxi = self.taxis[taxi.index()].number(), stop = self.stop_name(stop), "route stop appended");
    }

    /// Append the named stops to `taxi`'s route, in order.
    ///
    /// Under `StopPolicy::RequireExisting` every name is checked before any
    /// is appended.  Returns the new route length.
    pub fn append_route<S: AsRef<str>>(&mut self, taxi: TaxiId, stops: &[S]) -> FleetResult<usize> {
        for name in stops {
            self.check_stop_name(name.as_ref())?;
        }
        for name in stops {
            let stop = self.resolve_stop(name.as_ref())?;
            self.append_route_stop(taxi, stop);
        }
        Ok(self.taxis[taxi.index()].route().len())
    }

    // ── Taxi operations ───────────────────────────────────────────────────

    /// Move `taxi` to the next stop on its route and board waiting passengers
    /// there.
    ///
    /// Returns [`FleetError::RouteExhausted`] without changing anything when
    /// the route is empty.
    pub fn advance(&mut self, taxi: TaxiId) -> FleetResult<Boarding> {
        let t = &mut self.taxis[taxi.index()];
        let Some(stop) = t.move_to_next() else {
            debug!(taxi = t.number(), "advance rejected: route exhausted");
            return Err(FleetError::RouteExhausted(t.number().to_owned()));
        };
        info!(taxi = self.taxis[taxi.index()].number(), stop = self.stop_name(stop), "taxi arrived");
        Ok(self.board_waiting(taxi))
    }

    /// Board waiting passengers at `taxi`'s current stop without moving.
    ///
    /// An empty stop or a full taxi boards nobody; neither is an error.
    pub fn pick_up(&mut self, taxi: TaxiId) -> Boarding {
        self.board_waiting(taxi)
    }

    /// Remove every rider whose destination is `taxi`'s current stop.
    ///
    /// Dropped passengers leave the network: they are marked delivered, their
    /// names are released, and they are not returned to any waiting line.
    pub fn drop_off(&mut self, taxi: TaxiId) -> Vec<PassengerId> {
        let t = &mut self.taxis[taxi.index()];
        let here = t.current_stop();
        let passengers = &self.passengers;
        let dropped = t.unseat_where(|p| passengers[p.index()].destination() == here);

        for &p in &dropped {
            let passenger = &mut self.passengers[p.index()];
            passenger.deliver();
            self.passenger_index.remove(passenger.name());
            debug!(taxi = t.number(), passenger = passenger.name(), "passenger dropped off");
        }
        self.delivered += dropped.len();
        dropped
    }

    /// Seat a specific waiting passenger in `taxi`, bypassing FIFO order.
    ///
    /// The passenger must be waiting at the taxi's current stop and the taxi
    /// must have a free seat.  The same capacity and exclusivity rules as
    /// automatic boarding apply.
    pub fn direct_board(&mut self, taxi: TaxiId, passenger: PassengerId) -> FleetResult<()> {
        let t = &mut self.taxis[taxi.index()];
        let p = &mut self.passengers[passenger.index()];

        if t.is_full() {
            debug!(taxi = t.number(), passenger = p.name(), "direct board rejected: taxi full");
            return Err(FleetError::TaxiFull {
                taxi:      t.number().to_owned(),
                passenger: p.name().to_owned(),
                capacity:  t.capacity(),
            });
        }
        if p.current_stop() != Some(t.current_stop()) {
            debug!(taxi = t.number(), passenger = p.name(), "direct board rejected: not at stop");
            return Err(FleetError::PassengerNotAtStop {
                passenger: p.name().to_owned(),
                taxi:      t.number().to_owned(),
            });
        }

        let removed = self.stops[t.current_stop().index()].remove_waiting(passenger);
        debug_assert!(removed, "waiting status without a waiting-line entry");
        p.board(taxi);
        t.seat(&[passenger]);
        debug!(taxi = t.number(), passenger = p.name(), "passenger boarded directly");
        Ok(())
    }

    /// The harness "move taxi" step: [`advance`](Self::advance) then
    /// [`drop_off`](Self::drop_off).
    pub fn ride(&mut self, taxi: TaxiId) -> FleetResult<RideReport> {
        let boarding = self.advance(taxi)?;
        let dropped  = self.drop_off(taxi);
        Ok(RideReport { boarding, dropped })
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Admit passengers from the front of the current stop's line until the
    /// taxi is full or the line is empty.
    fn board_waiting(&mut self, taxi: TaxiId) -> Boarding {
        let t = &mut self.taxis[taxi.index()];
        let stop_id = t.current_stop();
        let stop = &mut self.stops[stop_id.index()];
        let free_seats = t.free_seats();

        let boarded = stop.take_front(free_seats);
        for &p in &boarded {
            self.passengers[p.index()].board(taxi);
            debug!(taxi = t.number(), passenger = self.passengers[p.index()].name(), "passenger boarded");
        }
        t.seat(&boarded);

        Boarding {
            taxi,
            stop: stop_id,
            free_seats,
            boarded,
            still_waiting: stop.waiting().to_vec(),
        }
    }
}

/// Trim `s` and reject it if nothing is left.
fn non_empty<'a>(s: &'a str, what: &'static str) -> FleetResult<&'a str> {
    let s = s.trim();
    if s.is_empty() {
        Err(FleetError::EmptyName(what))
    } else {
        Ok(s)
    }
}
