//! Seeded synthetic scenarios.
//!
//! The generator emits plain [`Command`]s so a generated scenario can be
//! replayed, printed, or mixed with operator commands.  Stops are named
//! `S1..`, taxis `T1..`, passengers `P1..`.
//!
//! Each generation pass draws from its own child RNG, so changing the number
//! of passengers does not change which routes the taxis get.

use rh_core::SimRng;

use crate::Command;

/// Size and shape of a generated scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorParams {
    pub stops:        usize,
    pub taxis:        usize,
    /// Passengers registered before the first ride.
    pub passengers:   usize,
    /// Route entries appended to each taxi up front.
    pub route_len:    usize,
    /// Seat counts are drawn from `1..=max_capacity`.
    pub max_capacity: u32,
    /// Number of ride / pick-up steps after setup.
    pub steps:        usize,
    /// Probability that a step also registers a new passenger.
    pub arrival_rate: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            stops:        5,
            taxis:        2,
            passengers:   8,
            route_len:    6,
            max_capacity: 3,
            steps:        12,
            arrival_rate: 0.3,
        }
    }
}

/// Build a deterministic command list from `seed`.
///
/// Setup comes first (stops, taxis, passengers, routes), followed by
/// `steps` operations on random taxis: mostly `Ride`, occasionally `PickUp`.
/// Rides past the end of a route are kept; they exercise the
/// route-exhausted path.
///
/// Passengers are only generated when there are at least two stops, since
/// every generated trip has distinct origin and destination.
pub fn generate(seed: u64, params: &GeneratorParams) -> Vec<Command> {
    let mut root = SimRng::new(seed);
    let mut taxi_rng      = root.child(1);
    let mut passenger_rng = root.child(2);
    let mut route_rng     = root.child(3);
    let mut step_rng      = root.child(4);

    let stop_names: Vec<String> = (1..=params.stops).map(|i| format!("S{i}")).collect();
    let mut commands: Vec<Command> = stop_names
        .iter()
        .map(|name| Command::AddStop { name: name.clone() })
        .collect();

    if stop_names.is_empty() {
        return commands;
    }

    let taxi_numbers: Vec<String> = (1..=params.taxis).map(|i| format!("T{i}")).collect();
    for number in &taxi_numbers {
        commands.push(Command::AddTaxi {
            number:   number.clone(),
            start:    pick(&mut taxi_rng, &stop_names),
            capacity: taxi_rng.gen_range(1..=params.max_capacity.max(1)),
        });
    }

    let mut next_passenger = 1;
    for _ in 0..params.passengers {
        if let Some(cmd) = new_passenger(&mut passenger_rng, &stop_names, next_passenger) {
            commands.push(cmd);
            next_passenger += 1;
        }
    }

    for number in &taxi_numbers {
        let stops = (0..params.route_len).map(|_| pick(&mut route_rng, &stop_names)).collect();
        commands.push(Command::AppendRoute { taxi: number.clone(), stops });
    }

    if taxi_numbers.is_empty() {
        return commands;
    }

    for _ in 0..params.steps {
        let taxi = pick(&mut step_rng, &taxi_numbers);
        if step_rng.gen_bool(0.2) {
            commands.push(Command::PickUp { taxi });
        } else {
            commands.push(Command::Ride { taxi });
        }
        if step_rng.gen_bool(params.arrival_rate) {
            if let Some(cmd) = new_passenger(&mut step_rng, &stop_names, next_passenger) {
                commands.push(cmd);
                next_passenger += 1;
            }
        }
    }

    commands
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pick(rng: &mut SimRng, names: &[String]) -> String {
    rng.choose(names).cloned().unwrap_or_default()
}

/// A passenger with distinct random origin and destination, or `None` when
/// fewer than two stops exist.
fn new_passenger(rng: &mut SimRng, stops: &[String], n: usize) -> Option<Command> {
    let origin = rng.gen_range(0..stops.len());
    let destination = rng.index_other_than(stops.len(), origin)?;
    Some(Command::AddPassenger {
        name:        format!("P{n}"),
        origin:      stops[origin].clone(),
        destination: stops[destination].clone(),
    })
}
