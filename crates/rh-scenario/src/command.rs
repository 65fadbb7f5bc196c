//! Operator commands and how they are applied to a directory.

use rh_core::{FleetResult, PassengerId, StopId, TaxiId};
use rh_fleet::{Boarding, Directory, RideReport};
use tracing::debug;

use crate::{ScenarioError, ScenarioResult};

/// One operator action.
///
/// Entities are named the way an operator names them (stop names, taxi
/// numbers, passenger names); [`Command::apply`] resolves the names against
/// the directory at the time the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddStop {
        name: String,
    },
    AddTaxi {
        number:   String,
        start:    String,
        capacity: u32,
    },
    AddPassenger {
        name:        String,
        origin:      String,
        destination: String,
    },
    /// Append stops to the end of a taxi's route, in order.
    AppendRoute {
        taxi:  String,
        stops: Vec<String>,
    },
    /// Advance, board, and drop off: the menu's "move taxi".
    Ride {
        taxi: String,
    },
    /// Advance and board only.
    Advance {
        taxi: String,
    },
    /// Board at the current stop without moving.
    PickUp {
        taxi: String,
    },
    DropOff {
        taxi: String,
    },
    /// Seat a named waiting passenger, bypassing FIFO order.
    DirectBoard {
        taxi:      String,
        passenger: String,
    },
}

/// The successful result of one [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    StopAdded(StopId),
    TaxiAdded(TaxiId),
    PassengerAdded(PassengerId),
    RouteExtended {
        taxi:      TaxiId,
        route_len: usize,
    },
    Rode(RideReport),
    Advanced(Boarding),
    PickedUp(Boarding),
    DroppedOff {
        taxi:    TaxiId,
        dropped: Vec<PassengerId>,
    },
    Boarded {
        taxi:      TaxiId,
        passenger: PassengerId,
    },
}

impl Command {
    /// Apply the command.  On `Err` the directory is unchanged.
    pub fn apply(&self, dir: &mut Directory) -> FleetResult<Outcome> {
        match self {
            Command::AddStop { name } => dir.add_stop(name).map(Outcome::StopAdded),

            Command::AddTaxi { number, start, capacity } => {
                dir.add_taxi(number, start, *capacity).map(Outcome::TaxiAdded)
            }

            Command::AddPassenger { name, origin, destination } => {
                dir.add_passenger(name, origin, destination).map(Outcome::PassengerAdded)
            }

            Command::AppendRoute { taxi, stops } => {
                let taxi = dir.taxi_id(taxi)?;
                let route_len = dir.append_route(taxi, stops)?;
                Ok(Outcome::RouteExtended { taxi, route_len })
            }

            Command::Ride { taxi } => {
                let taxi = dir.taxi_id(taxi)?;
                dir.ride(taxi).map(Outcome::Rode)
            }

            Command::Advance { taxi } => {
                let taxi = dir.taxi_id(taxi)?;
                dir.advance(taxi).map(Outcome::Advanced)
            }

            Command::PickUp { taxi } => {
                let taxi = dir.taxi_id(taxi)?;
                Ok(Outcome::PickedUp(dir.pick_up(taxi)))
            }

            Command::DropOff { taxi } => {
                let taxi = dir.taxi_id(taxi)?;
                let dropped = dir.drop_off(taxi);
                Ok(Outcome::DroppedOff { taxi, dropped })
            }

            Command::DirectBoard { taxi, passenger } => {
                let taxi = dir.taxi_id(taxi)?;
                let passenger = dir.passenger_id(passenger)?;
                dir.direct_board(taxi, passenger)?;
                Ok(Outcome::Boarded { taxi, passenger })
            }
        }
    }

    /// The script keyword for this command (first CSV column).
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::AddStop { .. }      => "stop",
            Command::AddTaxi { .. }      => "taxi",
            Command::AddPassenger { .. } => "passenger",
            Command::AppendRoute { .. }  => "route",
            Command::Ride { .. }         => "ride",
            Command::Advance { .. }      => "advance",
            Command::PickUp { .. }       => "pickup",
            Command::DropOff { .. }      => "dropoff",
            Command::DirectBoard { .. }  => "board",
        }
    }
}

/// Apply every command in order, collecting each result.
///
/// A failed command does not stop the run: the operator's error is reported
/// and the next command proceeds, exactly as at the interactive menu.
pub fn run_script(dir: &mut Directory, commands: &[Command]) -> Vec<FleetResult<Outcome>> {
    commands
        .iter()
        .map(|cmd| {
            let result = cmd.apply(dir);
            if let Err(e) = &result {
                debug!(command = cmd.as_str(), error = %e, "command rejected");
            }
            result
        })
        .collect()
}

/// Apply every command in order, stopping at the first failure.
///
/// Used where a script is expected to be fully valid (fixtures, generated
/// setup).  Commands before the failing one stay applied.
pub fn replay(dir: &mut Directory, commands: &[Command]) -> ScenarioResult<Vec<Outcome>> {
    commands
        .iter()
        .enumerate()
        .map(|(index, cmd)| {
            cmd.apply(dir).map_err(|source| ScenarioError::Command {
                index,
                command: cmd.as_str(),
                source,
            })
        })
        .collect()
}
