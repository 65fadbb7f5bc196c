//! Human-readable listings and event reports.
//!
//! Everything writes to a caller-supplied `Write` so the menu can be driven
//! against an in-memory buffer.

use std::io::{self, Write};

use rh_core::PassengerId;
use rh_fleet::{Boarding, Directory, PassengerStatus, RideReport};
use rh_scenario::Outcome;

// ── Listings ──────────────────────────────────────────────────────────────────

pub fn taxis<W: Write>(dir: &Directory, out: &mut W) -> io::Result<()> {
    writeln!(out, "List of Taxis:")?;
    if dir.taxis().len() == 0 {
        return writeln!(out, "  None");
    }
    for (_, taxi) in dir.taxis() {
        writeln!(out, "Taxi {}:", taxi.number())?;
        writeln!(out, "  Capacity: {} ({} free)", taxi.capacity(), taxi.free_seats())?;
        writeln!(out, "  Passengers inside:")?;
        name_list(dir, taxi.boarded(), out)?;
        writeln!(out, "  Current stop: {}", dir.stop_name(taxi.current_stop()))?;
        let route: Vec<&str> = taxi.route().map(|s| dir.stop_name(s)).collect();
        if route.is_empty() {
            writeln!(out, "  Route: Empty")?;
        } else {
            writeln!(out, "  Route: {}", route.join(" "))?;
        }
    }
    Ok(())
}

pub fn passengers<W: Write>(dir: &Directory, out: &mut W) -> io::Result<()> {
    writeln!(out, "List of Passengers:")?;
    let mut any = false;
    for (_, p) in dir.passengers() {
        any = true;
        writeln!(out, "Passenger {}:", p.name())?;
        match p.status() {
            PassengerStatus::Waiting(stop) => {
                writeln!(out, "  Current stop: {}", dir.stop_name(stop))?
            }
            PassengerStatus::Riding(taxi) => {
                writeln!(out, "  In taxi: {}", dir.taxi(taxi).number())?
            }
            PassengerStatus::Delivered => writeln!(out, "  Delivered")?,
        }
        writeln!(out, "  Destination stop: {}", dir.stop_name(p.destination()))?;
    }
    if !any {
        writeln!(out, "  None")?;
    }
    writeln!(out, "Delivered so far: {}", dir.delivered_count())
}

pub fn stops<W: Write>(dir: &Directory, out: &mut W) -> io::Result<()> {
    writeln!(out, "List of Stops:")?;
    if dir.stops().len() == 0 {
        return writeln!(out, "  None");
    }
    for (_, stop) in dir.stops() {
        writeln!(out, "Stop {}:", stop.name())?;
        writeln!(out, "  Waiting passengers:")?;
        name_list(dir, stop.waiting(), out)?;
    }
    Ok(())
}

// ── Events ────────────────────────────────────────────────────────────────────

/// The boarding half of a move: who was waiting, free seats, who got on.
pub fn boarding<W: Write>(dir: &Directory, b: &Boarding, out: &mut W) -> io::Result<()> {
    writeln!(out, "Passengers at stop {}:", dir.stop_name(b.stop))?;
    let waiting: Vec<PassengerId> = b.waiting_on_arrival().collect();
    name_list(dir, &waiting, out)?;
    writeln!(out, "Free seats in taxi: {}", b.free_seats)?;
    for &p in &b.boarded {
        writeln!(out, "Passenger {} boarded the taxi.", dir.passenger(p).name())?;
    }
    Ok(())
}

pub fn dropped<W: Write>(dir: &Directory, dropped: &[PassengerId], out: &mut W) -> io::Result<()> {
    for &p in dropped {
        writeln!(out, "Passenger {} has been dropped off.", dir.passenger(p).name())?;
    }
    Ok(())
}

pub fn ride<W: Write>(dir: &Directory, report: &RideReport, out: &mut W) -> io::Result<()> {
    boarding(dir, &report.boarding, out)?;
    dropped(dir, &report.dropped, out)?;
    writeln!(
        out,
        "Taxi {} moved to {}",
        dir.taxi(report.boarding.taxi).number(),
        dir.stop_name(report.stop())
    )
}

/// One line (or block) per successful command.
pub fn outcome<W: Write>(dir: &Directory, outcome: &Outcome, out: &mut W) -> io::Result<()> {
    match outcome {
        Outcome::StopAdded(id) => writeln!(out, "Stop {} is registered.", dir.stop_name(*id)),
        Outcome::TaxiAdded(id) => writeln!(out, "Taxi {} is in service.", dir.taxi(*id).number()),
        Outcome::PassengerAdded(id) => {
            let p = dir.passenger(*id);
            if p.is_delivered() {
                writeln!(out, "Passenger {} is already at the destination.", p.name())
            } else {
                writeln!(out, "Passenger {} is waiting.", p.name())
            }
        }
        Outcome::RouteExtended { taxi, route_len } => writeln!(
            out,
            "Taxi {} route now has {route_len} stop(s).",
            dir.taxi(*taxi).number()
        ),
        Outcome::Rode(report) => ride(dir, report, out),
        Outcome::Advanced(b) => {
            boarding(dir, b, out)?;
            writeln!(out, "Taxi {} moved to {}", dir.taxi(b.taxi).number(), dir.stop_name(b.stop))
        }
        Outcome::PickedUp(b) => boarding(dir, b, out),
        Outcome::DroppedOff { taxi, dropped: ids } => {
            if ids.is_empty() {
                writeln!(out, "Nobody left taxi {}.", dir.taxi(*taxi).number())
            } else {
                dropped(dir, ids, out)
            }
        }
        Outcome::Boarded { passenger, .. } => {
            writeln!(out, "Passenger {} boarded the taxi.", dir.passenger(*passenger).name())
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn name_list<W: Write>(dir: &Directory, ids: &[PassengerId], out: &mut W) -> io::Result<()> {
    if ids.is_empty() {
        return writeln!(out, "    None");
    }
    for &p in ids {
        writeln!(out, "    - {}", dir.passenger(p).name())?;
    }
    Ok(())
}
