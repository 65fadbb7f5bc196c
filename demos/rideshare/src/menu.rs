//! The interactive operator menu.
//!
//! Every action is turned into a [`Command`] and applied through
//! [`Command::apply`], so the menu and the script runner share one code path.
//! A rejected action prints the error and returns to the menu.

use std::io::{self, BufRead, Write};

use rh_fleet::Directory;
use rh_scenario::Command;
use tracing::warn;

use crate::render;

const MENU: &str = "\
Choose an option:
  1) List taxis
  2) List passengers
  3) List stops
  4) Add taxi
  5) Add passenger
  6) Add stop
  7) Update taxi route
  8) Move taxi
  9) Pick up at current stop
 10) Board a specific passenger
 11) Drop off
  0) Exit";

/// Run the menu until the operator exits or input ends.
pub fn run<R: BufRead, W: Write>(dir: &mut Directory, input: R, out: &mut W) -> io::Result<()> {
    let mut prompt = Prompt { input };
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt.line(out, "> ")? else {
            return Ok(());
        };
        let command = match choice.as_str() {
            "0" | "exit" | "quit" => return Ok(()),
            "1" => {
                render::taxis(dir, out)?;
                continue;
            }
            "2" => {
                render::passengers(dir, out)?;
                continue;
            }
            "3" => {
                render::stops(dir, out)?;
                continue;
            }
            "4" => read_taxi(dir, &mut prompt, out)?,
            "5" => read_passenger(&mut prompt, out)?,
            "6" => prompt.line(out, "Stop name: ")?.map(|name| Command::AddStop { name }),
            "7" => read_route(&mut prompt, out)?,
            "8" => prompt.line(out, "Taxi number: ")?.map(|taxi| Command::Ride { taxi }),
            "9" => prompt.line(out, "Taxi number: ")?.map(|taxi| Command::PickUp { taxi }),
            "10" => read_direct_board(&mut prompt, out)?,
            "11" => prompt.line(out, "Taxi number: ")?.map(|taxi| Command::DropOff { taxi }),
            other => {
                writeln!(out, "Unknown option {other:?}.")?;
                continue;
            }
        };
        let Some(command) = command else {
            return Ok(());
        };
        execute(dir, &command, out)?;
    }
}

/// Apply one command and print what happened.
pub fn execute<W: Write>(dir: &mut Directory, command: &Command, out: &mut W) -> io::Result<()> {
    match command.apply(dir) {
        Ok(outcome) => render::outcome(dir, &outcome, out)?,
        Err(e) => {
            warn!(command = command.as_str(), error = %e, "operator command failed");
            writeln!(out, "Error: {e}")?;
        }
    }
    if cfg!(debug_assertions)
        && let Err(v) = dir.check_invariants(false)
    {
        warn!(violation = %v, "directory invariant violated");
    }
    Ok(())
}

// ── Form readers ──────────────────────────────────────────────────────────────
//
// Each returns `Ok(None)` when input ends part-way through the form.

fn read_taxi<R: BufRead, W: Write>(
    dir:    &Directory,
    prompt: &mut Prompt<R>,
    out:    &mut W,
) -> io::Result<Option<Command>> {
    let Some(number) = prompt.line(out, "Taxi number: ")? else {
        return Ok(None);
    };
    let Some(start) = prompt.line(out, "Starting stop: ")? else {
        return Ok(None);
    };
    let default = dir.config().default_capacity;
    let capacity = loop {
        let Some(text) = prompt.raw_line(out, &format!("Capacity [{default}]: "))? else {
            return Ok(None);
        };
        let text = text.trim();
        if text.is_empty() {
            break default;
        }
        match text.parse::<u32>() {
            Ok(n) => break n,
            Err(_) => writeln!(out, "Capacity must be a whole number.")?,
        }
    };
    Ok(Some(Command::AddTaxi { number, start, capacity }))
}

fn read_passenger<R: BufRead, W: Write>(
    prompt: &mut Prompt<R>,
    out:    &mut W,
) -> io::Result<Option<Command>> {
    let Some(name) = prompt.line(out, "Passenger name: ")? else {
        return Ok(None);
    };
    let Some(origin) = prompt.line(out, "Starting stop: ")? else {
        return Ok(None);
    };
    let Some(destination) = prompt.line(out, "Destination stop: ")? else {
        return Ok(None);
    };
    Ok(Some(Command::AddPassenger { name, origin, destination }))
}

/// Stop names are read one per line (or several per line) until `end`.
fn read_route<R: BufRead, W: Write>(
    prompt: &mut Prompt<R>,
    out:    &mut W,
) -> io::Result<Option<Command>> {
    let Some(taxi) = prompt.line(out, "Taxi number: ")? else {
        return Ok(None);
    };
    writeln!(out, "Enter stops to append, then 'end':")?;
    let mut stops = Vec::new();
    'read: loop {
        let Some(line) = prompt.raw_line(out, "  stop: ")? else {
            return Ok(None);
        };
        for word in line.split_whitespace() {
            if word == "end" {
                break 'read;
            }
            stops.push(word.to_owned());
        }
    }
    Ok(Some(Command::AppendRoute { taxi, stops }))
}

fn read_direct_board<R: BufRead, W: Write>(
    prompt: &mut Prompt<R>,
    out:    &mut W,
) -> io::Result<Option<Command>> {
    let Some(taxi) = prompt.line(out, "Taxi number: ")? else {
        return Ok(None);
    };
    let Some(passenger) = prompt.line(out, "Passenger name: ")? else {
        return Ok(None);
    };
    Ok(Some(Command::DirectBoard { taxi, passenger }))
}

// ── Prompt ────────────────────────────────────────────────────────────────────

struct Prompt<R> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    /// Next line, untrimmed apart from the line ending.  `None` at end of input.
    fn raw_line<W: Write>(&mut self, out: &mut W, label: &str) -> io::Result<Option<String>> {
        write!(out, "{label}")?;
        out.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(len);
        Ok(Some(buf))
    }

    /// Next non-blank line, trimmed.  Blank lines re-prompt.
    fn line<W: Write>(&mut self, out: &mut W, label: &str) -> io::Result<Option<String>> {
        loop {
            match self.raw_line(out, label)? {
                None => return Ok(None),
                Some(s) if s.trim().is_empty() => continue,
                Some(s) => return Ok(Some(s.trim().to_owned())),
            }
        }
    }
}
