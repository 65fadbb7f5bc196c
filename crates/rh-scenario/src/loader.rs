//! CSV command-script loader.
//!
//! # CSV format
//!
//! One row per command.  The header names four columns; commands that need
//! fewer leave the trailing ones empty or omit them.  Lines starting with `#`
//! are comments and surrounding whitespace is ignored.
//!
//! ```csv
//! command,name,a,b
//! stop,Central
//! taxi,T1,Central,2
//! passenger,ann,Central,Airport
//! route,T1,Airport Central
//! ride,T1
//! board,T1,bob
//! ```
//!
//! | `command`   | `name`      | `a`                          | `b`          |
//! |-------------|-------------|------------------------------|--------------|
//! | `stop`      | stop name   |                              |              |
//! | `taxi`      | taxi number | start stop                   | capacity     |
//! | `passenger` | name        | origin stop                  | destination  |
//! | `route`     | taxi number | stop names, space-separated  |              |
//! | `ride`, `advance`, `pickup`, `dropoff` | taxi number |   |              |
//! | `board`     | taxi number | passenger name               |              |

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Command, ScenarioError, ScenarioResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScriptRecord {
    command: String,
    name:    String,
    #[serde(default)]
    a:       Option<String>,
    #[serde(default)]
    b:       Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a command script from a CSV file.
pub fn load_script_csv(path: &Path) -> ScenarioResult<Vec<Command>> {
    let file = std::fs::File::open(path)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Record numbers in errors count data rows from 1, skipping the header and
/// comment lines.
pub fn load_script_reader<R: Read>(reader: R) -> ScenarioResult<Vec<Command>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    csv_reader
        .deserialize::<ScriptRecord>()
        .enumerate()
        .map(|(i, result)| {
            let record = i + 1;
            let row = result.map_err(|e| ScenarioError::Parse { record, message: e.to_string() })?;
            parse_command(row).map_err(|message| ScenarioError::Parse { record, message })
        })
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_command(row: ScriptRecord) -> Result<Command, String> {
    let ScriptRecord { command, name, a, b } = row;

    let cmd = match command.to_ascii_lowercase().as_str() {
        "stop" => Command::AddStop { name },
        "taxi" => Command::AddTaxi {
            number:   name,
            start:    required(a, "start stop")?,
            capacity: parse_capacity(&required(b, "capacity")?)?,
        },
        "passenger" => Command::AddPassenger {
            name,
            origin:      required(a, "origin stop")?,
            destination: required(b, "destination stop")?,
        },
        "route" => {
            let stops: Vec<String> = required(a, "route stops")?
                .split_whitespace()
                .map(str::to_owned)
                .collect();
            Command::AppendRoute { taxi: name, stops }
        }
        "ride"    => Command::Ride { taxi: name },
        "advance" => Command::Advance { taxi: name },
        "pickup"  => Command::PickUp { taxi: name },
        "dropoff" => Command::DropOff { taxi: name },
        "board"   => Command::DirectBoard {
            taxi:      name,
            passenger: required(a, "passenger name")?,
        },
        other => {
            return Err(format!(
                "unknown command {other:?}: expected stop, taxi, passenger, route, ride, \
                 advance, pickup, dropoff, or board"
            ));
        }
    };
    Ok(cmd)
}

/// A column that must be present and non-blank for this command.
fn required(field: Option<String>, what: &str) -> Result<String, String> {
    match field {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(format!("missing {what}")),
    }
}

fn parse_capacity(s: &str) -> Result<u32, String> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid capacity {s:?}: expected a non-negative integer"))
}
