//! `rh-scenario` — commands, command scripts, and synthetic scenarios.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`command`]    | `Command`, `Outcome`, `run_script`, `replay`                 |
//! | [`loader`]     | `load_script_csv`, `load_script_reader`                      |
//! | [`generator`]  | `GeneratorParams`, `generate` (seeded, deterministic)        |
//! | [`error`]      | `ScenarioError`, `ScenarioResult<T>`                         |
//!
//! A scenario is a plain `Vec<Command>`.  It can come from an operator typing
//! at the menu, from a CSV script, or from the generator; all three are
//! applied to a [`Directory`][rh_fleet::Directory] the same way.

pub mod command;
pub mod error;
pub mod generator;
pub mod loader;

#[cfg(test)]
mod tests;

pub use command::{Command, Outcome, replay, run_script};
pub use error::{ScenarioError, ScenarioResult};
pub use generator::{GeneratorParams, generate};
pub use loader::{load_script_csv, load_script_reader};
