//! rideshare — operator console for the taxi simulation.
//!
//! ```text
//! rideshare [--config FILE.json] [--script FILE.csv] [--generate N] [--interactive]
//! ```
//!
//! With no script and no `--generate`, the numbered operator menu runs on
//! stdin.  A script or a generated scenario is printed command by command;
//! add `--interactive` to continue at the menu afterwards.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod menu;
mod render;


use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rh_core::FleetConfig;
use rh_fleet::Directory;
use rh_scenario::{Command, GeneratorParams, generate, load_script_csv};

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Operator console for the rideshare taxi simulation.
#[derive(Parser, Debug)]
#[command(name = "rideshare")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON configuration file (stop policy, default capacity, seed)
    #[arg(long, value_name = "FILE.json")]
    config: Option<PathBuf>,

    /// CSV command script to apply before anything else
    #[arg(long, value_name = "FILE.csv")]
    script: Option<PathBuf>,

    /// Generate and apply a seeded scenario with N ride steps
    #[arg(long, value_name = "N")]
    generate: Option<usize>,

    /// Continue at the operator menu after a script or generated scenario
    #[arg(short, long)]
    interactive: bool,
}

impl Args {
    fn wants_menu(&self) -> bool {
        self.interactive || (self.script.is_none() && self.generate.is_none())
    }
}

fn load_config(path: &Path) -> Result<FleetConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => FleetConfig::default(),
    };
    info!(
        stop_policy = config.stop_policy.as_str(),
        degenerate_trip = config.degenerate_trip.as_str(),
        default_capacity = config.default_capacity,
        seed = config.seed,
        "configuration loaded"
    );
    let seed = config.seed;
    let mut dir = Directory::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &args.script {
        let commands = load_script_csv(path)
            .with_context(|| format!("loading script {}", path.display()))?;
        writeln!(out, "=== script {} ({} commands) ===", path.display(), commands.len())?;
        run_commands(&mut dir, &commands, &mut out)?;
    }

    if let Some(steps) = args.generate {
        let params = GeneratorParams { steps, ..Default::default() };
        let commands = generate(seed, &params);
        writeln!(out, "=== generated scenario: seed {seed}, {} commands ===", commands.len())?;
        run_commands(&mut dir, &commands, &mut out)?;
    }

    if args.wants_menu() {
        menu::run(&mut dir, io::stdin().lock(), &mut out)?;
    } else {
        summary(&dir, &mut out)?;
    }
    Ok(())
}

fn run_commands<W: Write>(dir: &mut Directory, commands: &[Command], out: &mut W) -> Result<()> {
    for (i, command) in commands.iter().enumerate() {
        writeln!(out, "[{}] {}", i + 1, command.as_str())?;
        menu::execute(dir, command, out)?;
    }
    Ok(())
}

fn summary<W: Write>(dir: &Directory, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Stops: {}  |  Taxis: {}  |  Waiting or riding: {}  |  Delivered: {}",
        dir.stops().len(),
        dir.taxis().len(),
        dir.passengers().count(),
        dir.delivered_count()
    )
}
