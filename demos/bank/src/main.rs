//! bank — one simulated day at a bank with up to 10 service windows.
//!
//! Customers arrive every 1–10 minutes from 8:00 until 18:30, each needing
//! 1–40 minutes of service, and join the window with the least outstanding
//! work.  After the last customer leaves, each window's service history can
//! be browsed interactively.
//!
//! # Example
//!
//! ```bash
//! # Prompt for the window count, random seed
//! bank
//!
//! # Reproducible run with 4 windows, CSV export and per-event logging
//! RUST_LOG=bank_sim=debug bank --windows 4 --seed 42 --export ./output
//! ```

mod console;

#[cfg(test)]
mod tests;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bank_core::{BankConfig, ServiceMode};
use bank_output::{CsvWriter, LedgerObserver, render_summary, render_window_report};
use bank_sim::{NoopObserver, SimBuilder};

/// Bank queue simulator
///
/// Runs one deterministic day for a given seed, then lets you inspect every
/// window's service history.
#[derive(Parser, Debug)]
#[command(name = "bank")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of service windows (1-10). Prompted for when omitted.
    #[arg(short = 'w', long)]
    windows: Option<usize>,

    /// Random seed for reproducible results. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Departure scheduling: "sequential" or "overlapping".
    #[arg(short = 'm', long)]
    mode: Option<ServiceMode>,

    /// JSON file with a full `BankConfig`; flags override its fields.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory for services.csv and summary.csv.
    #[arg(short = 'e', long)]
    export: Option<PathBuf>,
}

/// A `BankConfig` read from JSON, plus which defaulted fields the file
/// actually set.
#[derive(Debug)]
struct FileConfig {
    config:           BankConfig,
    has_window_count: bool,
    has_seed:         bool,
}

fn parse_config(text: &str) -> Result<FileConfig> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let has_window_count = value.get("window_count").is_some();
    let has_seed = value.get("seed").is_some();
    let config = serde_json::from_value(value)?;
    Ok(FileConfig { config, has_window_count, has_seed })
}

fn load_config(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,bank_sim=info")),
        )
        .init();

    let args = Args::parse();

    let FileConfig { mut config, has_window_count, has_seed } = match &args.config {
        Some(path) => load_config(path)?,
        None => FileConfig {
            config:           BankConfig::default(),
            has_window_count: false,
            has_seed:         false,
        },
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    } else if !has_seed {
        config.seed = rand::random();
    }
    if let Some(mode) = args.mode {
        config.service_mode = mode;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(windows) = args.windows {
        config.window_count = windows;
    } else if !has_window_count {
        match console::prompt_window_count(&mut input, &mut out)? {
            Some(windows) => config.window_count = windows,
            None => bail!("no window count given before end of input"),
        }
    }

    info!(windows = config.window_count, seed = config.seed, "starting simulation");

    let mut sim = SimBuilder::new(config).build()?;
    let clock = sim.clock();

    let summary = match &args.export {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating export directory {}", dir.display()))?;
            let mut observer = LedgerObserver::new(CsvWriter::new(dir)?);
            let summary = sim.run(&mut observer)?;
            if let Some(err) = observer.take_error() {
                return Err(err).context("writing CSV export");
            }
            info!(dir = %dir.display(), "CSV export written");
            summary
        }
        None => sim.run(&mut NoopObserver)?,
    };

    writeln!(out, "{}", render_summary(&summary, clock))?;

    let window_count = summary.window_count;
    console::query_loop(&mut input, &mut out, window_count, |window| {
        let entries = sim.report(window)?;
        Ok(format!(
            "{}\n{}",
            render_summary(&summary, clock),
            render_window_report(window, entries, clock),
        ))
    })?;

    sim.terminate()?;
    Ok(())
}
