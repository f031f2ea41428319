//! `slots` CLI — list and verify bookable appointment times from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # List bookable start times for a service on a date
//! slots available --business shop.toml --service haircut --date 2026-03-16
//!
//! # Same, with the day's existing appointments
//! slots available -b shop.toml -s haircut -d 2026-03-16 --appointments booked.json
//!
//! # Compute from a raw request body (stdin → stdout)
//! cat request.json | slots compute
//!
//! # Re-check one start time right before booking it
//! slots check -b shop.toml -s haircut --at 2026-03-16T10:00:00 --appointments booked.json
//! ```

mod config;
mod logger;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use slot_engine::{compute_available_slots, verify_booking, SlotRequest, SlotResponse};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "slots", version, about = "Bookable appointment slot CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log slot computation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable start times for a service on a date
    Available {
        /// Business profile (TOML)
        #[arg(short, long)]
        business: PathBuf,
        /// Service id from the business profile
        #[arg(short, long)]
        service: String,
        /// Date to list, as YYYY-MM-DD
        #[arg(short, long)]
        date: NaiveDate,
        /// JSON array of existing appointments
        #[arg(short, long)]
        appointments: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute bookable start times from a JSON slot request
    Compute {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check whether one start time can still be booked
    Check {
        /// Business profile (TOML)
        #[arg(short, long)]
        business: PathBuf,
        /// Service id from the business profile
        #[arg(short, long)]
        service: String,
        /// Requested start, e.g. 2026-03-16T10:00:00
        #[arg(long)]
        at: String,
        /// JSON array of existing appointments
        #[arg(short, long)]
        appointments: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Commands::Available {
            business,
            service,
            date,
            appointments,
            output,
        } => {
            let profile = config::load_profile(&business)?;
            let appointments = config::load_appointments(appointments.as_deref())?;
            let request = profile
                .request_for(&service, date, &appointments)
                .with_context(|| format!("Cannot list slots for '{}' on {}", service, date))?;

            let times = compute_available_slots(&request).context("Failed to compute slots")?;
            info!(business = %profile.name, %service, %date, available = times.len(), "listed slots");
            write_json(output.as_deref(), &SlotResponse::from(times))?;
        }
        Commands::Compute { input, output } => {
            let body = read_input(input.as_deref())?;
            let request = SlotRequest::from_json(&body).context("Failed to parse slot request")?;
            let times = compute_available_slots(&request).context("Failed to compute slots")?;
            write_json(output.as_deref(), &SlotResponse::from(times))?;
        }
        Commands::Check {
            business,
            service,
            at,
            appointments,
        } => {
            let start = config::parse_start(&at)?;
            let profile = config::load_profile(&business)?;
            let appointments = config::load_appointments(appointments.as_deref())?;
            let request = profile
                .request_for(&service, start.date(), &appointments)
                .with_context(|| format!("Cannot check '{}' at {}", service, start))?;

            let verdict = verify_booking(&request, start).context("Failed to verify booking")?;
            info!(%service, %start, bookable = verdict.is_bookable(), "checked booking");
            write_json(None, &verdict)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_json<T: Serialize>(path: Option<&Path>, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
