//! `agenda` CLI — check a proposed appointment slot against a booked schedule.
//!
//! ## Usage
//!
//! ```sh
//! # Schedule from a file, verdict to stdout
//! agenda check -i schedule.json --start 2026-03-02T14:00:00Z --end 2026-03-02T15:00:00Z
//!
//! # Schedule from stdin, verdict to a file
//! cat schedule.json | agenda check --start 2026-03-02T14:00:00 --end 2026-03-02T15:00:00 -o verdict.json
//! ```
//!
//! The schedule is a JSON array of `{id, start, end, description, patient_id}`
//! objects. Timestamps everywhere (schedule and flags) are RFC 3339 or naive
//! `YYYY-MM-DDTHH:MM:SS`, read as UTC. Schedule entries are not checked for
//! `end > start`; only the proposed appointment is. The verdict is
//! `{"can_add": bool, "conflicts": [...]}`.

use agenda_engine::{find_conflicting_appointments, parse_datetime, Appointment, Conflict};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "agenda",
    version,
    about = "Check appointment slots for conflicts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a new appointment fits into an existing schedule
    Check {
        /// Schedule JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Start of the proposed appointment (RFC 3339, or naive UTC)
        #[arg(long)]
        start: String,
        /// End of the proposed appointment (RFC 3339, or naive UTC)
        #[arg(long)]
        end: String,
        /// Id to give the proposed appointment
        #[arg(long, default_value_t = 0)]
        id: u64,
        /// Patient the proposed appointment belongs to
        #[arg(long, default_value_t = 0)]
        patient_id: u64,
    },
}

#[derive(Serialize)]
struct Verdict<'a> {
    can_add: bool,
    conflicts: Vec<Conflict<'a>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            output,
            start,
            end,
            id,
            patient_id,
        } => {
            let json = read_input(input.as_deref())?;
            let existing: Vec<Appointment> =
                serde_json::from_str(&json).context("Failed to parse schedule JSON")?;

            let start = parse_datetime(&start).context("Invalid --start")?;
            let end = parse_datetime(&end).context("Invalid --end")?;
            let candidate = Appointment::try_new(id, start, end, "", patient_id)
                .context("Invalid proposed appointment")?;

            let conflicts = find_conflicting_appointments(&candidate, &existing);
            let verdict = Verdict {
                can_add: conflicts.is_empty(),
                conflicts,
            };

            let pretty = serde_json::to_string_pretty(&verdict)?;
            write_output(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
