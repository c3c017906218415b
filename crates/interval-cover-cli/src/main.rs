//! `cover` CLI — solve batches of minimum interval cover problems.
//!
//! ## Usage
//!
//! ```sh
//! # Solve every case on stdin, one answer block per case
//! printf '0 1\n2\n0 0.6\n0.5 1\n' | cover solve
//!
//! # Read from file, write JSON reports to file
//! cover solve -i cases.txt -o answers.json --format json
//!
//! # Show which parts of each target are left uncovered
//! cover gaps -i cases.txt
//!
//! # Trace the sweep
//! RUST_LOG=debug cover solve -i cases.txt
//! ```

mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use interval_cover::{CoverError, Gap};
use log::{debug, info};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, Read};

use crate::input::{parse_cases, Case};

#[derive(Parser)]
#[command(
    name = "cover",
    version,
    about = "Minimum interval cover solver",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a minimum set of intervals covering each target
    Solve {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the stretches of each target that no interval covers
    Gaps {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `impossible`, or the count followed by the chosen indices
    Text,
    /// Array of per-case reports including uncovered gaps
    Json,
}

/// Per-case result in `--format json`.
#[derive(Serialize)]
struct CaseReport {
    case: usize,
    begin: f64,
    end: f64,
    cover: Option<Vec<usize>>,
    gaps: Vec<Gap<f64>>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            input,
            output,
            format,
        } => {
            let cases = parse_cases(&read_input(input.as_deref())?)?;
            info!("solving {} case(s)", cases.len());

            let rendered = match format {
                Format::Text => render_text(&cases)?,
                Format::Json => {
                    let reports = build_reports(&cases)?;
                    serde_json::to_string_pretty(&reports)? + "\n"
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Gaps { input, output } => {
            let cases = parse_cases(&read_input(input.as_deref())?)?;
            info!("finding gaps for {} case(s)", cases.len());

            let mut rendered = String::new();
            for (k, case) in cases.iter().enumerate() {
                let gaps = gaps_for(k + 1, case)?;
                writeln!(rendered, "case {}", k + 1)?;
                if gaps.is_empty() {
                    writeln!(rendered, "covered")?;
                }
                for gap in gaps {
                    writeln!(rendered, "{} {}", gap.start, gap.end)?;
                }
            }
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Run the cover for case number `number` (1-based).
///
/// `Ok(None)` means the target is infeasible; malformed ranges and intervals
/// are errors.
fn solve(number: usize, case: &Case) -> Result<Option<Vec<usize>>> {
    match interval_cover::cover(&case.intervals, case.begin, case.end) {
        Ok(chosen) => {
            debug!("case {}: {} interval(s) chosen", number, chosen.len());
            Ok(Some(chosen))
        }
        Err(CoverError::Infeasible) => {
            debug!("case {}: impossible", number);
            Ok(None)
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("Failed to solve case {}", number))),
    }
}

fn gaps_for(number: usize, case: &Case) -> Result<Vec<Gap<f64>>> {
    interval_cover::find_gaps(&case.intervals, case.begin, case.end)
        .with_context(|| format!("Failed to find gaps for case {}", number))
}

fn render_text(cases: &[Case]) -> Result<String> {
    let mut out = String::new();
    for (k, case) in cases.iter().enumerate() {
        match solve(k + 1, case)? {
            Some(chosen) => {
                let indices: Vec<String> = chosen.iter().map(|i| i.to_string()).collect();
                writeln!(out, "{}", chosen.len())?;
                writeln!(out, "{}", indices.join(" "))?;
            }
            None => writeln!(out, "impossible")?,
        }
    }
    Ok(out)
}

fn build_reports(cases: &[Case]) -> Result<Vec<CaseReport>> {
    cases
        .iter()
        .enumerate()
        .map(|(k, case)| {
            Ok(CaseReport {
                case: k + 1,
                begin: case.begin,
                end: case.end,
                cover: solve(k + 1, case)?,
                gaps: gaps_for(k + 1, case)?,
            })
        })
        .collect()
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
            print!("{}", content);
        }
    }
    Ok(())
}
