//! Decode METAR reports from the command line without starting the server.
//!
//! Reports are taken from the positional arguments (joined with spaces) or,
//! when none are given, one per line from stdin.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead};

use metar_reader::{MetarError, ParseMode};

#[derive(Parser, Debug)]
#[command(name = "decode_metar")]
#[command(author, version, about = "Decode METAR reports", long_about = None)]
struct Args {
    /// Parser to run (structured, narrative)
    #[arg(short, long, default_value = "structured")]
    mode: ParseMode,

    /// Report text; read from stdin when omitted
    report: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let reports: Vec<String> = if args.report.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read reports from stdin")?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        vec![args.report.join(" ")]
    };

    let mut failures = 0;
    for raw in &reports {
        match decode(args.mode, raw) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                failures += 1;
                eprintln!("{}: {}", raw, e);
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn decode(mode: ParseMode, raw: &str) -> Result<String, MetarError> {
    let value = mode.render(raw)?;
    match mode {
        ParseMode::Structured => Ok(serde_json::to_string_pretty(&value)?),
        ParseMode::Narrative => Ok(value["readable"].as_str().unwrap_or_default().to_string()),
    }
}
