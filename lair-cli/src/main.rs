//! CLI for finding the largest axis-aligned rectangle inside a closed
//! rectilinear contour.
//!
//! Reads a vertex file (one `"x,y"` per line, file order defining the
//! contour path) and prints the maximum interior rectangle area.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use lair_core::{largest_candidate_area, largest_interior_rect, parse_log_level, Polygon, Rect};

mod render;

#[derive(Parser)]
#[command(name = "lair")]
#[command(about = "Largest axis-aligned rectangle inside a rectilinear contour", long_about = None)]
struct Cli {
    /// Input file: one "x,y" vertex per line, in contour order
    input: PathBuf,

    /// Print a JSON report instead of the bare area
    #[arg(long)]
    json: bool,

    /// Print an ASCII rendering of the contour and the winning rectangle
    #[arg(long)]
    render: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,
}

/// Machine-readable result for `--json`.
#[derive(Debug, Serialize)]
struct Report {
    /// Maximum interior rectangle area, or null when nothing fits
    area: Option<i64>,
    rect: Option<Rect>,
    /// Area of the largest candidate before containment testing
    largest_candidate_area: Option<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut builder = env_logger::Builder::from_default_env();
    if cli.log_level.is_some() {
        builder.filter_level(parse_log_level(cli.log_level.as_deref()));
    }
    builder.init();

    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let polygon = Polygon::parse(&input)?;
    let winner = largest_interior_rect(&polygon)?;

    if cli.render {
        print!("{}", render::render_grid(&polygon, winner.as_ref())?);
    }
    if cli.json {
        let report = Report {
            area: winner.map(|r| r.area()),
            rect: winner,
            largest_candidate_area: largest_candidate_area(&polygon),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match winner {
            Some(rect) => println!("{}", rect.area()),
            None => eprintln!("no interior rectangle"),
        }
    }
    Ok(())
}
