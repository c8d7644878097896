//! Ephemeris table tool
//!
//! Prints the heliocentric equatorial J2000 position of every body at one
//! instant: the Sun, the major planets, and optionally the stars of a
//! catalog file.
//!
//! Usage:
//!   cargo run --bin ephemeris_table -- [--date 2030-06-01T00:00:00Z | --days N]
//!       [--catalog The10pcSample_v2.csv] [--no-planets]

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};
use orrery::constants::{KM_PER_AU, KM_PER_PARSEC, RAD2DEG};
use orrery::time::{datetime_from_days, days_since_j2000, format_offset};
use orrery::Loader;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Ephemeris table tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prints body positions at a given time",
    long_about = None
)]
struct Args {
    /// Instant as an RFC 3339 datetime (default: J2000)
    #[arg(long, conflicts_with = "days")]
    date: Option<DateTime<Utc>>,

    /// Instant as days since J2000
    #[arg(long, allow_hyphen_values = true)]
    days: Option<f64>,

    /// Star catalog (CSV, optionally gzipped)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// JSON loader configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Leave out the planets
    #[arg(long, action = ArgAction::SetTrue)]
    no_planets: bool,
}

/// Distance with a unit suited to its size
fn format_distance(km: f64) -> String {
    if km >= 0.1 * KM_PER_PARSEC {
        format!("{:.3} pc", km / KM_PER_PARSEC)
    } else {
        format!("{:.4} AU", km / KM_PER_AU)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let t = match (args.date, args.days) {
        (Some(date), _) => days_since_j2000(date),
        (None, Some(days)) => days,
        (None, None) => 0.0,
    };

    let mut loader = match &args.config {
        Some(path) => Loader::from_config_file(path)?,
        None => Loader::new(),
    };
    if let Some(path) = &args.catalog {
        loader = loader.with_catalog_path(path);
    }
    if args.no_planets {
        loader = loader.with_include_planets(false);
    }

    let table = loader.load_bodies()?;
    let report = table.report();

    match datetime_from_days(t) {
        Ok(datetime) => println!("Epoch: {} ({} from J2000)", datetime, format_offset(t)),
        Err(_) => println!("Epoch: {} from J2000", format_offset(t)),
    }
    if report.rejected > 0 || report.skipped_planets > 0 {
        println!(
            "Catalog: {} bodies, {} rows rejected, {} planet rows skipped",
            report.accepted, report.rejected, report.skipped_planets
        );
    }
    println!();
    println!(
        "{:<24} {:<11} {:>16} {:>16} {:>16} {:>14} {:>9} {:>9}",
        "Name", "Kind", "x (km)", "y (km)", "z (km)", "Distance", "RA", "Dec"
    );
    println!("{}", "-".repeat(122));

    for (body, (_, position)) in table.iter().zip(table.positions_at(t)) {
        let kind = body.kind.to_string();
        match position {
            Ok(p) => {
                let (ra, dec, distance) = p.to_spherical();
                let (ra, dec) = if distance > 0.0 {
                    (
                        format!("{:.3}", (ra * RAD2DEG).rem_euclid(360.0)),
                        format!("{:.3}", dec * RAD2DEG),
                    )
                } else {
                    ("-".to_string(), "-".to_string())
                };
                println!(
                    "{:<24} {:<11} {:>16.4e} {:>16.4e} {:>16.4e} {:>14} {:>9} {:>9}",
                    body.name,
                    kind,
                    p.x,
                    p.y,
                    p.z,
                    format_distance(distance),
                    ra,
                    dec
                );
            }
            Err(e) => println!("{:<24} {:<11} unavailable: {}", body.name, kind, e),
        }
    }

    Ok(())
}
