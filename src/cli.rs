use std::path::PathBuf;

use clap::Parser;

/// Ordo: 1962 Roman calendar exported as iCalendar.
#[derive(Debug, Parser)]
#[command(
    name = "ordo",
    version,
    about = "Liturgical calendar of the 1962 Roman rubrics, exported as .ics"
)]
pub struct Cli {
    /// First liturgical year (inclusive).
    pub start_year: i32,

    /// Last liturgical year (inclusive).
    pub end_year: i32,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to JSON configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the output .ics path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the propers index path from config.
    #[arg(short, long)]
    pub propers: Option<PathBuf>,
}
