use std::path::PathBuf;

use clap::Parser;

/// Print the colors of a linear gradient between two hex colors.
///
/// Output is the start color, each interior step, then the end color,
/// one per line.
#[derive(Parser, Debug)]
#[command(name = "color-steps", version, about)]
pub struct Args {
    /// Starting color, as RRGGBB or RGB with optional '#'.
    pub start_color: String,

    /// Ending color, as RRGGBB or RGB with optional '#'.
    pub end_color: String,

    /// Number of step colors to calculate between start and end.
    #[arg(allow_negative_numbers = true)]
    pub steps: i64,

    /// Prefix the computed step colors with '#'.
    #[arg(long)]
    pub hash: bool,

    /// Print only the computed steps, not the start and end colors.
    #[arg(long)]
    pub no_endpoints: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
