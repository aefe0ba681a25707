use std::path::PathBuf;

use clap::Parser;

/// Rename `<month>-<size>.<ext>` images to `<year>_<month>_<top|bottom>.<ext>`.
///
/// Files are renamed immediately, with no dry run and no rollback.
#[derive(Parser, Debug)]
#[command(name = "rename-calendar", version, about)]
pub struct Args {
    /// Directory to scan. Defaults to the current directory.
    #[arg(short = 'd', long)]
    pub dir: Option<PathBuf>,

    /// Year to put in front of every new name.
    #[arg(short = 'y', long)]
    pub year: Option<u32>,

    /// Extension of the files to rename, without the dot.
    #[arg(long)]
    pub ext: Option<String>,

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
